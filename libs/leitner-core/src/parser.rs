//! Markdown parser for flashcard decks.
//!
//! # Format
//! ```markdown
//! ID: 1
//! Q: What is Rust?
//! A: A systems programming language.
//! H: think systems
//! T: rust, languages
//!
//! Q: Explain borrowing
//! A: Borrowing allows references without ownership.
//! Multiple lines are supported.
//! ```
//!
//! `H:` and `T:` are optional single-line fields. Cards without an `ID:` line
//! are numbered after the highest explicit ID, in file order.

use crate::error::{ParseError, Result};
use crate::types::{CardId, Flashcard};
use std::collections::HashSet;

/// Parse markdown content into flashcards.
pub fn parse(content: &str) -> Result<Vec<Flashcard>, ParseError> {
    if content.trim().is_empty() {
        return Ok(vec![]);
    }

    let mut parser = Parser::new();
    for (idx, line) in content.lines().enumerate() {
        parser.process_line(line, idx + 1)?;
    }
    let drafts = parser.finish()?;

    let mut seen_ids = HashSet::new();
    for draft in &drafts {
        if let Some(id) = draft.id {
            if !seen_ids.insert(id) {
                return Err(ParseError::DuplicateId {
                    id,
                    line: draft.line_number,
                });
            }
        }
    }

    let mut next_id = match seen_ids.iter().copied().max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    };
    let mut cards = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let id = match draft.id {
            Some(id) => id,
            None => {
                let id = next_id.ok_or(ParseError::IdOverflow {
                    line: draft.line_number,
                })?;
                next_id = id.checked_add(1);
                id
            }
        };
        cards.push(draft.into_card(id));
    }

    tracing::debug!(cards = cards.len(), explicit_ids = seen_ids.len(), "parsed deck");
    Ok(cards)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Front,
    Back,
}

/// Card as read from the file, before ID assignment.
struct Draft {
    id: Option<CardId>,
    front: String,
    back: String,
    hint: Option<String>,
    tags: Vec<String>,
    line_number: usize,
}

impl Draft {
    fn into_card(self, id: CardId) -> Flashcard {
        Flashcard {
            id,
            front: self.front,
            back: self.back,
            hint: self.hint,
            tags: self.tags,
        }
    }
}

struct CardBuilder {
    id: Option<CardId>,
    front: Option<String>,
    back: Option<String>,
    hint: Option<String>,
    tags: Vec<String>,
    start_line: usize,
}

impl CardBuilder {
    fn new(start_line: usize) -> Self {
        Self {
            id: None,
            front: None,
            back: None,
            hint: None,
            tags: Vec::new(),
            start_line,
        }
    }

    fn build(self) -> Result<Draft, ParseError> {
        let front = self.front.ok_or(ParseError::MissingFront {
            line: self.start_line,
        })?;
        let back = self.back.ok_or(ParseError::MissingBack {
            line: self.start_line,
        })?;

        Ok(Draft {
            id: self.id,
            front: front.trim().to_string(),
            back: back.trim().to_string(),
            hint: self.hint,
            tags: self.tags,
            line_number: self.start_line,
        })
    }
}

struct Parser {
    cards: Vec<Draft>,
    current: Option<CardBuilder>,
    current_field: Option<Field>,
    buffer: Vec<String>,
}

impl Parser {
    fn new() -> Self {
        Self {
            cards: Vec::new(),
            current: None,
            current_field: None,
            buffer: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> Result<(), ParseError> {
        match Self::parse_line(line) {
            LineType::Id(id_str) => self.handle_id(id_str, line_num)?,
            LineType::Front(text) => self.handle_front(text, line_num)?,
            LineType::Back(text) => self.handle_back(text, line_num),
            LineType::Hint(text) => self.handle_hint(text, line_num),
            LineType::Tags(text) => self.handle_tags(text, line_num),
            LineType::Text(text) => self.buffer.push(text.to_string()),
            LineType::Empty => self.buffer.push(String::new()),
        }
        Ok(())
    }

    fn parse_line(line: &str) -> LineType<'_> {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("ID:") {
            LineType::Id(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("Q:") {
            LineType::Front(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("A:") {
            LineType::Back(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("H:") {
            LineType::Hint(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("T:") {
            LineType::Tags(rest.trim())
        } else if trimmed.is_empty() {
            LineType::Empty
        } else {
            LineType::Text(line)
        }
    }

    fn handle_id(&mut self, id_str: &str, line_num: usize) -> Result<(), ParseError> {
        let id = id_str.parse::<CardId>().map_err(|_| ParseError::InvalidId {
            line: line_num,
            value: id_str.to_string(),
        })?;

        // An ID always opens a new card
        self.close_card()?;
        let mut card = CardBuilder::new(line_num);
        card.id = Some(id);
        self.current = Some(card);
        Ok(())
    }

    fn handle_front(&mut self, text: &str, line_num: usize) -> Result<(), ParseError> {
        self.flush_buffer();

        // A second Q: without an ID line starts the next card
        let has_front = self.current.as_ref().is_some_and(|card| card.front.is_some());
        if has_front {
            self.close_card()?;
        }
        if self.current.is_none() {
            self.current = Some(CardBuilder::new(line_num));
        }

        self.current_field = Some(Field::Front);
        self.buffer.push(text.to_string());
        Ok(())
    }

    fn handle_back(&mut self, text: &str, line_num: usize) {
        self.flush_buffer();
        if self.current.is_none() {
            self.current = Some(CardBuilder::new(line_num));
        }
        self.current_field = Some(Field::Back);
        self.buffer.push(text.to_string());
    }

    fn handle_hint(&mut self, text: &str, line_num: usize) {
        self.flush_buffer();
        self.current_field = None;
        self.current
            .get_or_insert_with(|| CardBuilder::new(line_num))
            .hint = Some(text.to_string());
    }

    fn handle_tags(&mut self, text: &str, line_num: usize) {
        self.flush_buffer();
        self.current_field = None;
        self.current
            .get_or_insert_with(|| CardBuilder::new(line_num))
            .tags = text
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
    }

    fn flush_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let content = self.buffer.join("\n");
        self.buffer.clear();

        if let Some(ref mut card) = self.current {
            match self.current_field {
                Some(Field::Front) => card.front = Some(content),
                Some(Field::Back) => card.back = Some(content),
                None => {}
            }
        }
    }

    fn close_card(&mut self) -> Result<(), ParseError> {
        self.flush_buffer();
        self.current_field = None;
        if let Some(card) = self.current.take() {
            self.cards.push(card.build()?);
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<Draft>, ParseError> {
        self.close_card()?;
        Ok(self.cards)
    }
}

enum LineType<'a> {
    Id(&'a str),
    Front(&'a str),
    Back(&'a str),
    Hint(&'a str),
    Tags(&'a str),
    Text(&'a str),
    Empty,
}
