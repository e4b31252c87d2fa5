//! Answer hints shown before the card is flipped.

use crate::error::{Result, SchedulerError};
use crate::types::Flashcard;

/// Build a hint from the card's stored hint and its trimmed answer.
///
/// The answer must be non-blank and fit on a single line once trimmed.
/// Length is counted in characters, not bytes.
pub fn hint_for(card: &Flashcard) -> Result<String> {
    let answer = card.back.trim();

    let first_char = answer
        .chars()
        .next()
        .ok_or(SchedulerError::BlankAnswer { id: card.id })?;

    if answer.contains(['\n', '\r']) {
        return Err(SchedulerError::MultilineAnswer { id: card.id });
    }

    Ok(format!(
        "Hint: {}. The answer starts with '{}' and has {} characters.",
        card.hint.as_deref().unwrap_or_default(),
        first_char,
        answer.chars().count()
    ))
}
