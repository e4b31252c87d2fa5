//! Study day numbering with a daily reset hour.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::error::{Result, SchedulerError};
use crate::types::Day;

/// Day number of `now` counted from `start` (day 0).
///
/// An instant whose hour is earlier than `daily_reset_hour` is numbered with
/// the calendar date before it, so a session running past midnight keeps
/// one day number until the reset hour.
///
/// # Arguments
/// * `start` - Calendar date of the first study day
/// * `now` - Local wall-clock time to convert
/// * `daily_reset_hour` - Hour of day (0-23) when a new study day begins
pub fn study_day(start: NaiveDate, now: NaiveDateTime, daily_reset_hour: u32) -> Result<Day> {
    if daily_reset_hour > 23 {
        return Err(SchedulerError::InvalidResetHour(daily_reset_hour));
    }

    let date = if now.hour() < daily_reset_hour {
        now.checked_sub_signed(Duration::days(1))
            .ok_or(SchedulerError::DayBeforeStart {
                date: now.date(),
                start,
            })?
            .date()
    } else {
        now.date()
    };

    Day::try_from((date - start).num_days())
        .map_err(|_| SchedulerError::DayBeforeStart { date, start })
}
