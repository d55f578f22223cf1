//! Closed-grammar date/time parsing.
//!
//! # Responsibility
//! - Accept exactly the enumerated entry formats; fail closed on anything
//!   else instead of guessing.

use crate::temporal::{TemporalError, TemporalResult};
use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a user-entered deadline.
///
/// Accepted forms:
/// - `YYYY-MM-DD HH:MM` — taken literally.
/// - `YYYY-MM-DD` — normalized to 23:59:59, so a date-only deadline means
///   "by end of that day" and stays due (not overdue) throughout it.
///
/// # Errors
/// Returns [`TemporalError::InvalidDateFormat`] for any other input,
/// including empty strings and ambiguous regional formats.
pub fn parse_datetime(input: &str) -> TemporalResult<NaiveDateTime> {
    let trimmed = input.trim();

    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT) {
        return Ok(parsed);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return end_of_day(date);
    }

    Err(TemporalError::InvalidDateFormat(trimmed.to_string()))
}

fn end_of_day(date: NaiveDate) -> TemporalResult<NaiveDateTime> {
    date.and_hms_opt(23, 59, 59)
        .ok_or_else(|| TemporalError::InvalidDateFormat(date.to_string()))
}
