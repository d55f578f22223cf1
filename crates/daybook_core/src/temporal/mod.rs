//! Date parsing and derived temporal views.
//!
//! # Responsibility
//! - Validate date/time input against a closed grammar of formats.
//! - Compute derived status and countdowns on read, from a caller-supplied
//!   clock.
//!
//! # Invariants
//! - Nothing in this module reads the wall clock; `now` always comes from
//!   the caller.
//! - Derived values are never persisted.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod countdown;
pub mod parse;
pub mod status;

pub use countdown::{days_until, friendly_deadline, next_birthday, Countdown};
pub use parse::parse_datetime;
pub use status::{derive_status, DerivedStatus};

pub type TemporalResult<T> = Result<T, TemporalError>;

/// Error for user-supplied date/time input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    /// Input matched none of the accepted formats. Recoverable: re-prompt.
    InvalidDateFormat(String),
}

impl Display for TemporalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateFormat(input) => write!(
                f,
                "invalid date `{input}`; expected YYYY-MM-DD or YYYY-MM-DD HH:MM"
            ),
        }
    }
}

impl Error for TemporalError {}
