//! Countdown and deadline phrasing.
//!
//! # Responsibility
//! - Turn the distance between a caller-supplied clock and a target into a
//!   structured remaining duration or day-granularity labels.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::fmt::{Display, Formatter};

/// Remaining time until a target, or the fact that it has passed.
///
/// Callers must branch on `Elapsed` instead of ever rendering a negative
/// duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining { days: i64, hours: i64, minutes: i64 },
    Elapsed,
}

impl Countdown {
    /// Computes the countdown from `now` to `target`.
    ///
    /// `target <= now` is `Elapsed`; the boundary itself counts as elapsed
    /// so a deadline hit at this exact minute is not "0 minutes left".
    pub fn until(target: NaiveDateTime, now: NaiveDateTime) -> Self {
        if target <= now {
            return Self::Elapsed;
        }

        let delta = target - now;
        Self::Remaining {
            days: delta.num_days(),
            hours: delta.num_hours() % 24,
            minutes: delta.num_minutes() % 60,
        }
    }
}

impl Display for Countdown {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remaining { days, hours, minutes } => {
                write!(f, "{days}d {hours}h {minutes}m")
            }
            Self::Elapsed => write!(f, "elapsed"),
        }
    }
}

/// Whole calendar days from `now` to `target`; negative when past.
pub fn days_until(target: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (target.date() - now.date()).num_days()
}

/// Human phrasing for a deadline: "today", "tomorrow", "in 3 days",
/// "overdue by 2 days".
pub fn friendly_deadline(target: NaiveDateTime, now: NaiveDateTime) -> String {
    match days_until(target, now) {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        days if days > 1 => format!("in {days} days"),
        days => {
            let late = -days;
            format!("overdue by {late} day{}", if late == 1 { "" } else { "s" })
        }
    }
}

/// Next occurrence of a yearly date, with days until it.
///
/// Birthdays on Feb 29 are observed on Mar 1 in common years. A birthday
/// falling on `today` returns zero days, not a date next year.
pub fn next_birthday(birthday: NaiveDate, today: NaiveDate) -> (NaiveDate, i64) {
    let this_year = occurrence_in_year(birthday, today.year());
    let next = if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        this_year
    };
    (next, (next - today).num_days())
}

fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birthday)
}

#[cfg(test)]
mod tests {
    use super::{days_until, friendly_deadline, next_birthday, Countdown};
    use crate::temporal::parse_datetime;
    use chrono::NaiveDate;

    fn at(text: &str) -> chrono::NaiveDateTime {
        parse_datetime(text).unwrap()
    }

    #[test]
    fn countdown_splits_days_hours_minutes() {
        let countdown = Countdown::until(at("2024-01-10 12:30"), at("2024-01-08 10:00"));
        assert_eq!(
            countdown,
            Countdown::Remaining {
                days: 2,
                hours: 2,
                minutes: 30
            }
        );
        assert_eq!(countdown.to_string(), "2d 2h 30m");
    }

    #[test]
    fn target_equal_to_now_is_elapsed() {
        let now = at("2024-01-08 10:00");
        assert_eq!(Countdown::until(now, now), Countdown::Elapsed);
    }

    #[test]
    fn past_target_is_elapsed_not_negative() {
        assert_eq!(
            Countdown::until(at("2024-01-05"), at("2024-01-08 10:00")),
            Countdown::Elapsed
        );
    }

    #[test]
    fn friendly_phrasing_covers_all_ranges() {
        let now = at("2024-01-08 10:00");
        assert_eq!(friendly_deadline(at("2024-01-08"), now), "today");
        assert_eq!(friendly_deadline(at("2024-01-09"), now), "tomorrow");
        assert_eq!(friendly_deadline(at("2024-01-12"), now), "in 4 days");
        assert_eq!(friendly_deadline(at("2024-01-07"), now), "overdue by 1 day");
        assert_eq!(friendly_deadline(at("2024-01-05"), now), "overdue by 3 days");
    }

    #[test]
    fn days_until_uses_calendar_days_not_full_periods() {
        // 23:59 tonight is still "1 day" away from 00:01 yesterday's view.
        assert_eq!(days_until(at("2024-01-09 00:01"), at("2024-01-08 23:59")), 1);
    }

    #[test]
    fn next_birthday_rolls_into_next_year_after_passing() {
        let birthday = NaiveDate::from_ymd_opt(1990, 3, 14).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let (next, days) = next_birthday(birthday, today);
        assert_eq!(next, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(days, (next - today).num_days());
    }

    #[test]
    fn birthday_today_counts_as_zero_days() {
        let birthday = NaiveDate::from_ymd_opt(1990, 6, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(next_birthday(birthday, today).1, 0);
    }

    #[test]
    fn leap_day_observed_on_march_first() {
        let birthday = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
        let today = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap();
        let (next, _) = next_birthday(birthday, today);
        assert_eq!(next, NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
    }
}
