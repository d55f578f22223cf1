//! Derived record status.

use crate::model::record::{Record, RecordStatus};
use chrono::NaiveDateTime;

/// Status derived on read; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedStatus {
    /// Pending with a target strictly in the past.
    Overdue,
    /// Pending with a target later on the current calendar day.
    DueToday,
    /// Pending with a future target, or no target at all.
    Upcoming,
    /// Explicitly completed; dates no longer matter.
    Completed,
}

/// Classifies a record against the supplied clock.
///
/// Pure function. Completed records are never reclassified as overdue, and a
/// record with no `target_datetime` contributes no urgency.
pub fn derive_status(record: &Record, now: NaiveDateTime) -> DerivedStatus {
    if record.status == RecordStatus::Completed {
        return DerivedStatus::Completed;
    }

    let Some(target) = record.target_datetime else {
        return DerivedStatus::Upcoming;
    };

    if target < now {
        DerivedStatus::Overdue
    } else if target.date() == now.date() {
        DerivedStatus::DueToday
    } else {
        DerivedStatus::Upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::{derive_status, DerivedStatus};
    use crate::model::record::Record;
    use crate::temporal::parse_datetime;
    use chrono::NaiveDateTime;

    fn at(text: &str) -> NaiveDateTime {
        parse_datetime(text).unwrap()
    }

    fn record_due(target: &str) -> Record {
        let mut record = Record::new("sample", at("2024-01-01 08:00"));
        record.target_datetime = Some(at(target));
        record
    }

    #[test]
    fn past_target_is_overdue() {
        let record = record_due("2024-01-05");
        assert_eq!(
            derive_status(&record, at("2024-01-08 09:00")),
            DerivedStatus::Overdue
        );
    }

    #[test]
    fn date_only_target_stays_due_today_all_day() {
        let record = record_due("2024-01-08");
        assert_eq!(
            derive_status(&record, at("2024-01-08 22:00")),
            DerivedStatus::DueToday
        );
    }

    #[test]
    fn timed_target_earlier_today_is_overdue() {
        let record = record_due("2024-01-08 09:00");
        assert_eq!(
            derive_status(&record, at("2024-01-08 10:00")),
            DerivedStatus::Overdue
        );
    }

    #[test]
    fn future_target_is_upcoming() {
        let record = record_due("2024-02-01");
        assert_eq!(
            derive_status(&record, at("2024-01-08 09:00")),
            DerivedStatus::Upcoming
        );
    }

    #[test]
    fn no_target_is_never_overdue_nor_due_today() {
        let record = Record::new("undated", at("2024-01-01 08:00"));
        assert_eq!(
            derive_status(&record, at("2024-01-08 09:00")),
            DerivedStatus::Upcoming
        );
    }

    #[test]
    fn completed_wins_over_any_date() {
        let mut record = record_due("2020-01-01");
        record.complete();
        assert_eq!(
            derive_status(&record, at("2024-01-08 09:00")),
            DerivedStatus::Completed
        );
    }
}
