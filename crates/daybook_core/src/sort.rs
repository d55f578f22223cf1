//! Display ordering over heterogeneous record collections.
//!
//! # Responsibility
//! - Produce one total, deterministic order for any set of records.
//!
//! # Invariants
//! - Pure: same records and clock always yield the same sequence, whatever
//!   the input permutation.
//! - Persisted insertion order is never relied upon for correctness.

use crate::model::record::{Priority, Record, RecordId, RecordStatus, Temporal};
use crate::temporal::{derive_status, DerivedStatus};
use chrono::NaiveDateTime;

/// Orders records for display.
///
/// Precedence: pending before completed; among pending, overdue before
/// due-today before upcoming before undated; then priority high to low;
/// then target ascending (undated last); `id` breaks remaining ties.
pub fn order<T: Temporal>(mut items: Vec<T>, now: NaiveDateTime) -> Vec<T> {
    items.sort_by_key(|item| sort_key(item.record(), now));
    items
}

type SortKey = (u8, u8, u8, NaiveDateTime, RecordId);

fn sort_key(record: &Record, now: NaiveDateTime) -> SortKey {
    let completed_rank = match record.status {
        RecordStatus::Pending => 0,
        RecordStatus::Completed => 1,
    };

    let urgency_rank = if record.target_datetime.is_none() {
        3
    } else {
        match derive_status(record, now) {
            DerivedStatus::Overdue => 0,
            DerivedStatus::DueToday => 1,
            DerivedStatus::Upcoming | DerivedStatus::Completed => 2,
        }
    };

    let priority_rank = match record.priority {
        Priority::High => 0,
        Priority::Medium => 1,
        Priority::Low => 2,
    };

    (
        completed_rank,
        urgency_rank,
        priority_rank,
        record.target_datetime.unwrap_or(NaiveDateTime::MAX),
        record.id,
    )
}
