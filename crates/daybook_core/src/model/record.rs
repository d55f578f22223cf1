//! Shared temporal record model.
//!
//! # Responsibility
//! - Define the base field set every dated domain object carries.
//! - Provide explicit lifecycle helpers for the pending/completed machine.
//!
//! # Invariants
//! - `id` is stable and never reused within a collection.
//! - `created_at` is set once at creation and never mutated.
//! - `status` changes only through explicit user action (`complete`,
//!   `reopen`), never inferred from dates.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every record within its collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

/// Explicit user-assigned priority.
///
/// Ordering is declaration order (`Low < Medium < High`); display ordering
/// inverts it so high-priority records surface first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Lifecycle state of a record.
///
/// There is deliberately no in-progress state; the original tracker only
/// ever distinguished open work from finished work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Pending,
    Completed,
}

/// Base unit for any temporal entity (assignment, reminder, event, ...).
///
/// Domain types embed this by composition and add their own fields; the
/// serialized names below are the stable on-disk contract and must not
/// change across versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    /// Absent for records with no deadline (plain notes and the like).
    pub target_datetime: Option<NaiveDateTime>,
    #[serde(default)]
    pub priority: Priority,
    pub status: RecordStatus,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Record {
    /// Creates a pending record with a generated stable id.
    ///
    /// The creation clock is supplied by the caller so construction stays
    /// deterministic under test.
    pub fn new(title: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self::with_id(Uuid::new_v4(), title, created_at)
    }

    /// Creates a record with a caller-provided stable id.
    ///
    /// Used by tests that need reproducible ordering tie-breaks.
    pub fn with_id(id: RecordId, title: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            title: title.into(),
            target_datetime: None,
            priority: Priority::default(),
            status: RecordStatus::Pending,
            created_at,
            category: None,
            tags: Vec::new(),
        }
    }

    /// Marks this record completed.
    pub fn complete(&mut self) {
        self.status = RecordStatus::Completed;
    }

    /// Returns a completed record to the pending state.
    pub fn reopen(&mut self) {
        self.status = RecordStatus::Pending;
    }

    pub fn is_pending(&self) -> bool {
        self.status == RecordStatus::Pending
    }
}

/// Access to the embedded base record.
///
/// Every domain type implements this so ordering, derived status and the
/// briefing can treat heterogeneous collections uniformly.
pub trait Temporal {
    fn record(&self) -> &Record;
    fn record_mut(&mut self) -> &mut Record;
}

impl Temporal for Record {
    fn record(&self) -> &Record {
        self
    }

    fn record_mut(&mut self) -> &mut Record {
        self
    }
}
