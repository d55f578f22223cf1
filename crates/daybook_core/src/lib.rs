//! Core domain logic for Daybook.
//! This crate is the single source of truth for record invariants: the menu
//! layer renders and prompts, nothing more.

pub mod logging;
pub mod model;
pub mod service;
pub mod sort;
pub mod store;
pub mod temporal;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::domains::{
    Assignment, Contact, DomainRecord, Errand, Exam, FamilyEvent, FamilyMember, GiftIdea, Note,
    PlannerEntry, Reminder, Repeat, Todo,
};
pub use model::record::{Priority, Record, RecordId, RecordStatus, Temporal};
pub use service::{
    build_briefing, quick_stats, Briefing, Collection, ExamOutlook, QuickStats, ServiceError,
    ServiceResult,
};
pub use sort::order;
pub use store::{CollectionStore, JsonFileStore, StoreError, StoreResult};
pub use temporal::{
    days_until, derive_status, friendly_deadline, next_birthday, parse_datetime, Countdown,
    DerivedStatus, TemporalError, TemporalResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
