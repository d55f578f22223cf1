//! Unified domain model for all dated collections.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one shared record shape under every domain specialization.
//!
//! # Invariants
//! - Every domain object is identified by a stable `RecordId`.
//! - Derived values (status, countdowns) are never part of the model.

pub mod domains;
pub mod record;
