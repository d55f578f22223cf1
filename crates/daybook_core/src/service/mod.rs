//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, model and temporal components into use-case APIs.
//! - Keep the menu layer decoupled from persistence and ordering details.
//!
//! # Invariants
//! - Services never terminate the process; every failure is a typed error
//!   the caller can report, skip, or re-prompt on.

use crate::model::record::RecordId;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod briefing;
pub mod collection;

pub use briefing::{build_briefing, quick_stats, Briefing, ExamOutlook, QuickStats};
pub use collection::Collection;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by collection operations.
#[derive(Debug)]
pub enum ServiceError {
    Store(StoreError),
    /// The referenced id is absent from its collection. Recoverable: report
    /// and continue, never a process failure.
    NotFound(RecordId),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
