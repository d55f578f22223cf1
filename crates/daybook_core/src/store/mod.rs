//! Persistence boundary for named record collections.
//!
//! # Responsibility
//! - Define the whole-collection load/save contract.
//! - Isolate file and encoding details from service orchestration.
//!
//! # Invariants
//! - A never-written collection loads as empty, not as an error.
//! - Corrupt persisted data fails loudly with the collection name and is
//!   never overwritten by a read path.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod json_store;

pub use json_store::{CollectionStore, JsonFileStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from collection persistence.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure while reading or writing a collection.
    Io {
        collection: String,
        source: std::io::Error,
    },
    /// Persisted data exists but cannot be parsed. The file is left as-is
    /// so the user can inspect or repair it.
    Corrupt { collection: String, detail: String },
    /// In-memory records could not be encoded; nothing was written.
    Encode { collection: String, detail: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { collection, source } => {
                write!(f, "storage failure for collection `{collection}`: {source}")
            }
            Self::Corrupt { collection, detail } => {
                write!(f, "collection `{collection}` holds corrupt data: {detail}")
            }
            Self::Encode { collection, detail } => {
                write!(f, "failed to encode collection `{collection}`: {detail}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Corrupt { .. } | Self::Encode { .. } => None,
        }
    }
}

impl StoreError {
    /// Collection this error belongs to, for menu-layer reporting.
    pub fn collection(&self) -> &str {
        match self {
            Self::Io { collection, .. }
            | Self::Corrupt { collection, .. }
            | Self::Encode { collection, .. } => collection,
        }
    }
}
