//! JSON-file collection store.
//!
//! # Responsibility
//! - Persist each named collection as one pretty-printed JSON array file
//!   under the data directory.
//!
//! # Invariants
//! - Saves rewrite the whole file (last writer wins; no crash atomicity by
//!   design, single-user single-process usage).
//! - The data directory is created on first write, never on read.

use crate::store::{StoreError, StoreResult};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Whole-collection load/save contract.
///
/// The sole persistence boundary: domain services never touch files or
/// encodings directly.
pub trait CollectionStore {
    /// Loads every record of a collection; empty when never written.
    fn load<T: DeserializeOwned>(&self, collection: &str) -> StoreResult<Vec<T>>;

    /// Overwrites the persisted collection with `records`.
    fn save<T: Serialize>(&self, collection: &str, records: &[T]) -> StoreResult<()>;
}

/// File-backed store keeping one `<collection>.json` per collection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{collection}.json"))
    }
}

impl CollectionStore for JsonFileStore {
    fn load<T: DeserializeOwned>(&self, collection: &str) -> StoreResult<Vec<T>> {
        let path = self.collection_path(collection);
        if !path.exists() {
            debug!("event=collection_absent collection={collection}");
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            collection: collection.to_string(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|err| {
            warn!("event=collection_corrupt collection={collection} detail={err}");
            StoreError::Corrupt {
                collection: collection.to_string(),
                detail: err.to_string(),
            }
        })
    }

    fn save<T: Serialize>(&self, collection: &str, records: &[T]) -> StoreResult<()> {
        let body =
            serde_json::to_string_pretty(records).map_err(|err| StoreError::Encode {
                collection: collection.to_string(),
                detail: err.to_string(),
            })?;

        fs::create_dir_all(&self.data_dir).map_err(|source| StoreError::Io {
            collection: collection.to_string(),
            source,
        })?;

        fs::write(self.collection_path(collection), body).map_err(|source| StoreError::Io {
            collection: collection.to_string(),
            source,
        })?;

        debug!(
            "event=collection_saved collection={collection} count={}",
            records.len()
        );
        Ok(())
    }
}
