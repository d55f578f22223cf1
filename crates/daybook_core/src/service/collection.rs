//! Generic collection CRUD service.
//!
//! # Responsibility
//! - Provide create/read/update/complete/reopen/delete for any domain
//!   collection, routed through the shared store and sorter.
//!
//! # Invariants
//! - Every mutation reloads the persisted collection first, so manual
//!   external edits between menu actions are not clobbered.
//! - Ordering for display always comes from `sort::order`; insertion order
//!   is kept on disk but never relied upon.

use crate::model::domains::DomainRecord;
use crate::model::record::RecordId;
use crate::service::{ServiceError, ServiceResult};
use crate::sort::order;
use crate::store::CollectionStore;
use chrono::NaiveDateTime;
use log::info;
use std::marker::PhantomData;

/// Handle to one domain collection, scoped to a store borrowed for the
/// session. No process-wide singleton; callers create these per use.
pub struct Collection<'a, T: DomainRecord, S: CollectionStore> {
    store: &'a S,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: DomainRecord, S: CollectionStore> Collection<'a, T, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Appends a record and persists the collection.
    pub fn add(&self, item: T) -> ServiceResult<RecordId> {
        let id = item.record().id;
        let mut items = self.store.load::<T>(T::COLLECTION)?;
        items.push(item);
        self.store.save(T::COLLECTION, &items)?;
        info!("event=record_added collection={} id={id}", T::COLLECTION);
        Ok(id)
    }

    /// All records in persisted (insertion) order.
    pub fn list(&self) -> ServiceResult<Vec<T>> {
        Ok(self.store.load(T::COLLECTION)?)
    }

    /// All records in display order for the given clock.
    pub fn ordered(&self, now: NaiveDateTime) -> ServiceResult<Vec<T>> {
        Ok(order(self.list()?, now))
    }

    /// One record by id, if present.
    pub fn get(&self, id: RecordId) -> ServiceResult<Option<T>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|item| item.record().id == id))
    }

    /// Replaces the stored record with the same id.
    pub fn update(&self, item: &T) -> ServiceResult<()> {
        let id = item.record().id;
        self.edit(id, |stored| *stored = item.clone())?;
        info!("event=record_updated collection={} id={id}", T::COLLECTION);
        Ok(())
    }

    /// Marks a record completed.
    pub fn complete(&self, id: RecordId) -> ServiceResult<()> {
        self.edit(id, |item| item.record_mut().complete())?;
        info!("event=record_completed collection={} id={id}", T::COLLECTION);
        Ok(())
    }

    /// Returns a completed record to pending.
    pub fn reopen(&self, id: RecordId) -> ServiceResult<()> {
        self.edit(id, |item| item.record_mut().reopen())?;
        info!("event=record_reopened collection={} id={id}", T::COLLECTION);
        Ok(())
    }

    /// Removes a record, returning it for caller-side reporting.
    pub fn delete(&self, id: RecordId) -> ServiceResult<T> {
        let mut items = self.store.load::<T>(T::COLLECTION)?;
        let position = items
            .iter()
            .position(|item| item.record().id == id)
            .ok_or(ServiceError::NotFound(id))?;
        let removed = items.remove(position);
        self.store.save(T::COLLECTION, &items)?;
        info!("event=record_deleted collection={} id={id}", T::COLLECTION);
        Ok(removed)
    }

    /// Removes every record in the collection.
    pub fn clear(&self) -> ServiceResult<()> {
        self.store.save::<T>(T::COLLECTION, &[])?;
        info!("event=collection_cleared collection={}", T::COLLECTION);
        Ok(())
    }

    fn edit(&self, id: RecordId, mutate: impl FnOnce(&mut T)) -> ServiceResult<()> {
        let mut items = self.store.load::<T>(T::COLLECTION)?;
        let item = items
            .iter_mut()
            .find(|item| item.record().id == id)
            .ok_or(ServiceError::NotFound(id))?;
        mutate(item);
        self.store.save(T::COLLECTION, &items)?;
        Ok(())
    }
}
