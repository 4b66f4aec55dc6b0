//! Generic in-memory collection
//!
//! Each collection owns its records behind a `parking_lot::RwLock` and
//! allocates ids from a monotonic counter seeded past the highest seed
//! id. Every mutation runs its whole read-check-write sequence under
//! one write lock, so operations are atomic per collection even under
//! the multithreaded runtime.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

/// Record stored in a [`Collection`]
pub trait Record: Clone {
    fn id(&self) -> u64;
}

/// Process-wide mutable collection of records
///
/// The capability surface is deliberately the persistence-interface
/// minimum (snapshot, get, insert, update, remove) so a real storage
/// backend could be substituted without touching the engines.
pub struct Collection<T: Record> {
    records: RwLock<Vec<T>>,
    next_id: AtomicU64,
}

impl<T: Record> Collection<T> {
    /// Create a collection from seed records
    ///
    /// The id allocator starts at `max(seed ids) + 1` (1 for an empty
    /// seed), so ids stay unique across deletes and never repeat.
    pub fn seeded(records: Vec<T>) -> Self {
        let max_id = records.iter().map(|r| r.id()).max().unwrap_or(0);
        Self {
            records: RwLock::new(records),
            next_id: AtomicU64::new(max_id + 1),
        }
    }

    /// Cloned snapshot of every record, in collection order
    pub fn snapshot(&self) -> Vec<T> {
        self.records.read().clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Fetch one record by id
    pub fn get(&self, id: u64) -> Option<T> {
        self.records.read().iter().find(|r| r.id() == id).cloned()
    }

    /// Insert a record built from a freshly allocated id, appended at the back
    pub fn insert_with(&self, build: impl FnOnce(u64) -> T) -> T {
        let mut records = self.records.write();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = build(id);
        records.push(record.clone());
        record
    }

    /// Insert at the front instead (activity logs are newest-first)
    pub fn insert_front_with(&self, build: impl FnOnce(u64) -> T) -> T {
        let mut records = self.records.write();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = build(id);
        records.insert(0, record.clone());
        record
    }

    /// Apply a mutation to the record with the given id
    ///
    /// Returns the updated copy, or `None` if the id is absent.
    pub fn update(&self, id: u64, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut records = self.records.write();
        let record = records.iter_mut().find(|r| r.id() == id)?;
        apply(record);
        Some(record.clone())
    }

    /// Conditional mutation
    ///
    /// `apply` may refuse with an error, in which case nothing changes.
    /// The check and the write happen under the same lock.
    pub fn try_update<E>(
        &self,
        id: u64,
        apply: impl FnOnce(&mut T) -> Result<(), E>,
    ) -> Option<Result<T, E>> {
        let mut records = self.records.write();
        let record = records.iter_mut().find(|r| r.id() == id)?;
        Some(apply(record).map(|()| record.clone()))
    }

    /// Remove by id, returning the removed record
    pub fn remove(&self, id: u64) -> Option<T> {
        let mut records = self.records.write();
        let index = records.iter().position(|r| r.id() == id)?;
        Some(records.remove(index))
    }

    /// Remove by id unless the guard rejects the record
    ///
    /// The guard runs under the write lock, so a rejected delete leaves
    /// the collection untouched with no window for interleaving.
    pub fn remove_if<E>(
        &self,
        id: u64,
        guard: impl FnOnce(&T) -> Result<(), E>,
    ) -> Option<Result<T, E>> {
        let mut records = self.records.write();
        let index = records.iter().position(|r| r.id() == id)?;
        match guard(&records[index]) {
            Ok(()) => Some(Ok(records.remove(index))),
            Err(e) => Some(Err(e)),
        }
    }
}
