//! Cache Store Module
//!
//! Main cache engine: a HashMap guarded by a single exclusive lock.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use crate::cache::{Record, MAX_CAPACITY, MIN_CAPACITY};
use crate::error::{CacheError, Result};

// == Any Cache ==
/// A thread-safe generic key/value cache.
///
/// Every operation takes the one exclusive lock for its whole duration, so
/// operations are atomic with respect to each other. Methods take `&self`;
/// share the cache across threads with `Arc<AnyCache<K, V>>`.
///
/// The capacity passed to [`AnyCache::new`] is validated once and then used
/// only as an allocation hint. The cache may grow beyond it.
#[derive(Debug)]
pub struct AnyCache<K, V> {
    /// Key-value storage, guarded by the lock for every access
    entries: Mutex<HashMap<K, V>>,
}

impl<K, V> AnyCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new AnyCache with the given capacity hint.
    ///
    /// The hint pre-sizes the internal map and bounds nothing afterwards.
    ///
    /// # Arguments
    /// * `capacity` - Initial sizing hint; must satisfy
    ///   `MIN_CAPACITY <= capacity < MAX_CAPACITY`
    ///
    /// # Errors
    /// * [`CacheError::CapacityTooLarge`] if `capacity >= MAX_CAPACITY`
    /// * [`CacheError::InvalidCapacity`] if `capacity < MIN_CAPACITY`
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity >= MAX_CAPACITY {
            return Err(CacheError::CapacityTooLarge(capacity));
        }
        if capacity < MIN_CAPACITY {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        debug!(capacity, "cache created");

        Ok(Self {
            entries: Mutex::new(HashMap::with_capacity(capacity)),
        })
    }

    // == Set ==
    /// Stores a key-value pair, inserting or replacing.
    ///
    /// Returns the stored [`Record`] and whether a previous entry for the
    /// key was overwritten. Never fails and never evicts.
    pub fn set(&self, key: K, value: V) -> (Record<K, V>, bool) {
        let mut entries = self.lock_entries();
        let overwritten = entries.insert(key.clone(), value.clone()).is_some();
        drop(entries);

        trace!(overwritten, "set");

        (Record::new(key, value), overwritten)
    }

    // == Get ==
    /// Retrieves a record by key.
    ///
    /// Returns `Some` with a snapshot of the entry on a hit, `None` on a
    /// miss. The returned record is a copy, never a reference into the map.
    pub fn get(&self, key: &K) -> Option<Record<K, V>> {
        let entries = self.lock_entries();
        let record = entries
            .get(key)
            .map(|value| Record::new(key.clone(), value.clone()));
        drop(entries);

        trace!(hit = record.is_some(), "get");

        record
    }

    // == Keys ==
    /// Returns a snapshot of all stored keys, in unspecified order.
    ///
    /// The snapshot is copied out under the lock; later mutation of the
    /// cache does not affect it.
    pub fn keys(&self) -> Vec<K> {
        let entries = self.lock_entries();
        entries.keys().cloned().collect()
    }

    // == Flush ==
    /// Removes all entries, leaving the cache empty.
    pub fn flush(&self) {
        let mut entries = self.lock_entries();
        entries.clear();
        drop(entries);

        debug!("cache flushed");
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    // == Lock ==
    /// Acquires the entry map lock.
    ///
    /// The guard is only ever held across plain map operations, so a
    /// poisoned lock cannot leave the map half-mutated; recover the guard
    /// instead of propagating the poison to callers.
    fn lock_entries(&self) -> MutexGuard<'_, HashMap<K, V>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
