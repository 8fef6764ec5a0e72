//! Cache Record Module
//!
//! Defines the key/value pair handed back to callers from set and get.

// == Record ==
/// An immutable snapshot of a single cache entry.
///
/// A `Record` is a value type, not a live view: mutating the cache after
/// obtaining one has no effect on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<K, V> {
    /// The key the entry is stored under
    pub key: K,
    /// The stored value
    pub value: V,
}

impl<K, V> Record<K, V> {
    // == Constructor ==
    /// Creates a new record from a key and value.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}
