//! AnyCache - A thread-safe generic in-memory key/value cache
//!
//! Provides a mutex-guarded map with set, get, keys, flush, and len
//! operations, safe to share across threads via `Arc`.

pub mod cache;
pub mod error;

pub use cache::{AnyCache, Record, MAX_CAPACITY, MIN_CAPACITY};
pub use error::{CacheError, Result};
