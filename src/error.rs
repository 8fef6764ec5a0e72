//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

use crate::cache::{MAX_CAPACITY, MIN_CAPACITY};

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// Both variants are raised only at construction time; no operation on a
/// constructed cache can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Requested capacity is below the minimum of 1
    #[error("invalid capacity {0}: must be at least {MIN_CAPACITY}")]
    InvalidCapacity(usize),

    /// Requested capacity reaches or exceeds the maximum
    #[error("capacity {0} too large: must be less than {MAX_CAPACITY}")]
    CapacityTooLarge(usize),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
