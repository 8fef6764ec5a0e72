//! Cache Module
//!
//! Provides a generic, thread-safe in-memory key/value store.

mod record;
mod store;


// Re-export public types
pub use record::Record;
pub use store::AnyCache;

// == Public Constants ==
/// Minimum allowed cache capacity (inclusive)
pub const MIN_CAPACITY: usize = 1;

/// Maximum allowed cache capacity (exclusive)
pub const MAX_CAPACITY: usize = 5 * 100 * 1024 * 1024; // 524,288,000
