//! Cache Module
//!
//! Provides a bounded in-memory cache with first-in-first-out eviction.

mod entry;
mod order;
mod shared;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use shared::SharedFifoCache;
pub use store::{FifoCache, Iter};
