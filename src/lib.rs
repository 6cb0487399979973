//! FIFO Cache - A bounded in-memory key-value cache
//!
//! Provides a capacity-limited cache that evicts in insertion order, plus a
//! stateless helper for paging through in-memory record lists.

pub mod cache;
pub mod config;
pub mod error;
pub mod pagination;

pub use cache::{FifoCache, SharedFifoCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use pagination::{paginate, paginate_by, paginate_by_key, total_pages, Page};
