//! Configuration Module
//!
//! Handles loading cache and pagination settings from environment variables.

use std::env;

use crate::error::Result;
use crate::pagination::{self, Page};

/// Default cache capacity
pub const DEFAULT_CAPACITY: usize = 1000;

/// Default number of records per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Cache and pagination settings.
///
/// Values are not validated here; the cache constructor and the paginator
/// reject zeros when they are used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Records per page for [`Config::paginate`]
    pub page_size: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `FIFO_CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `FIFO_CACHE_PAGE_SIZE` - Records per page (default: 10)
    pub fn from_env() -> Self {
        Self {
            capacity: env_or("FIFO_CACHE_CAPACITY", DEFAULT_CAPACITY),
            page_size: env_or("FIFO_CACHE_PAGE_SIZE", DEFAULT_PAGE_SIZE),
        }
    }

    /// Paginates `records` using the configured page size.
    pub fn paginate<T>(&self, page_number: usize, records: Vec<T>) -> Result<Option<Page<T>>> {
        pagination::paginate(page_number, self.page_size, records)
    }
}

fn env_or(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
