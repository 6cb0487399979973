//! Error types for the cache and pagination helpers
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the crate.
///
/// Every variant is an argument-validation failure detected up front; no
/// operation fails halfway through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Cache capacity must be at least one entry
    #[error("Invalid capacity: {0} (must be greater than zero)")]
    InvalidCapacity(usize),

    /// Page number and page size must both be at least one
    #[error("Invalid page arguments: page_number={page_number}, page_size={page_size}")]
    InvalidPageArguments {
        page_number: usize,
        page_size: usize,
    },
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, CacheError>;
