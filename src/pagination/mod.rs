//! Pagination Module
//!
//! Slices materialized record lists (cache contents or any other in-memory
//! list) into 1-based pages.

mod page;
mod paginator;

pub use page::Page;
pub use paginator::{paginate, paginate_by, paginate_by_key, total_pages};
