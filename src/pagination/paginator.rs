//! Paginator
//!
//! Stateless helpers that slice an in-memory record list into pages.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{CacheError, Result};
use crate::pagination::Page;

// == Total Pages ==
/// Number of pages needed to show `total_count` records, `page_size` per page.
///
/// # Errors
/// Returns [`CacheError::InvalidPageArguments`] if `page_size` is zero.
pub fn total_pages(page_size: usize, total_count: usize) -> Result<usize> {
    if page_size == 0 {
        return Err(CacheError::InvalidPageArguments {
            page_number: 1,
            page_size,
        });
    }
    Ok(total_count / page_size + usize::from(total_count % page_size > 0))
}

// == Paginate ==
/// Returns page `page_number` (1-based) of `records`, in their given order.
///
/// `Ok(None)` means `records` was empty. A page number past the last page
/// yields a page with no records but with the totals filled in.
///
/// # Errors
/// Returns [`CacheError::InvalidPageArguments`] if either argument is zero.
///
/// # Example
/// ```
/// use fifo_cache::pagination::paginate;
///
/// let page = paginate(2, 10, (1..=25).collect::<Vec<u32>>()).unwrap().unwrap();
/// assert_eq!(page.records, (11..=20).collect::<Vec<_>>());
/// assert_eq!(page.total_pages, 3);
/// ```
pub fn paginate<T>(page_number: usize, page_size: usize, records: Vec<T>) -> Result<Option<Page<T>>> {
    validate(page_number, page_size)?;
    if records.is_empty() {
        return Ok(None);
    }
    slice_page(page_number, page_size, records).map(Some)
}

/// Like [`paginate`], but first stable-sorts `records` with `compare`.
pub fn paginate_by<T, F>(
    page_number: usize,
    page_size: usize,
    mut records: Vec<T>,
    compare: F,
) -> Result<Option<Page<T>>>
where
    F: FnMut(&T, &T) -> Ordering,
{
    validate(page_number, page_size)?;
    records.sort_by(compare);
    paginate(page_number, page_size, records)
}

/// Like [`paginate`], but first stable-sorts `records` by the key `f` extracts.
pub fn paginate_by_key<T, K, F>(
    page_number: usize,
    page_size: usize,
    mut records: Vec<T>,
    f: F,
) -> Result<Option<Page<T>>>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    validate(page_number, page_size)?;
    records.sort_by_key(f);
    paginate(page_number, page_size, records)
}

fn validate(page_number: usize, page_size: usize) -> Result<()> {
    if page_number == 0 || page_size == 0 {
        return Err(CacheError::InvalidPageArguments {
            page_number,
            page_size,
        });
    }
    Ok(())
}

fn slice_page<T>(page_number: usize, page_size: usize, records: Vec<T>) -> Result<Page<T>> {
    let total_count = records.len();
    let total_pages = total_pages(page_size, total_count)?;
    let start = (page_number - 1).saturating_mul(page_size);

    if start >= total_count {
        debug!(
            "Page {} requested past last page {} (total_count={})",
            page_number, total_pages, total_count
        );
    }

    let records: Vec<T> = records.into_iter().skip(start).take(page_size).collect();

    Ok(Page {
        records,
        page_number,
        page_size,
        total_count,
        total_pages,
    })
}
