//! Page Model
//!
//! The page descriptor returned by the pagination helpers.

use serde::{Deserialize, Serialize};

// == Page ==
/// One page of a larger record list plus the totals needed to navigate it.
///
/// Serialized with the keys `list`, `pageNo`, `pageSize`, `totalCount`
/// and `totalPage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page, at most `page_size` of them
    #[serde(rename = "list")]
    pub records: Vec<T>,
    /// 1-based page number that was requested
    #[serde(rename = "pageNo")]
    pub page_number: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
    /// Number of records across all pages
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    #[serde(rename = "totalPage")]
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Returns true if this page holds no records (requested past the last page).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if a later page holds records.
    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// Returns true if this is not the first page.
    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page_number: usize, records: Vec<u32>) -> Page<u32> {
        Page {
            records,
            page_number,
            page_size: 10,
            total_count: 25,
            total_pages: 3,
        }
    }

    #[test]
    fn test_page_navigation() {
        let first = page(1, (0..10).collect());
        assert!(first.has_next());
        assert!(!first.has_previous());

        let last = page(3, (20..25).collect());
        assert!(!last.has_next());
        assert!(last.has_previous());
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let beyond = page(4, Vec::new());
        assert!(beyond.is_empty());
        assert!(!beyond.has_next());
    }

    #[test]
    fn test_page_serialize_keys() {
        let json = serde_json::to_value(page(1, vec![1, 2])).unwrap();

        assert_eq!(json["list"], serde_json::json!([1, 2]));
        assert_eq!(json["pageNo"], 1);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["totalCount"], 25);
        assert_eq!(json["totalPage"], 3);
    }

    #[test]
    fn test_page_deserialize() {
        let json = r#"{"list":["a"],"pageNo":2,"pageSize":1,"totalCount":2,"totalPage":2}"#;
        let page: Page<String> = serde_json::from_str(json).unwrap();

        assert_eq!(page.records, vec!["a".to_string()]);
        assert_eq!(page.page_number, 2);
        assert_eq!(page.total_pages, 2);
    }
}
