//! Pagination primitives.
//!
//! Every list endpoint takes a 1-based `PageIndex` and a `PageSize`, with
//! optional ad-hoc filter parameters (`SearchQuery`, `RefId`, `ReceiptNo`,
//! `Status`, …) appended after them.

use serde::{Deserialize, Serialize};

/// A page request against a list endpoint.
///
/// `page_index` is 1-based: the first page is `PageQuery::first(size)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based page index.
    pub page_index: u32,

    /// Number of records per page.
    pub page_size: u32,

    /// Extra filter parameters, appended in insertion order.
    pub filters: Vec<(String, String)>,
}

impl PageQuery {
    /// Creates a page request for the given index and size.
    pub fn new(page_index: u32, page_size: u32) -> Self {
        Self {
            page_index,
            page_size,
            filters: Vec::new(),
        }
    }

    /// Creates a request for the first page.
    pub fn first(page_size: u32) -> Self {
        Self::new(1, page_size)
    }

    /// Appends a filter parameter such as `SearchQuery` or `Status`.
    pub fn with_filter<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Renders the request as query-string pairs.
    ///
    /// `PageIndex` and `PageSize` come first, then the filters in the
    /// order they were added.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("PageIndex".to_string(), self.page_index.to_string()),
            ("PageSize".to_string(), self.page_size.to_string()),
        ];
        pairs.extend(self.filters.iter().cloned());
        pairs
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::first(25)
    }
}

/// A page of records returned by a list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records on this page, in server order.
    #[serde(alias = "data")]
    pub items: Vec<T>,

    /// Total records across all pages, when the server reports it.
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl<T> Page<T> {
    /// Returns `true` if this page carries no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
