//! Pagination envelope shared by every list endpoint
//!
//! Requests wrap a resource-specific filter in [`PageQuery`]; responses come
//! back as [`PageResult`]. Page arithmetic belongs to the backend: the client
//! forwards `pages` exactly as received.

use serde::{Deserialize, Serialize};

/// Default page size for list queries
const DEFAULT_SIZE: u64 = 10;

/// Page coordinates of a list query (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub current: u64,
    pub size: u64,
}

impl Page {
    /// Create page coordinates, raising both values to at least 1
    pub fn new(current: u64, size: u64) -> Self {
        Self {
            current: current.max(1),
            size: size.max(1),
        }
    }

    /// First page with the given size
    pub fn first(size: u64) -> Self {
        Self::new(1, size)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first(DEFAULT_SIZE)
    }
}

/// A page request carrying a resource-specific filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery<T> {
    pub page: Page,
    pub query_body: T,
}

impl<T> PageQuery<T> {
    pub fn new(page: Page, query_body: T) -> Self {
        Self { page, query_body }
    }
}

impl<T: Default> PageQuery<T> {
    /// Unfiltered query for the given page
    pub fn unfiltered(page: Page) -> Self {
        Self::new(page, T::default())
    }
}

impl<T: Default> Default for PageQuery<T> {
    fn default() -> Self {
        Self::unfiltered(Page::default())
    }
}

/// One page of records as returned by the backend
///
/// Some endpoints only send `records` and `total`; the remaining counters
/// then decode as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub records: Vec<T>,
    pub total: u64,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub current: u64,
    #[serde(default)]
    pub pages: u64,
}

impl<T> PageResult<T> {
    /// Page count implied by `total` and `size`, if `size` is non-zero
    pub fn expected_pages(&self) -> Option<u64> {
        (self.size > 0).then(|| self.total.div_ceil(self.size))
    }

    /// Whether the backend's counters agree with each other
    pub fn is_consistent(&self) -> bool {
        match self.expected_pages() {
            Some(expected) => self.pages == expected && self.records.len() as u64 <= self.size,
            None => true,
        }
    }

    /// Whether a page after this one exists
    pub fn has_next(&self) -> bool {
        self.current < self.pages
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
