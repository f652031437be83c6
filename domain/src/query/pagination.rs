//! Fixed-size paging over ordered result sets
//!
//! Pages are 1-indexed. The engine never sorts: callers hand in results
//! in storage order and receive a contiguous slice of them.

use serde::{Deserialize, Serialize};

/// Number of questions per page
pub const PAGE_SIZE: usize = 10;

/// A requested page number (Value Object)
///
/// Holds whatever number the caller asked for; pages below 1 are kept
/// so that they can resolve to an empty page rather than silently
/// becoming page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page(i64);

impl Page {
    pub fn new(number: i64) -> Self {
        Self(number)
    }

    /// Parse a raw query-string value, defaulting to page 1 when the
    /// value is absent or not an integer
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .map(Self)
            .unwrap_or_default()
    }

    pub fn number(self) -> i64 {
        self.0
    }

    /// Index of the first item on this page, or `None` when the page
    /// cannot hold any item
    pub fn offset(self, page_size: usize) -> Option<usize> {
        if self.0 < 1 {
            return None;
        }
        usize::try_from(self.0 - 1).ok()?.checked_mul(page_size)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

/// Slice `items` to the requested page
///
/// Returns `[start, start + page_size)` clipped to the bounds of `items`;
/// a page starting past the end yields an empty vector.
pub fn paginate<T: Clone>(items: &[T], page: Page, page_size: usize) -> Vec<T> {
    let Some(start) = page.offset(page_size) else {
        return Vec::new();
    };
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(items.len());
    items[start..end].to_vec()
}

/// Number of pages needed to show `total` items
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}
