//! Pagination types for listing endpoints.

use serde::{Deserialize, Serialize};

/// Fixed number of records per listing page.
pub const PAGE_SIZE: u64 = 20;

/// A zero-based page index into an offset-paged listing.
///
/// Paging is offset-based (`OFFSET page * 20`) over the store's insertion
/// order; there is no stable cursor. A client paging while new siblings are
/// inserted may observe duplicates or skips across pages. This is a known
/// weak-consistency property of the listing contract, not a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListPage(pub u64);

impl ListPage {
    /// Parse a page index from a raw query parameter.
    ///
    /// Absent or non-numeric values are treated as page 0.
    pub fn from_param(raw: Option<&str>) -> Self {
        Self(
            raw.and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(0),
        )
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        self.0 * PAGE_SIZE
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        PAGE_SIZE
    }
}

impl Default for ListPage {
    fn default() -> Self {
        Self(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_page_times_size() {
        assert_eq!(ListPage(0).offset(), 0);
        assert_eq!(ListPage(1).offset(), 20);
        assert_eq!(ListPage(3).offset(), 60);
    }

    #[test]
    fn test_from_param_numeric() {
        assert_eq!(ListPage::from_param(Some("2")), ListPage(2));
        assert_eq!(ListPage::from_param(Some(" 5 ")), ListPage(5));
    }

    #[test]
    fn test_from_param_non_numeric_defaults_to_zero() {
        assert_eq!(ListPage::from_param(None), ListPage(0));
        assert_eq!(ListPage::from_param(Some("abc")), ListPage(0));
        assert_eq!(ListPage::from_param(Some("-1")), ListPage(0));
        assert_eq!(ListPage::from_param(Some("")), ListPage(0));
    }
}
