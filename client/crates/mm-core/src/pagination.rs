use serde::{Deserialize, Serialize};

/// Number of pages needed for `total_entries` at `limit` per page
pub fn total_pages(total_entries: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    let pages = total_entries.div_ceil(u64::from(limit));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// 1-based page cursor for the history list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit,
        }
    }

    /// Whether `page` is a page the user may navigate to
    pub fn is_navigable(page: u32, total_pages: u32) -> bool {
        page >= 1 && page <= total_pages
    }

    /// Page to show after deleting one entry from a page that held `entries_on_page`.
    ///
    /// Removing the last entry of a page other than the first moves back one page.
    pub fn page_after_delete(&self, entries_on_page: usize) -> u32 {
        if entries_on_page == 1 && self.page > 1 {
            self.page - 1
        } else {
            self.page
        }
    }
}
