// SPDX-License-Identifier: MPL-2.0
//! The user's current view intent: search text, category filter, and page.

/// Query triple driving every derived view.
///
/// The page is 1-based and re-clamps to 1 whenever the search text or the
/// category changes, because the filtered result count, and with it page
/// validity, changes too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    search: String,
    category: String,
    page: u32,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            page: 1,
        }
    }
}

impl Query {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Replaces the search text and resets the page to 1.
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    /// Replaces the category filter and resets the page to 1. An empty
    /// string means "no filter".
    pub fn set_category(&mut self, category: String) {
        self.category = category;
        self.page = 1;
    }

    /// Moves to the given page, flooring at 1.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// True iff the previous-page control should be greyed out.
    pub fn disable_previous(&self) -> bool {
        self.page == 1
    }

    /// True iff the next-page control should be greyed out, i.e. the current
    /// page already reaches past the filtered result count.
    pub fn disable_next(&self, total_results: usize, page_size: usize) -> bool {
        self.page as usize * page_size >= total_results
    }
}
