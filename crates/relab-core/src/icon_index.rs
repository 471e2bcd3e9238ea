//! Icon Registry: search and paging over the static emoji catalog.

use serde::Serialize;

use crate::icon_catalog::ICON_CATALOG;

/// Gallery page size.
pub const DEFAULT_PAGE_SIZE: usize = 60;

/// One catalog entry. Immutable; lives for the whole program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconEntry {
    pub key: &'static str,
    pub emoji: &'static str,
}

/// Ordered catalog with case-insensitive key search.
#[derive(Debug, Clone)]
pub struct IconIndex {
    entries: Vec<IconEntry>,
}

impl Default for IconIndex {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IconIndex {
    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        Self::from_pairs(ICON_CATALOG)
    }

    pub fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|&(key, emoji)| IconEntry { key, emoji })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose key contains `query`, ignoring case, in catalog order.
    /// An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&IconEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.key.to_lowercase().contains(&needle))
            .collect()
    }

    /// Filter then cut one page. Pages are not clamped: past the end is an empty page.
    pub fn page(&self, query: &str, page: usize, page_size: usize) -> IconPage {
        let matches = self.filter(query);
        let items = paginate(&matches, page, page_size)
            .iter()
            .map(|e| **e)
            .collect();
        IconPage {
            query: query.to_string(),
            page,
            total_pages: page_count(matches.len(), page_size),
            total_matches: matches.len(),
            items,
        }
    }
}

/// Slice `[(page-1)*page_size, page*page_size)` clipped to `items`. `page` is 1-based;
/// page 0, a zero page size, or a page past the end gives an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(len / page_size)`; zero items means zero pages.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// One rendered gallery page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconPage {
    pub query: String,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub items: Vec<IconEntry>,
}

/// Search box + pager state of the gallery.
#[derive(Debug, Clone)]
pub struct IconBrowser {
    query: String,
    page: usize,
    page_size: usize,
}

impl Default for IconBrowser {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl IconBrowser {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            page: 1,
            page_size,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// New search text always jumps back to page 1.
    pub fn set_search(&mut self, query: &str) {
        self.query = query.to_string();
        self.page = 1;
    }

    pub fn next_page(&mut self, index: &IconIndex) {
        let last = self.last_page(index);
        self.page = (self.page + 1).min(last);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Jump to `page`, clamped to the available pages.
    pub fn go_to(&mut self, index: &IconIndex, page: usize) {
        self.page = page.clamp(1, self.last_page(index));
    }

    pub fn view(&self, index: &IconIndex) -> IconPage {
        index.page(&self.query, self.page, self.page_size)
    }

    fn last_page(&self, index: &IconIndex) -> usize {
        page_count(index.filter(&self.query).len(), self.page_size).max(1)
    }
}
