//! Client-side pagination over an in-memory collection.
//!
//! Pages are 1-indexed. A collection of `n` records split into pages of `size`
//! rows has `ceil(n / size)` pages, so an empty collection has zero pages and
//! the page counter simply stays at 1.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

/// Number of pages needed to show `len` records, `size` at a time.
#[inline]
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}

/// Index range of the records shown on `page`.
///
/// Pages past the end of the collection yield an empty range.
#[inline]
pub fn page_range(page: usize, page_size: NonZeroUsize, len: usize) -> Range<usize> {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    start..end
}

/// Page navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
}

/// Current page and page size of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: NonZeroUsize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Moves to `page`, clamped to `[1, total_pages]`. Returns whether the page changed.
    pub fn set_page(&mut self, page: usize, total_pages: usize) -> bool {
        let target = page.clamp(1, total_pages.max(1));
        let changed = target != self.page;
        self.page = target;
        changed
    }

    /// Replaces the page size and goes back to the first page.
    ///
    /// Returns whether anything changed.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) -> bool {
        let changed = page_size != self.page_size || self.page != 1;
        self.page_size = page_size;
        self.page = 1;
        changed
    }

    /// Applies a navigation button. Buttons at their boundary are no-ops.
    pub fn navigate(&mut self, nav: PageNav, total_pages: usize) -> bool {
        let target = match nav {
            PageNav::First => 1,
            PageNav::Previous => self.page.saturating_sub(1),
            PageNav::Next => self.page.saturating_add(1),
            PageNav::Last => total_pages,
        };
        self.set_page(target, total_pages)
    }

    /// The page to show when the collection has `total_pages` pages.
    ///
    /// Leaves the stored page alone, so it comes back once the collection grows again.
    pub fn clamped_page(&self, total_pages: usize) -> usize {
        self.page.clamp(1, total_pages.max(1))
    }

    /// Pulls the page back inside `[1, total_pages]` after the collection changed size.
    pub fn clamp_to(&mut self, total_pages: usize) -> bool {
        self.set_page(self.page, total_pages)
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }
}
