//! Pagination window over the filtered/sorted list.
//!
//! # Design
//! The window tracks how many results are materialized for display. The view
//! layer owns visibility detection (intersection callbacks and the like) and
//! calls [`PageWindow::advance`] when the user nears the bottom; the window
//! itself is only the pure state transition. Two states: not all items shown
//! yet, and exhausted. `advance` is a no-op once exhausted, and any change to
//! the underlying filtered list must be followed by [`PageWindow::reset`].

/// How many countries each load-more step materializes.
pub const ITEMS_PER_LOAD: usize = 20;

/// Tracks the visible prefix of the filtered/sorted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    page_size: usize,
    visible: usize,
}

impl PageWindow {
    /// A window showing the first page. `page_size` must be nonzero.
    pub fn new(page_size: usize) -> Self {
        debug_assert!(page_size > 0, "page size must be nonzero");
        Self {
            page_size,
            visible: page_size,
        }
    }

    /// Return to the first page. Called whenever search, region, or sort
    /// changes the underlying list.
    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }

    /// Grow the window by one page, clamped to `total`. Returns whether the
    /// window actually grew; once everything is visible this is a no-op.
    pub fn advance(&mut self, total: usize) -> bool {
        if self.is_exhausted(total) {
            return false;
        }
        self.visible = (self.visible + self.page_size).min(total);
        true
    }

    /// Number of items currently shown, never more than `total`.
    pub fn visible_count(&self, total: usize) -> usize {
        self.visible.min(total)
    }

    /// Whether every item of a `total`-length list is already visible.
    pub fn is_exhausted(&self, total: usize) -> bool {
        self.visible >= total
    }

    /// The visible prefix of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_count(items.len())]
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(ITEMS_PER_LOAD)
    }
}
