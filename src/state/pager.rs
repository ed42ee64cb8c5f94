//! Fixed-size pagination over an ordered sequence.
//!
//! Pages are contiguous, non-overlapping slices in source order; every page
//! holds `page_size` items except possibly the last. An empty source has zero
//! pages and a current page of length 0.

/// Split `items` into consecutive pages of `page_size` items.
///
/// A page size of 0 is treated as 1.
pub fn paginate<T>(items: &[T], page_size: usize) -> Vec<&[T]> {
    items.chunks(page_size.max(1)).collect()
}

/// Pagination state over an owned sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager<T> {
    items: Vec<T>,
    page_size: usize,
    page_index: usize,
}

impl<T> Pager<T> {
    /// Create a pager positioned on the first page.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            page_index: 0,
        }
    }

    /// Items per full page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based index of the current page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// All items of the source, across pages.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of pages; zero for an empty sequence.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Whether a page follows the current one.
    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    /// Whether a page precedes the current one.
    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    /// Advance one page. Returns `false` (and stays put) on the last page.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page_index += 1;
        true
    }

    /// Go back one page. Returns `false` (and stays put) on the first page.
    pub fn prev(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page_index -= 1;
        true
    }

    /// Items of the current page; empty when the source is empty.
    pub fn current_page(&self) -> &[T] {
        let start = (self.page_index * self.page_size).min(self.items.len());
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Items on the current page; zero when there are no pages.
    pub fn current_page_len(&self) -> usize {
        self.current_page().len()
    }
}
