//! Fixed-size page slicing.
//!
//! Clamp policy: a new query resets the cursor to page 1, anything that
//! shrinks the filtered view clamps it down to the last page that exists,
//! and explicit navigation is clamped into `1..=max(1, page_count)`.

use std::num::NonZeroUsize;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// Page sizes offered to the operator.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

/// Number of pages needed for `len` rows. Zero rows need zero pages.
pub fn page_count(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}

/// Current page number (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    current_page: usize,
    page_size: NonZeroUsize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageCursor {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Highest page the cursor may point at for `len` rows.
    pub fn last_page(&self, len: usize) -> usize {
        page_count(len, self.page_size).max(1)
    }

    /// Half-open row range of the current page, before clipping to `len`.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = (self.current_page - 1) * self.page_size.get();
        start..start + self.page_size.get()
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pull the cursor back onto an existing page after the view shrank.
    pub fn clamp(&mut self, len: usize) {
        self.current_page = self.current_page.clamp(1, self.last_page(len));
    }

    pub fn go_to(&mut self, page: usize, len: usize) {
        self.current_page = page.clamp(1, self.last_page(len));
    }

    pub fn first(&mut self) {
        self.reset();
    }

    pub fn last(&mut self, len: usize) {
        self.current_page = self.last_page(len);
    }

    pub fn next(&mut self, len: usize) {
        self.go_to(self.current_page + 1, len);
    }

    pub fn previous(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Change the page size, staying on the page that holds the first row
    /// currently shown.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize, len: usize) {
        let first_row = self.range().start;
        self.page_size = page_size;
        self.go_to(first_row / page_size.get() + 1, len);
    }
}

/// The rows of the cursor's page, clipped to the view.
///
/// A page past the end yields an empty slice rather than failing.
pub fn paginate<'a, T>(view: &'a [T], cursor: &PageCursor) -> &'a [T] {
    let range = cursor.range();
    let start = range.start.min(view.len());
    let end = range.end.min(view.len());
    &view[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn twenty_three_rows_make_three_pages() {
        let rows: Vec<u32> = (0..23).collect();
        let mut cursor = PageCursor::new(size(10));
        assert_eq!(page_count(rows.len(), cursor.page_size()), 3);

        cursor.go_to(3, rows.len());
        assert_eq!(paginate(&rows, &cursor), &[20, 21, 22]);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let rows: Vec<u32> = (0..5).collect();
        let mut cursor = PageCursor::new(size(10));
        cursor.go_to(1, 50);
        cursor.next(50);
        assert_eq!(cursor.current_page(), 2);
        assert!(paginate(&rows, &cursor).is_empty());
    }

    #[test]
    fn clamp_pulls_back_to_last_page() {
        let mut cursor = PageCursor::new(size(10));
        cursor.go_to(3, 23);
        cursor.clamp(11);
        assert_eq!(cursor.current_page(), 2);
        cursor.clamp(0);
        assert_eq!(cursor.current_page(), 1);
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut cursor = PageCursor::new(size(10));
        cursor.previous();
        assert_eq!(cursor.current_page(), 1);
        cursor.go_to(99, 23);
        assert_eq!(cursor.current_page(), 3);
        cursor.next(23);
        assert_eq!(cursor.current_page(), 3);
        cursor.go_to(0, 23);
        assert_eq!(cursor.current_page(), 1);
        cursor.last(23);
        assert_eq!(cursor.current_page(), 3);
        cursor.first();
        assert_eq!(cursor.current_page(), 1);
    }

    #[test]
    fn page_size_change_keeps_first_visible_row() {
        let mut cursor = PageCursor::new(size(10));
        cursor.go_to(3, 46);
        // rows 20..30 are shown; with 5 per page row 20 sits on page 5
        cursor.set_page_size(size(5), 46);
        assert_eq!(cursor.current_page(), 5);
        cursor.set_page_size(size(25), 46);
        assert_eq!(cursor.current_page(), 1);
    }
}
