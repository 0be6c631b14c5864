//! Pagination bar messages.

/// Events from the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMessage {
    First,
    Previous,
    Next,
    Last,
    /// Jump to a 1-based page
    GoTo(usize),
    /// Rows per page selected
    PageSizeChanged(usize),
}
