//! Toolbar messages.

/// Events from the toolbar above the grid.
#[derive(Debug, Clone)]
pub enum ToolbarMessage {
    /// Search text edited. Does not refilter.
    SearchInput(String),
    /// Enter pressed in the search box: commit the query
    SearchSubmitted,
    /// Clear button clicked: empty and commit the query
    SearchCleared,
    /// "Delete selected" clicked
    DeleteSelected,
    /// Fetch the member list again
    Reload,
}
