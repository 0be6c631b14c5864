//! Row-level and toolbar events the grid emits.

use roster_model::{RecordField, RecordId};

/// An event from the grid, search input or bulk-delete control.
///
/// Feed it to [`Dashboard::apply`](crate::Dashboard::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction {
    EditStart(RecordId),
    /// A field of a row in edit mode changed.
    DraftChanged {
        id: RecordId,
        field: RecordField,
        value: String,
    },
    SaveEdit(RecordId),
    CancelEdit(RecordId),
    DeleteRow(RecordId),
    ToggleSelect(RecordId),
    SelectAll(Vec<RecordId>),
    /// The search input was committed (Enter), not merely edited.
    QueryChanged(String),
    DeleteSelectedRequested,
    /// Jump to a 1-based page.
    PageChanged(usize),
}
