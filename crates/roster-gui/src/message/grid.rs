//! Grid row messages.

use roster_core::GridAction;
use roster_model::{RecordField, RecordId};

/// Events emitted by the member grid.
#[derive(Debug, Clone)]
pub enum GridMessage {
    /// Edit button clicked
    EditStarted(RecordId),
    /// A cell input of a row in edit mode changed
    DraftChanged {
        id: RecordId,
        field: RecordField,
        value: String,
    },
    /// Save button clicked or Enter pressed in a cell input
    Saved(RecordId),
    /// Cancel button clicked
    Cancelled(RecordId),
    /// Delete button clicked
    Deleted(RecordId),
    /// Row checkbox toggled
    SelectionToggled(RecordId),
    /// Header checkbox toggled
    PageSelectionToggled,
}

impl GridMessage {
    /// The dashboard transition this message requests, if it maps to one
    /// directly.
    pub fn to_action(&self) -> Option<GridAction> {
        let action = match self {
            Self::EditStarted(id) => GridAction::EditStart(*id),
            Self::DraftChanged { id, field, value } => GridAction::DraftChanged {
                id: *id,
                field: *field,
                value: value.clone(),
            },
            Self::Saved(id) => GridAction::SaveEdit(*id),
            Self::Cancelled(id) => GridAction::CancelEdit(*id),
            Self::Deleted(id) => GridAction::DeleteRow(*id),
            Self::SelectionToggled(id) => GridAction::ToggleSelect(*id),
            Self::PageSelectionToggled => return None,
        };
        Some(action)
    }
}
