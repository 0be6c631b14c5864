//! Grid row handler.

use iced::Task;

use super::MessageHandler;
use crate::component::toast::ToastState;
use crate::message::{GridMessage, Message};
use crate::state::AppState;

/// Handles row edit, delete and selection events.
pub struct GridHandler;

impl MessageHandler<GridMessage> for GridHandler {
    fn handle(&self, state: &mut AppState, msg: GridMessage) -> Task<Message> {
        let Some(action) = msg.to_action() else {
            // Header checkbox
            state.dashboard.toggle_page_selection();
            return Task::none();
        };

        if let Err(e) = state.dashboard.apply(action) {
            state.toast = Some(ToastState::warning(e.user_message()));
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use roster_core::RowMode;
    use roster_model::{RecordField, RecordId};

    use super::*;
    use crate::handler::test_support::loaded_state;

    #[test]
    fn test_edit_save_updates_record() {
        let mut state = loaded_state(3);
        let id = RecordId::new(2);

        let _ = GridHandler.handle(&mut state, GridMessage::EditStarted(id));
        assert_eq!(state.dashboard.row_mode(id), RowMode::Edit);

        let _ = GridHandler.handle(
            &mut state,
            GridMessage::DraftChanged {
                id,
                field: RecordField::Name,
                value: "Grace".to_string(),
            },
        );
        let _ = GridHandler.handle(&mut state, GridMessage::Saved(id));

        assert_eq!(state.dashboard.row_mode(id), RowMode::View);
        assert_eq!(state.dashboard.store().get(id).unwrap().name, "Grace");
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut state = loaded_state(3);
        let id = RecordId::new(1);

        let _ = GridHandler.handle(&mut state, GridMessage::EditStarted(id));
        let _ = GridHandler.handle(
            &mut state,
            GridMessage::DraftChanged {
                id,
                field: RecordField::Email,
                value: "changed@example.com".to_string(),
            },
        );
        let _ = GridHandler.handle(&mut state, GridMessage::Cancelled(id));

        assert_eq!(
            state.dashboard.store().get(id).unwrap().email,
            "user1@example.com"
        );
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_header_checkbox_toggles_page() {
        let mut state = loaded_state(12);

        let _ = GridHandler.handle(&mut state, GridMessage::PageSelectionToggled);
        assert_eq!(state.dashboard.selection().len(), 10);
        assert!(state.dashboard.page_fully_selected());

        let _ = GridHandler.handle(&mut state, GridMessage::PageSelectionToggled);
        assert!(state.dashboard.selection().is_empty());
    }

    #[test]
    fn test_delete_row_drops_selection() {
        let mut state = loaded_state(3);
        let id = RecordId::new(3);

        let _ = GridHandler.handle(&mut state, GridMessage::SelectionToggled(id));
        let _ = GridHandler.handle(&mut state, GridMessage::Deleted(id));

        assert!(!state.dashboard.store().contains(id));
        assert!(state.dashboard.selection().is_empty());
    }
}
