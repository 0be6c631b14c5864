//! Toolbar handler: search, bulk delete and reload.

use iced::Task;

use super::MessageHandler;
use crate::component::toast::ToastState;
use crate::message::{Message, ToolbarMessage};
use crate::service::fetch::load_records;
use crate::state::AppState;

/// Handles toolbar events.
pub struct ToolbarHandler;

impl MessageHandler<ToolbarMessage> for ToolbarHandler {
    fn handle(&self, state: &mut AppState, msg: ToolbarMessage) -> Task<Message> {
        match msg {
            ToolbarMessage::SearchInput(text) => {
                state.search_input = text;
                Task::none()
            }

            ToolbarMessage::SearchSubmitted => {
                state.dashboard.set_query(&state.search_input);
                Task::none()
            }

            ToolbarMessage::SearchCleared => {
                state.search_input.clear();
                state.dashboard.set_query("");
                Task::none()
            }

            ToolbarMessage::DeleteSelected => {
                state.toast = Some(match state.dashboard.delete_selected() {
                    Ok(1) => ToastState::info("Deleted 1 member"),
                    Ok(removed) => ToastState::info(format!("Deleted {removed} members")),
                    Err(e) => ToastState::warning(e.user_message()),
                });
                Task::none()
            }

            ToolbarMessage::Reload => load_records(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use roster_model::RecordId;

    use super::*;
    use crate::component::toast::ToastKind;
    use crate::handler::test_support::loaded_state;

    #[test]
    fn test_typing_does_not_refilter_until_submit() {
        let mut state = loaded_state(6);

        let _ = ToolbarHandler.handle(
            &mut state,
            ToolbarMessage::SearchInput("admin".to_string()),
        );
        assert_eq!(state.dashboard.filtered_len(), 6);

        let _ = ToolbarHandler.handle(&mut state, ToolbarMessage::SearchSubmitted);
        assert_eq!(state.dashboard.filtered_len(), 3);
        assert_eq!(state.dashboard.query().as_str(), "admin");
    }

    #[test]
    fn test_clear_commits_empty_query() {
        let mut state = loaded_state(6);
        let _ = ToolbarHandler.handle(
            &mut state,
            ToolbarMessage::SearchInput("user 2".to_string()),
        );
        let _ = ToolbarHandler.handle(&mut state, ToolbarMessage::SearchSubmitted);
        assert_eq!(state.dashboard.filtered_len(), 1);

        let _ = ToolbarHandler.handle(&mut state, ToolbarMessage::SearchCleared);
        assert!(state.search_input.is_empty());
        assert_eq!(state.dashboard.filtered_len(), 6);
    }

    #[test]
    fn test_delete_selected_without_selection_warns() {
        let mut state = loaded_state(3);

        let _ = ToolbarHandler.handle(&mut state, ToolbarMessage::DeleteSelected);

        assert_eq!(state.dashboard.store().len(), 3);
        let toast = state.toast.expect("warning toast");
        assert_eq!(toast.kind, ToastKind::Warning);
        assert_eq!(toast.message, "Select at least one row to delete.");
    }

    #[test]
    fn test_delete_selected_removes_rows() {
        let mut state = loaded_state(4);
        state.dashboard.toggle_select(RecordId::new(1));
        state.dashboard.toggle_select(RecordId::new(4));

        let _ = ToolbarHandler.handle(&mut state, ToolbarMessage::DeleteSelected);

        assert_eq!(state.dashboard.store().len(), 2);
        assert!(state.dashboard.selection().is_empty());
        let toast = state.toast.expect("info toast");
        assert_eq!(toast.kind, ToastKind::Info);
        assert_eq!(toast.message, "Deleted 2 members");
    }

    #[test]
    fn test_reload_marks_loading() {
        let mut state = loaded_state(2);
        let _ = ToolbarHandler.handle(&mut state, ToolbarMessage::Reload);
        assert!(state.is_loading());
        assert_eq!(state.load_generation, 1);
    }
}
