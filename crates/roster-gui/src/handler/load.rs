//! Fetch result handling.

use iced::Task;
use roster_fetch::FetchError;
use roster_model::Record;

use crate::component::toast::ToastState;
use crate::message::Message;
use crate::state::{AppState, LoadState};

/// Install a finished fetch, unless a newer request superseded it.
pub fn handle_records_loaded(
    state: &mut AppState,
    generation: u64,
    result: Result<Vec<Record>, FetchError>,
) -> Task<Message> {
    if generation != state.load_generation {
        tracing::debug!(
            generation,
            current = state.load_generation,
            "Ignoring superseded fetch result"
        );
        return Task::none();
    }
    state.fetch_handle = None;

    let failure = result.as_ref().err().map(|e| e.user_message().to_string());
    let is_reload = generation > 1;

    match state.dashboard.apply_fetch(result) {
        Ok(count) => {
            state.load = LoadState::Ready;
            if is_reload {
                state.toast = Some(ToastState::success(format!("Loaded {count} members")));
            }
        }
        Err(e) => {
            let message = failure.unwrap_or_else(|| e.user_message().to_string());
            state.load = LoadState::Failed(message.clone());
            state.toast = Some(ToastState::error(message));
        }
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use roster_model::RecordId;

    use super::*;
    use crate::component::toast::ToastKind;

    fn members() -> Vec<Record> {
        vec![
            Record::new(RecordId::new(1), "Aaron Miles", "aaron@mailinator.com", "member"),
            Record::new(RecordId::new(2), "Aishwarya Naik", "aishwarya@mailinator.com", "member"),
            Record::new(RecordId::new(3), "Arvind Kumar", "arvind@mailinator.com", "admin"),
        ]
    }

    #[test]
    fn test_initial_load_becomes_ready() {
        let mut state = AppState::default();
        state.load_generation = 1;

        let _ = handle_records_loaded(&mut state, 1, Ok(members()));

        assert_eq!(state.load, LoadState::Ready);
        assert_eq!(state.dashboard.store().len(), 3);
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_failure_shows_error_and_empty_grid() {
        let mut state = AppState::default();
        state.load_generation = 1;

        let _ = handle_records_loaded(&mut state, 1, Err(FetchError::Timeout));

        assert!(matches!(state.load, LoadState::Failed(_)));
        assert!(state.dashboard.store().is_empty());
        assert_eq!(state.toast.map(|t| t.kind), Some(ToastKind::Error));
    }

    #[test]
    fn test_superseded_result_is_ignored() {
        let mut state = AppState::default();
        state.load_generation = 2;

        let _ = handle_records_loaded(&mut state, 1, Ok(members()));

        assert!(state.is_loading());
        assert!(state.dashboard.store().is_empty());
    }

    #[test]
    fn test_duplicate_ids_fail_the_load() {
        let mut state = AppState::default();
        state.load_generation = 1;
        let mut records = members();
        records.push(Record::new(RecordId::new(2), "Copy", "copy@mailinator.com", "member"));

        let _ = handle_records_loaded(&mut state, 1, Ok(records));

        assert!(matches!(state.load, LoadState::Failed(_)));
        assert!(state.dashboard.store().is_empty());
    }

    #[test]
    fn test_reload_keeps_committed_query() {
        let mut state = AppState::default();
        state.load_generation = 1;
        let _ = handle_records_loaded(&mut state, 1, Ok(members()));
        state.search_input = "admin".to_string();
        state.dashboard.set_query("admin");

        state.load_generation = 2;
        let _ = handle_records_loaded(&mut state, 2, Ok(members()));

        assert_eq!(state.dashboard.filtered_len(), 1);
        let toast = state.toast.expect("reload toast");
        assert_eq!(toast.kind, ToastKind::Success);
    }
}
