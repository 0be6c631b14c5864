//! Member list loading service.

use iced::Task;

use crate::message::Message;
use crate::state::{AppState, LoadState};

/// Start fetching the member list.
///
/// Any fetch already in flight is aborted. The returned task produces a
/// `RecordsLoaded` message tagged with the new request generation.
pub fn load_records(state: &mut AppState) -> Task<Message> {
    state.load_generation += 1;
    state.load = LoadState::Loading;

    let generation = state.load_generation;
    let settings = state.settings.fetch.clone();

    tracing::info!(generation, endpoint = %settings.endpoint, "Fetching member list");

    let (task, handle) = Task::perform(
        async move { roster_fetch::fetch_records(&settings).await },
        move |result| Message::RecordsLoaded { generation, result },
    )
    .abortable();

    // Replacing the previous handle drops it, which aborts the old fetch.
    state.fetch_handle = Some(handle.abort_on_drop());
    task
}
