//! Pagination handler.

use std::num::NonZeroUsize;

use iced::Task;
use roster_core::PAGE_SIZE_OPTIONS;

use super::MessageHandler;
use crate::message::{Message, PaginationMessage};
use crate::state::AppState;

/// Handles page navigation and page size changes.
pub struct PaginationHandler;

impl MessageHandler<PaginationMessage> for PaginationHandler {
    fn handle(&self, state: &mut AppState, msg: PaginationMessage) -> Task<Message> {
        let dashboard = &mut state.dashboard;
        match msg {
            PaginationMessage::First => dashboard.first_page(),
            PaginationMessage::Previous => dashboard.previous_page(),
            PaginationMessage::Next => dashboard.next_page(),
            PaginationMessage::Last => dashboard.last_page(),
            PaginationMessage::GoTo(page) => dashboard.go_to_page(page),
            PaginationMessage::PageSizeChanged(size) => {
                let Some(page_size) = NonZeroUsize::new(size)
                    .filter(|size| PAGE_SIZE_OPTIONS.contains(&size.get()))
                else {
                    tracing::debug!(size, "Ignoring unsupported page size");
                    return Task::none();
                };

                dashboard.set_page_size(page_size);
                state.settings.display.page_size = size;
                return persist_settings(state);
            }
        }
        Task::none()
    }
}

/// Save settings off the update loop. Failures are logged, not surfaced.
fn persist_settings(state: &AppState) -> Task<Message> {
    let settings = state.settings.clone();
    Task::perform(async move { settings.save() }, |result| {
        if let Err(e) = result {
            tracing::warn!("Failed to save settings: {}", e);
        }
        Message::Noop
    })
}
