//! Main application module for Roster Admin.
//!
//! This module implements the Iced 0.14.0 application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! - All state changes happen in `update()`; views are pure functions
//! - The member fetch runs through `Task::perform`
//! - Message handling is delegated to `handler/`

use std::time::Duration;

use iced::widget::{Space, column, container, row, stack};
use iced::{Element, Length, Subscription, Task, time};

use crate::component::toast::{ToastMessage, view_toast};
use crate::handler::{
    GridHandler, MessageHandler, PaginationHandler, ToolbarHandler, handle_records_loaded,
};
use crate::message::Message;
use crate::service::fetch::load_records;
use crate::state::{AppState, Settings};
use crate::theme::SPACING_LG;
use crate::view::view_dashboard;

/// How long a toast stays on screen.
const TOAST_TIMEOUT: Duration = Duration::from_secs(4);

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance from loaded settings and start the
    /// first fetch.
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let mut app = Self {
            state: AppState::with_settings(settings),
        };
        let fetch = load_records(&mut app.state);
        (app, fetch)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // View messages
            // =================================================================
            Message::Grid(msg) => GridHandler.handle(&mut self.state, msg),
            Message::Toolbar(msg) => ToolbarHandler.handle(&mut self.state, msg),
            Message::Pagination(msg) => PaginationHandler.handle(&mut self.state, msg),

            // =================================================================
            // Background results
            // =================================================================
            Message::RecordsLoaded { generation, result } => {
                handle_records_loaded(&mut self.state, generation, result)
            }

            // =================================================================
            // Toast notifications
            // =================================================================
            Message::Toast(ToastMessage::Dismiss) => {
                self.state.toast = None;
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        let content = container(view_dashboard(&self.state))
            .width(Length::Fill)
            .height(Length::Fill);

        let Some(toast) = &self.state.toast else {
            return content.into();
        };

        // Position toast at bottom-right using a row with flex space
        let toast_row = row![
            Space::new().width(Length::Fill),
            container(view_toast(toast)).padding([SPACING_LG, SPACING_LG]),
        ];
        let toast_layer = column![Space::new().height(Length::Fill), toast_row];

        stack![content, toast_layer].into()
    }

    /// Window title, with the member count once loaded.
    pub fn title(&self) -> String {
        let store = self.state.dashboard.store();
        if store.is_empty() {
            "Roster Admin".to_string()
        } else {
            format!("Roster Admin - {} members", store.len())
        }
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        // Toast auto-dismiss timer
        if self.state.toast.is_some() {
            time::every(TOAST_TIMEOUT).map(|_| Message::Toast(ToastMessage::Dismiss))
        } else {
            Subscription::none()
        }
    }
}
