//! Application state.
//!
//! [`AppState`] is the root of all state. The grid state itself lives in
//! [`roster_core::Dashboard`]; this layer adds what only the desktop shell
//! needs: the uncommitted search text, the load status, the toast and the
//! in-flight fetch.

mod settings;

pub use settings::{DisplaySettings, LoggingSettings, Settings, SettingsError};

use iced::task::Handle;
use roster_core::Dashboard;

use crate::component::toast::ToastState;

/// Status of the member list fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// A fetch is in flight.
    #[default]
    Loading,
    /// The last fetch succeeded.
    Ready,
    /// The last fetch failed; the message is shown with a Reload button.
    Failed(String),
}

/// Top-level application state.
pub struct AppState {
    /// Records, query, paging, edits and selection.
    pub dashboard: Dashboard,
    /// Text in the search box. Committed to the dashboard on Enter.
    pub search_input: String,
    /// Fetch status.
    pub load: LoadState,
    /// Active toast notification.
    pub toast: Option<ToastState>,
    /// Application settings (persisted).
    pub settings: Settings,
    /// Identifies the most recent fetch request.
    pub load_generation: u64,
    /// Aborts the in-flight fetch when replaced or dropped.
    pub fetch_handle: Option<Handle>,
}

impl AppState {
    /// Create state from loaded settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            dashboard: Dashboard::with_page_size(settings.display.page_size()),
            search_input: String::new(),
            load: LoadState::default(),
            toast: None,
            settings,
            load_generation: 0,
            fetch_handle: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}
