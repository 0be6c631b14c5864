//! Message module for Roster Admin.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and events flow through these message types.

pub mod grid;
pub mod pagination;
pub mod toolbar;

use roster_fetch::FetchError;
use roster_model::Record;

use crate::component::toast::ToastMessage;

pub use grid::GridMessage;
pub use pagination::PaginationMessage;
pub use toolbar::ToolbarMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Row actions from the member grid
    Grid(GridMessage),

    /// Search box, bulk delete and reload
    Toolbar(ToolbarMessage),

    /// Page navigation and page size
    Pagination(PaginationMessage),

    // =========================================================================
    // Background task results
    // =========================================================================
    /// Member fetch completed. `generation` identifies the request so a
    /// superseded reload cannot overwrite a newer one.
    RecordsLoaded {
        generation: u64,
        result: Result<Vec<Record>, FetchError>,
    },

    // =========================================================================
    // Global events
    // =========================================================================
    /// Toast interaction or expiry
    Toast(ToastMessage),

    /// No operation
    Noop,
}
