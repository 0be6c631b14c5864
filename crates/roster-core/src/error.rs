//! Error types for dashboard transitions.

use thiserror::Error;

/// Conditions a dashboard transition reports back to its caller.
///
/// Neither kind is fatal: the dashboard stays usable after both.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DashboardError {
    /// Loading the record collection failed; the dashboard is empty.
    #[error("failed to load records: {reason}")]
    FetchFailed {
        /// Transport, status or decode failure description.
        reason: String,
    },

    /// Bulk delete was requested with nothing selected; nothing changed.
    #[error("no rows selected for deletion")]
    EmptySelection,
}

impl DashboardError {
    /// Returns a user-friendly message suitable for a toast.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::FetchFailed { .. } => "Could not load members. Check your connection and reload.",
            Self::EmptySelection => "Select at least one row to delete.",
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
