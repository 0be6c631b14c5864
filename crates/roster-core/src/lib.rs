//! Dashboard state for the roster admin console.
//!
//! The crate owns every piece of client-side state the member grid reads:
//!
//! - [`store`]: the full, unfiltered record collection
//! - [`filter`]: case-insensitive "any field" search over the collection
//! - [`paginate`]: fixed-size page slicing with a clamped cursor
//! - [`edit_mode`]: per-row view/edit state and in-progress drafts
//! - [`selection`]: ids checked for bulk deletion
//! - [`dashboard`]: the [`Dashboard`] container that keeps all of the above
//!   consistent through atomic transitions
//!
//! Renderers read the container; only its transition methods mutate it.
//!
//! # Example
//!
//! ```
//! use roster_core::{Dashboard, DashboardError};
//! use roster_model::{Record, RecordId};
//!
//! let records = (1..=3)
//!     .map(|i| Record::new(RecordId::new(i), format!("User {i}"), format!("u{i}@x.io"), "member"))
//!     .collect::<Vec<_>>();
//!
//! let mut dashboard = Dashboard::default();
//! dashboard.apply_fetch(Ok::<_, String>(records)).unwrap();
//!
//! dashboard.set_query("u2@");
//! assert_eq!(dashboard.filtered_len(), 1);
//!
//! assert_eq!(dashboard.delete_selected(), Err(DashboardError::EmptySelection));
//! assert_eq!(dashboard.store().len(), 3);
//! ```

pub mod action;
pub mod dashboard;
pub mod edit_mode;
pub mod error;
pub mod filter;
pub mod paginate;
pub mod selection;
pub mod store;

pub use action::GridAction;
pub use dashboard::Dashboard;
pub use edit_mode::{EditModeTracker, RowMode, RowModeEntry};
pub use error::{DashboardError, Result};
pub use filter::{SearchQuery, filter, matching_indices};
pub use paginate::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, PageCursor, page_count, paginate};
pub use selection::SelectionSet;
pub use store::RecordStore;
