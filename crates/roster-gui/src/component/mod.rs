//! Reusable view components.

pub mod search_box;
pub mod toast;

pub use search_box::search_box;
pub use toast::{ToastKind, ToastMessage, ToastState, view_toast};
