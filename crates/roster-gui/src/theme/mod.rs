//! Theme module for Roster Admin.
//!
//! - Spacing constants (`spacing`)
//! - Widget style functions (`style`)
//!
//! Colors come from the active iced theme's extended palette, so every
//! style function works in light and dark themes alike.

pub mod spacing;
pub mod style;

pub use spacing::{
    BORDER_RADIUS_SM, BORDER_WIDTH_THIN, CELL_PADDING_X, CELL_PADDING_Y, SPACING_LG, SPACING_MD,
    SPACING_SM, SPACING_XS,
};
pub use style::{grid_header, grid_row, panel, toast_container};
