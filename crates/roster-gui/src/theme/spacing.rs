//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

// =============================================================================
// BORDERS
// =============================================================================

/// Small radius - buttons, inputs, chips
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Thin border - subtle separators
pub const BORDER_WIDTH_THIN: f32 = 1.0;

// =============================================================================
// GRID
// =============================================================================

/// Horizontal padding inside a grid cell
pub const CELL_PADDING_X: f32 = 8.0;

/// Vertical padding inside a grid cell
pub const CELL_PADDING_Y: f32 = 6.0;

/// Column widths: checkbox, id, name, email, role, actions
pub const COL_CHECK: f32 = 36.0;
pub const COL_ID: f32 = 64.0;
pub const COL_NAME: f32 = 240.0;
pub const COL_EMAIL: f32 = 340.0;
pub const COL_ROLE: f32 = 140.0;
pub const COL_ACTIONS: f32 = 200.0;
