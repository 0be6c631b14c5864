//! Roster Admin - GUI Library
//!
//! This module provides the application types and modules for the Roster
//! Admin desktop dashboard: a paginated, searchable, editable grid over the
//! remote member list.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod handler;
pub mod logging;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;

pub use app::App;
