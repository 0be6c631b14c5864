//! Background services.
//!
//! Async work runs through Iced's `Task::perform`; results come back as
//! messages.

pub mod fetch;
