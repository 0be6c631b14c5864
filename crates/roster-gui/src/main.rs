//! Roster Admin - Desktop Member Dashboard
//!
//! Fetches the member list, then lets an operator search, page through,
//! edit and delete members. All changes stay in memory for the session.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use iced::Size;
use iced::window;
use roster_gui::App;
use roster_gui::logging::init_logging;
use roster_gui::state::Settings;

/// Application entry point.
///
/// Initializes logging from the settings file, then runs the Iced
/// application with default window settings.
pub fn main() -> iced::Result {
    let settings = Settings::load();
    if let Err(e) = init_logging(&settings.logging.to_log_config()) {
        eprintln!("Failed to open log file, logging to stderr only: {e}");
    }

    tracing::info!("Starting Roster Admin");

    // Run the Iced application using the builder pattern. The boot closure
    // hands the settings read above to the application state.
    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(960.0, 600.0)),
            ..Default::default()
        })
        .run()
}
