//! View functions.
//!
//! Views are pure functions of [`AppState`]; every interaction becomes a
//! [`Message`].

mod grid;
mod pagination;
mod toolbar;

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::message::{Message, ToolbarMessage};
use crate::state::{AppState, LoadState};
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, panel};

pub use grid::view_grid;
pub use pagination::{view_page_size_selector, view_pagination};
pub use toolbar::view_toolbar;

/// The whole dashboard: toolbar on top, then the grid or the load status.
pub fn view_dashboard(state: &AppState) -> Element<'_, Message> {
    let body: Element<'_, Message> = match &state.load {
        LoadState::Loading if state.dashboard.store().is_empty() => view_loading(),
        LoadState::Failed(message) => view_load_failed(message),
        LoadState::Loading | LoadState::Ready => {
            let bar = row![
                view_page_size_selector(state.dashboard.cursor().page_size().get()),
                Space::new().width(Length::Fill),
                view_pagination(&state.dashboard),
            ]
            .align_y(Alignment::Center);

            column![
                container(view_grid(&state.dashboard))
                    .height(Length::Fill)
                    .style(panel),
                bar,
            ]
            .spacing(SPACING_SM)
            .into()
        }
    };

    column![view_toolbar(state), body]
        .spacing(SPACING_MD)
        .padding(SPACING_LG)
        .into()
}

fn view_loading<'a>() -> Element<'a, Message> {
    let content = row![lucide::refresh_cw().size(16), text("Loading members...").size(14)]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn view_load_failed(message: &str) -> Element<'_, Message> {
    let content = column![
        lucide::circle_alert().size(32),
        text("Could not load members").size(18),
        text(message).size(13),
        button(
            row![lucide::refresh_cw().size(14), text("Reload").size(13)]
                .spacing(SPACING_SM)
                .align_y(Alignment::Center),
        )
        .on_press(Message::Toolbar(ToolbarMessage::Reload))
        .padding([SPACING_SM, SPACING_MD])
        .style(button::primary),
    ]
    .spacing(SPACING_SM)
    .align_x(Alignment::Center);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
