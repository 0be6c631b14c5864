//! Toolbar: search box, selection count, bulk delete and reload.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::component::search_box;
use crate::message::{Message, ToolbarMessage};
use crate::state::AppState;
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS};

pub fn view_toolbar(state: &AppState) -> Element<'_, Message> {
    let search = container(search_box(
        &state.search_input,
        "Search by name, email or role",
        |value| Message::Toolbar(ToolbarMessage::SearchInput(value)),
        Message::Toolbar(ToolbarMessage::SearchSubmitted),
        Message::Toolbar(ToolbarMessage::SearchCleared),
    ))
    .max_width(420.0);

    let selected = state.dashboard.selection().len();
    let selection_label = text(match selected {
        0 => String::new(),
        1 => "1 selected".to_string(),
        n => format!("{n} selected"),
    })
    .size(13);

    // Enabled with an empty selection; the handler answers with a warning.
    let delete_selected = button(
        row![lucide::trash().size(14), text("Delete selected").size(13)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press_maybe(
        (!state.is_loading()).then_some(Message::Toolbar(ToolbarMessage::DeleteSelected)),
    )
    .padding([SPACING_XS, SPACING_SM])
    .style(button::danger);

    let reload = button(
        row![lucide::refresh_cw().size(14), text("Reload").size(13)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press_maybe((!state.is_loading()).then_some(Message::Toolbar(ToolbarMessage::Reload)))
    .padding([SPACING_XS, SPACING_SM])
    .style(button::secondary);

    row![
        search,
        Space::new().width(Length::Fill),
        selection_label,
        delete_selected,
        reload,
    ]
    .spacing(SPACING_MD)
    .align_y(Alignment::Center)
    .into()
}
