//! Member grid: header with select-all checkbox, one row per record on the
//! current page.

use iced::widget::{
    Space, Text, button, checkbox, column, container, row, scrollable, text, text_input,
};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;
use roster_core::{Dashboard, RowMode};
use roster_model::{Record, RecordField};

use crate::message::{GridMessage, Message};
use crate::theme::spacing::{COL_ACTIONS, COL_CHECK, COL_EMAIL, COL_ID, COL_NAME, COL_ROLE};
use crate::theme::{CELL_PADDING_X, CELL_PADDING_Y, SPACING_MD, SPACING_XS, grid_header, grid_row};

fn column_width(field: RecordField) -> f32 {
    match field {
        RecordField::Id => COL_ID,
        RecordField::Name => COL_NAME,
        RecordField::Email => COL_EMAIL,
        RecordField::Role => COL_ROLE,
    }
}

fn cell<'a>(content: impl Into<Element<'a, Message>>, width: f32) -> Element<'a, Message> {
    container(content)
        .width(Length::Fixed(width))
        .padding([CELL_PADDING_Y, CELL_PADDING_X])
        .align_y(Alignment::Center)
        .into()
}

// =============================================================================
// GRID
// =============================================================================

pub fn view_grid(dashboard: &Dashboard) -> Element<'_, Message> {
    let rows = dashboard.page_rows();
    if rows.is_empty() {
        return view_empty(dashboard);
    }

    let body = rows
        .into_iter()
        .fold(column![], |body, record| body.push(view_row(dashboard, record)));

    column![
        view_header(dashboard),
        scrollable(body).height(Length::Fill),
    ]
    .into()
}

fn view_header(dashboard: &Dashboard) -> Element<'_, Message> {
    let select_page = checkbox(dashboard.page_fully_selected())
        .on_toggle(|_| Message::Grid(GridMessage::PageSelectionToggled));

    let header = RecordField::ALL.iter().fold(
        row![cell(select_page, COL_CHECK)],
        |header, &field| header.push(cell(text(field.label()).size(13), column_width(field))),
    );

    container(
        header
            .push(cell(text("Actions").size(13), COL_ACTIONS))
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .style(grid_header)
    .into()
}

fn view_row<'a>(dashboard: &'a Dashboard, record: &'a Record) -> Element<'a, Message> {
    let id = record.id;
    let selected = dashboard.selection().contains(id);
    let draft = dashboard.draft(id);
    let editing = dashboard.row_mode(id) == RowMode::Edit;

    let select = checkbox(selected)
        .on_toggle(move |_| Message::Grid(GridMessage::SelectionToggled(id)));

    let cells = RecordField::ALL.iter().fold(
        row![cell(select, COL_CHECK)],
        |cells, &field| {
            let width = column_width(field);
            let content: Element<'a, Message> = match draft {
                Some(draft) if editing && field.is_editable() => {
                    text_input(field.label(), &draft.field_text(field))
                        .on_input(move |value| {
                            Message::Grid(GridMessage::DraftChanged { id, field, value })
                        })
                        .on_submit(Message::Grid(GridMessage::Saved(id)))
                        .size(13)
                        .padding(SPACING_XS)
                        .into()
                }
                _ => text(record.field_text(field).into_owned()).size(13).into(),
            };
            cells.push(cell(content, width))
        },
    );

    let actions = if editing {
        row![
            icon_button(lucide::save(), "Save", GridMessage::Saved(id), button::primary),
            icon_button(lucide::x(), "Cancel", GridMessage::Cancelled(id), button::secondary),
        ]
    } else {
        row![
            icon_button(lucide::pencil(), "Edit", GridMessage::EditStarted(id), button::text),
            icon_button(lucide::trash(), "Delete", GridMessage::Deleted(id), button::danger),
        ]
    };

    container(
        cells
            .push(cell(actions.spacing(SPACING_XS), COL_ACTIONS))
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .style(grid_row(selected, editing))
    .into()
}

fn icon_button<'a>(
    icon: Text<'static>,
    label: &'a str,
    msg: GridMessage,
    style: fn(&Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    button(
        row![icon.size(13), text(label).size(12)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Grid(msg))
    .padding([2.0, 6.0])
    .style(style)
    .into()
}

fn view_empty(dashboard: &Dashboard) -> Element<'_, Message> {
    let message = if dashboard.store().is_empty() {
        "No members".to_string()
    } else {
        format!("No members match \"{}\"", dashboard.query().as_str())
    };

    container(
        column![
            lucide::search().size(24),
            Space::new().height(SPACING_XS),
            text(message).size(14),
        ]
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .padding(SPACING_MD)
    .into()
}
