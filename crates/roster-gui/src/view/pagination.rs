//! Pagination bar and rows-per-page selector.

use iced::widget::{button, container, row, text};
use iced::{Alignment, Border, Color, Element, Theme};
use iced_fonts::lucide;
use roster_core::{Dashboard, PAGE_SIZE_OPTIONS};

use crate::message::{Message, PaginationMessage};
use crate::theme::{BORDER_RADIUS_SM, BORDER_WIDTH_THIN, SPACING_SM, SPACING_XS};

// =============================================================================
// PAGINATION CONTROLS
// =============================================================================

/// First/previous/next/last buttons around a "start-end of total" label.
pub fn view_pagination(dashboard: &Dashboard) -> Element<'_, Message> {
    let cursor = dashboard.cursor();
    let page = cursor.current_page();
    let total_pages = dashboard.page_count().max(1);
    let total_rows = dashboard.filtered_len();

    let prev_enabled = page > 1;
    let next_enabled = page < total_pages;

    let nav = |icon: iced::widget::Text<'static>, enabled: bool, msg: PaginationMessage| {
        button(icon.size(14))
            .on_press_maybe(enabled.then_some(Message::Pagination(msg)))
            .padding([6.0, 8.0])
            .style(button::text)
    };

    let range = cursor.range();
    let start_row = if total_rows == 0 { 0 } else { range.start + 1 };
    let end_row = range.end.min(total_rows);

    let page_info = container(
        text(format!(
            "{start_row}-{end_row} of {total_rows}  ·  Page {page} of {total_pages}"
        ))
        .size(12),
    )
    .padding([6.0, 12.0])
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.background.weak.color.into()),
            border: Border {
                color: palette.background.strong.color,
                width: BORDER_WIDTH_THIN,
                radius: BORDER_RADIUS_SM.into(),
            },
            ..Default::default()
        }
    });

    row![
        nav(lucide::chevrons_left(), prev_enabled, PaginationMessage::First),
        nav(lucide::chevron_left(), prev_enabled, PaginationMessage::Previous),
        page_info,
        nav(lucide::chevron_right(), next_enabled, PaginationMessage::Next),
        nav(lucide::chevrons_right(), next_enabled, PaginationMessage::Last),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center)
    .into()
}

// =============================================================================
// ROWS PER PAGE
// =============================================================================

/// One toggle button per offered page size.
pub fn view_page_size_selector<'a>(current: usize) -> Element<'a, Message> {
    let buttons = PAGE_SIZE_OPTIONS.iter().map(|&n| {
        let is_selected = current == n;
        button(text(n.to_string()).size(11))
            .on_press(Message::Pagination(PaginationMessage::PageSizeChanged(n)))
            .padding([4.0, 8.0])
            .style(move |theme: &Theme, status| {
                if is_selected {
                    let accent = theme.extended_palette().primary.base.color;
                    button::Style {
                        background: Some(Color { a: 0.15, ..accent }.into()),
                        text_color: accent,
                        border: Border {
                            color: accent,
                            width: BORDER_WIDTH_THIN,
                            radius: BORDER_RADIUS_SM.into(),
                        },
                        ..Default::default()
                    }
                } else {
                    button::secondary(theme, status)
                }
            })
    });

    buttons
        .fold(row![text("Rows:").size(12)], |selector, btn| selector.push(btn))
        .spacing(SPACING_XS)
        .padding([0.0, SPACING_SM])
        .align_y(Alignment::Center)
        .into()
}
