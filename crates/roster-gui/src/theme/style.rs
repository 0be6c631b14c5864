//! Container styles used by the dashboard views.

use iced::widget::container;
use iced::{Border, Color, Theme};

use super::spacing::{BORDER_RADIUS_SM, BORDER_WIDTH_THIN};

/// Bordered panel around the grid and the pagination bar.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: BORDER_WIDTH_THIN,
            radius: BORDER_RADIUS_SM.into(),
        },
        ..Default::default()
    }
}

/// Grid header row.
pub fn grid_header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Grid body row. Selected rows and rows in edit mode are highlighted.
pub fn grid_row(selected: bool, editing: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let background = if editing {
            Some(Color {
                a: 0.25,
                ..palette.primary.weak.color
            }
            .into())
        } else if selected {
            Some(Color {
                a: 0.12,
                ..palette.primary.weak.color
            }
            .into())
        } else {
            None
        };
        container::Style {
            background,
            border: Border {
                color: palette.background.weak.color,
                width: BORDER_WIDTH_THIN,
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Toast banner tinted with the toast's accent color.
pub fn toast_container(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.background.base.color.into()),
            text_color: Some(palette.background.base.text),
            border: Border {
                color: accent,
                width: 2.0,
                radius: BORDER_RADIUS_SM.into(),
            },
            ..Default::default()
        }
    }
}
