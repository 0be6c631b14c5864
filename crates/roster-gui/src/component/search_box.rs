//! Search box component.
//!
//! A text input with search icon and clear button. Typing only edits the
//! text; the query is committed on Enter or by the clear button.

use iced::widget::{button, container, row, text_input};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{BORDER_RADIUS_SM, BORDER_WIDTH_THIN, SPACING_XS};

// =============================================================================
// SEARCH BOX
// =============================================================================

/// Creates a search input with clear button.
///
/// # Arguments
///
/// * `value` - Current search text
/// * `placeholder` - Placeholder text
/// * `on_change` - Message factory for text changes
/// * `on_submit` - Message to send when Enter is pressed
/// * `on_clear` - Message to send when clear button is clicked
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_submit: M,
    on_clear: M,
) -> Element<'a, M> {
    let search_icon = container(lucide::search().size(14))
        .center_x(Length::Fixed(32.0))
        .style(|theme: &Theme| container::Style {
            text_color: Some(theme.extended_palette().background.strong.color),
            ..Default::default()
        });

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .on_submit(on_submit)
        .padding([6.0, 4.0])
        .width(Length::Fill)
        .style(|theme: &Theme, status| text_input::Style {
            border: Border {
                width: 0.0,
                ..Default::default()
            },
            ..text_input::default(theme, status)
        });

    // Clear button (only shown when there's text)
    let clear_button = (!value.is_empty()).then(|| {
        button(lucide::x().size(14))
            .on_press(on_clear)
            .padding([4.0, 8.0])
            .style(button::text)
    });

    let mut content = row![search_icon, input]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center);

    if let Some(btn) = clear_button {
        content = content.push(btn);
    }

    container(content)
        .width(Length::Fill)
        .style(|theme: &Theme| {
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
        })
        .into()
}
