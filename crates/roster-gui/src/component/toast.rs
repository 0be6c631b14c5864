//! Toast notification component.
//!
//! Shows a temporary notification message that auto-dismisses after a timeout.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Color, Element, Length};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS, toast_container};

/// Toast notification state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    /// The message to display.
    pub message: String,
    /// Determines the icon and accent color.
    pub kind: ToastKind,
}

/// Type of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    /// Accent color for the icon and border.
    pub fn color(self) -> Color {
        match self {
            Self::Success => Color::from_rgb8(0x16, 0xA3, 0x4A),
            Self::Info => Color::from_rgb8(0x25, 0x63, 0xEB),
            Self::Warning => Color::from_rgb8(0xD9, 0x77, 0x06),
            Self::Error => Color::from_rgb8(0xDC, 0x26, 0x26),
        }
    }
}

/// Toast message for handling toast events.
#[derive(Debug, Clone)]
pub enum ToastMessage {
    /// Dismiss the toast.
    Dismiss,
}

impl ToastState {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }
}

/// Renders a toast notification.
///
/// The toast appears at the bottom-right of the window and can be dismissed.
pub fn view_toast(state: &ToastState) -> Element<'_, Message> {
    let accent = state.kind.color();

    let icon = match state.kind {
        ToastKind::Success => lucide::circle_check().size(18).color(accent),
        ToastKind::Info => lucide::info().size(18).color(accent),
        ToastKind::Warning => lucide::triangle_alert().size(18).color(accent),
        ToastKind::Error => lucide::circle_x().size(18).color(accent),
    };

    let dismiss_btn = button(lucide::x().size(14))
        .on_press(Message::Toast(ToastMessage::Dismiss))
        .padding(SPACING_XS)
        .style(button::text);

    let content = row![
        icon,
        Space::new().width(SPACING_SM),
        text(&state.message).size(14),
        Space::new().width(SPACING_SM),
        dismiss_btn,
    ]
    .align_y(Alignment::Center)
    .spacing(SPACING_XS);

    container(content)
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Shrink)
        .style(toast_container(accent))
        .into()
}
