// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

fn view_toast<'a>(notification: &'a Notification, i18n: &I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let dismiss = button(Text::new("×").size(typography::BODY_LG))
        .on_press(Message::Dismiss(notification.id()))
        .padding([0.0, spacing::XS])
        .style(|theme: &Theme, _status| button::Style {
            text_color: ColorScheme::for_theme(theme).text_secondary,
            ..button::Style::default()
        });

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(i18n.tr(notification.message_key())).size(typography::BODY))
                .width(Length::Fill),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_style(theme, accent))
        .into()
}

/// Stacks the visible toasts in the bottom-right corner.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &I18n) -> Element<'a, Message> {
    let toasts: Vec<Element<'a, Message>> = manager
        .visible()
        .map(|notification| view_toast(notification, i18n))
        .collect();

    if toasts.is_empty() {
        return Container::new(text("")).into();
    }

    Container::new(
        Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .align_y(alignment::Vertical::Bottom)
    .padding(spacing::MD)
    .into()
}

fn toast_style(theme: &Theme, accent: Color) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(iced::Background::Color(colors.surface_secondary)),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn toast_border_uses_severity_accent() {
        let style = toast_style(&Theme::Dark, palette::SUCCESS_500);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }
}
