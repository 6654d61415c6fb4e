// SPDX-License-Identifier: MPL-2.0
//! Text input styles for the contact form.

use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::text_input;
use iced::{Background, Border, Theme};

pub fn field(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let colors = ColorScheme::for_theme(theme);
    let border_color = match status {
        text_input::Status::Focused { .. } | text_input::Status::Hovered => colors.accent,
        text_input::Status::Active | text_input::Status::Disabled => colors.text_secondary,
    };

    text_input::Style {
        background: Background::Color(colors.surface_secondary),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        icon: colors.text_secondary,
        placeholder: colors.text_secondary,
        value: colors.text_primary,
        selection: colors.accent_soft,
    }
}
