// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{opacity, palette::WHITE, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled accent button for primary actions (hero CTA, send).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let text_color = if theme.extended_palette().is_dark {
        colors.surface_primary
    } else {
        WHITE
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors.accent)),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(colors.accent_soft)),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::MUTED,
                ..colors.accent
            })),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Outlined accent button for secondary actions.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::TINT,
            ..colors.accent
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: colors.accent,
        border: Border {
            color: colors.accent,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only header link; the active section is drawn in the accent color.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let text_color = if active || matches!(status, button::Status::Hovered) {
            colors.accent
        } else {
            colors.text_secondary
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Small pill button used for the theme toggle and link copying.
pub fn pill(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::MUTED,
        button::Status::Active | button::Status::Disabled => opacity::TINT,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..colors.accent_soft
        })),
        text_color: colors.text_primary,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn primary_button_uses_mode_accent() {
        let dark = primary(&Theme::Dark, button::Status::Active);
        let light = primary(&Theme::Light, button::Status::Active);

        assert_eq!(dark.background, Some(Background::Color(palette::AMBER_400)));
        assert_eq!(light.background, Some(Background::Color(palette::SKY_500)));
    }

    #[test]
    fn active_nav_link_is_highlighted() {
        let theme = Theme::Light;
        let active = nav_link(true)(&theme, button::Status::Active);
        let idle = nav_link(false)(&theme, button::Status::Active);

        assert_eq!(active.text_color, palette::SKY_500);
        assert_ne!(idle.text_color, active.text_color);
    }
}
