// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Raised card used for projects, stats and the boot panel.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        border: Border {
            color: Color {
                a: opacity::TINT,
                ..colors.text_secondary
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Sticky header bar.
pub fn header(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_overlay)),
        shadow: shadow::SM,
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Skill and project tag chip.
pub fn chip(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TINT,
            ..colors.accent
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Boot milestone marker. A flashing marker is filled with the accent.
pub fn milestone(reached: bool, flashing: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let background = if flashing {
            Some(Background::Color(colors.accent))
        } else if reached {
            Some(Background::Color(Color {
                a: opacity::MUTED,
                ..colors.accent
            }))
        } else {
            None
        };

        container::Style {
            background,
            border: Border {
                color: if reached { colors.accent } else { colors.text_secondary },
                width: if flashing {
                    border::WIDTH_MD
                } else {
                    border::WIDTH_SM
                },
                radius: radius::FULL.into(),
            },
            shadow: if flashing { shadow::MD } else { shadow::NONE },
            text_color: Some(colors.text_primary),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flashing_milestone_is_filled_with_accent() {
        let theme = Theme::Dark;
        let style = milestone(true, true)(&theme);
        assert_eq!(
            style.background,
            Some(Background::Color(ColorScheme::dark().accent))
        );
    }

    #[test]
    fn pending_milestone_is_hollow() {
        let style = milestone(false, false)(&Theme::Light);
        assert!(style.background.is_none());
    }
}
