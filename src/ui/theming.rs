// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.
//!
//! The portfolio uses a sky accent in light mode and an amber accent in dark
//! mode. Widgets pick their colors through [`ColorScheme::for_theme`] so that
//! the choice follows the active Iced theme.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_overlay: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Accent colors
    pub accent: Color,
    pub accent_soft: Color,

    pub error: Color,
    pub success: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::SLATE_50,
            surface_secondary: palette::WHITE,
            surface_overlay: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },

            text_primary: palette::SLATE_900,
            text_secondary: palette::SLATE_500,

            accent: palette::SKY_500,
            accent_soft: palette::SKY_300,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::SLATE_950,
            surface_secondary: palette::SLATE_900,
            surface_overlay: Color {
                a: opacity::SURFACE,
                ..palette::SLATE_900
            },

            text_primary: palette::SLATE_100,
            text_secondary: palette::SLATE_400,

            accent: palette::AMBER_400,
            accent_soft: palette::AMBER_300,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,
        }
    }

    /// Scheme matching an Iced theme's brightness.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Theme preference stored in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    /// Follow the desktop setting, read once per call through `dark-light`.
    System,
}

impl ThemeMode {
    /// Whether the effective theme is dark. An undetectable desktop
    /// setting counts as light.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// The explicit mode opposite to the effective one.
    ///
    /// `System` is resolved first, so toggling always leaves an explicit
    /// `Light` or `Dark` choice behind.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    /// Parses `light`, `dark` or `system`, ignoring case.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode `{other}`")),
        }
    }
}
