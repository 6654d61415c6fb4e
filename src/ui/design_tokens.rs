// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every screen.
//!
//! Spacing follows a 4px unit. Colors are the Tailwind slate scale plus one
//! accent family per theme (sky for light, amber for dark); widgets should
//! reach them through [`ColorScheme`](crate::ui::theming::ColorScheme)
//! rather than directly, so that they follow theme changes.
//!
//! ```
//! use folio::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let hover = Color { a: opacity::TINT, ..palette::SKY_500 };
//! assert_eq!(spacing::MD, 16.0);
//! # let _ = hover;
//! ```

use iced::Color;

/// Base colors.
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    pub const SLATE_50: Color = Color::from_rgb(0.973, 0.980, 0.988);
    pub const SLATE_100: Color = Color::from_rgb(0.945, 0.961, 0.976);
    pub const SLATE_400: Color = Color::from_rgb(0.580, 0.639, 0.722);
    pub const SLATE_500: Color = Color::from_rgb(0.392, 0.455, 0.545);
    pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165);
    pub const SLATE_950: Color = Color::from_rgb(0.008, 0.024, 0.090);

    pub const SKY_300: Color = Color::from_rgb(0.490, 0.827, 0.988);
    pub const SKY_500: Color = Color::from_rgb(0.055, 0.647, 0.914);

    pub const AMBER_300: Color = Color::from_rgb(0.988, 0.827, 0.302);
    pub const AMBER_400: Color = Color::from_rgb(0.984, 0.749, 0.141);

    /// Failed boot status, rejected contact form.
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const WARNING_500: Color = Color::from_rgb(0.961, 0.620, 0.043);
    pub const SUCCESS_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
}

/// Alpha levels.
pub mod opacity {
    /// Hover washes and chip backgrounds.
    pub const TINT: f32 = 0.12;
    pub const MUTED: f32 = 0.5;
    pub const SURFACE: f32 = 0.95;
    pub const FULL: f32 = 1.0;
    /// Drop shadows.
    pub const SHADOW: f32 = 0.18;
}

/// Gaps and paddings, in multiples of a 4px unit.
pub mod spacing {
    const UNIT: f32 = 4.0;

    pub const XXS: f32 = UNIT;
    pub const XS: f32 = UNIT * 2.0;
    pub const SM: f32 = UNIT * 3.0;
    pub const MD: f32 = UNIT * 4.0;
    pub const LG: f32 = UNIT * 6.0;
    pub const XL: f32 = UNIT * 8.0;
    pub const XXL: f32 = UNIT * 12.0;
    /// Vertical gap between portfolio sections.
    pub const SECTION: f32 = UNIT * 24.0;
}

/// Fixed widget dimensions.
pub mod sizing {
    pub const SCROLL_PROGRESS_HEIGHT: f32 = 3.0;
    pub const BOOT_PROGRESS_HEIGHT: f32 = 6.0;
    pub const BOOT_PANEL_WIDTH: f32 = 460.0;

    pub const CONTENT_MAX_WIDTH: f32 = 1080.0;
    pub const PROJECT_CARD_WIDTH: f32 = 320.0;
    pub const PROJECT_PREVIEW_HEIGHT: f32 = 200.0;
    pub const MESSAGE_INPUT_HEIGHT: f32 = 120.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

/// Font sizes, largest first.
pub mod typography {
    /// Hero name and stat values.
    pub const DISPLAY: f32 = 48.0;
    pub const TITLE_LG: f32 = 32.0;
    pub const TITLE_MD: f32 = 22.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 15.0;
    pub const BODY_SM: f32 = 13.0;
    /// Tags, milestone chips, footer.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 14.0;
    /// Large enough to round any chip into a pill.
    pub const FULL: f32 = 999.0;
}

pub mod shadow {
    use super::{opacity, palette, Color};
    use iced::{Shadow, Vector};

    const fn drop(offset_y: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: Color {
                a: opacity::SHADOW,
                ..palette::BLACK
            },
            offset: Vector::new(0.0, offset_y),
            blur_radius,
        }
    }

    pub const NONE: Shadow = drop(0.0, 0.0);
    pub const SM: Shadow = drop(2.0, 6.0);
    pub const MD: Shadow = drop(6.0, 16.0);
}

const _: () = {
    assert!(spacing::SECTION > spacing::XXL);
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::BODY_SM > typography::CAPTION);
    assert!(opacity::TINT < opacity::MUTED && opacity::MUTED < opacity::SURFACE);
};
