// SPDX-License-Identifier: MPL-2.0
//! Hero section.

use super::{Message, Section};
use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text, Column, Row, Text};
use iced::{Element, Theme};

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let accent = |theme: &Theme| text::Style {
        color: Some(ColorScheme::for_theme(theme).accent),
    };
    let muted = |theme: &Theme| text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    };

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(i18n.tr("hero-cta-work")).size(typography::BODY_LG))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::Navigate(Section::Projects)),
        )
        .push(
            button(Text::new(i18n.tr("hero-cta-contact")).size(typography::BODY_LG))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::outline)
                .on_press(Message::Navigate(Section::Contact)),
        );

    Column::new()
        .spacing(spacing::MD)
        .padding([spacing::XXL, 0.0])
        .push(Text::new(i18n.tr("hero-greeting")).size(typography::BODY_LG).style(accent))
        .push(Text::new(i18n.tr("hero-name")).size(typography::DISPLAY))
        .push(Text::new(i18n.tr("hero-role")).size(typography::TITLE_LG).style(muted))
        .push(Text::new(i18n.tr("hero-summary")).size(typography::BODY_LG))
        .push(actions)
        .into()
}
