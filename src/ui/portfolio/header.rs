// SPDX-License-Identifier: MPL-2.0
//! Sticky header with section links and the theme toggle.

use super::{Message, Section};
use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(active: Section, is_dark: bool, i18n: &I18n) -> Element<'a, Message> {
    let links = Section::ALL.iter().fold(Row::new().spacing(spacing::XS), |row, section| {
        row.push(
            button(Text::new(i18n.tr(section.i18n_key())).size(typography::BODY))
                .style(styles::button::nav_link(*section == active))
                .on_press(Message::Navigate(*section)),
        )
    });

    let toggle_key = if is_dark {
        "theme-toggle-to-light"
    } else {
        "theme-toggle-to-dark"
    };
    let toggle = button(Text::new(i18n.tr(toggle_key)).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::pill)
        .on_press(Message::ToggleTheme);

    let bar = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr("hero-name")).size(typography::TITLE_SM))
        .push(Container::new(links).width(Length::Fill).center_x(Length::Fill))
        .push(toggle);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::XL])
        .style(styles::container::header)
        .into()
}
