// SPDX-License-Identifier: MPL-2.0
//! Page footer.

use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use chrono::Datelike;
use fluent_bundle::FluentValue;
use iced::widget::{Container, Text};
use iced::{Element, Length};

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let year = chrono::Local::now().year().to_string();
    let copyright = i18n.tr_with_args("footer-copyright", &[("year", FluentValue::from(year))]);

    Container::new(Text::new(copyright).size(typography::CAPTION))
        .width(Length::Fill)
        .padding([spacing::LG, 0.0])
        .center_x(Length::Fill)
        .into()
}
