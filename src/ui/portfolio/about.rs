// SPDX-License-Identifier: MPL-2.0
//! About section: bio paragraphs and the skill chips.

use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::content::{ABOUT_PARAGRAPHS, SKILLS};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::Element;

/// Skill chips per row.
const SKILLS_PER_ROW: usize = 5;

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let paragraphs = ABOUT_PARAGRAPHS.iter().fold(
        Column::new().spacing(spacing::MD),
        |column, key| column.push(Text::new(i18n.tr(key)).size(typography::BODY_LG)),
    );

    let skills = SKILLS.chunks(SKILLS_PER_ROW).fold(
        Column::new().spacing(spacing::XS),
        |column, chunk| {
            column.push(chunk.iter().fold(Row::new().spacing(spacing::XS), |row, skill| {
                row.push(
                    Container::new(Text::new(*skill).size(typography::BODY_SM))
                        .padding([spacing::XXS, spacing::SM])
                        .style(styles::container::chip),
                )
            }))
        },
    );

    Column::new()
        .spacing(spacing::LG)
        .push(Text::new(i18n.tr("about-title")).size(typography::TITLE_LG))
        .push(paragraphs)
        .push(Text::new(i18n.tr("about-skills-title")).size(typography::TITLE_SM))
        .push(skills)
        .into()
}
