// SPDX-License-Identifier: MPL-2.0
//! Projects showcase.

use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::content::{Project, PROJECTS};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{ContentFit, Element, Length};

pub fn view<'a>(previews: &[Option<Handle>], i18n: &I18n) -> Element<'a, Message> {
    let cards = PROJECTS
        .iter()
        .zip(previews)
        .fold(Row::new().spacing(spacing::LG), |row, (project, preview)| {
            row.push(card(project, preview.clone(), i18n))
        });

    Column::new()
        .spacing(spacing::LG)
        .push(Text::new(i18n.tr("projects-title")).size(typography::TITLE_LG))
        .push(cards)
        .into()
}

fn card<'a>(project: &'static Project, preview: Option<Handle>, i18n: &I18n) -> Element<'a, Message> {
    let mut content = Column::new().spacing(spacing::SM);

    if let Some(handle) = preview {
        content = content.push(
            Image::new(handle)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::PROJECT_PREVIEW_HEIGHT))
                .content_fit(ContentFit::Cover),
        );
    }

    let tags = project.tags.iter().fold(Row::new().spacing(spacing::XXS), |row, tag| {
        row.push(
            Container::new(Text::new(*tag).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::chip),
        )
    });

    content = content
        .push(Text::new(project.title).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr(project.description_key)).size(typography::BODY))
        .push(tags)
        .push(
            button(Text::new(i18n.tr("projects-copy-link")).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::pill)
                .on_press(Message::CopyLink(project.url)),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::PROJECT_CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}
