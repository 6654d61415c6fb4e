// SPDX-License-Identifier: MPL-2.0
//! Contact section: social links and the message form.

use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::contact::{ContactForm, Feedback, Field, SubmitState};
use crate::content::SOCIAL_LINKS;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text, text_input, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

pub fn view<'a>(form: &ContactForm, i18n: &I18n) -> Element<'a, Message> {
    let links = SOCIAL_LINKS.iter().fold(Column::new().spacing(spacing::XS), |column, link| {
        column.push(
            button(Text::new(link.name).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::pill)
                .on_press(Message::CopyLink(link.url)),
        )
    });

    let connect = Column::new()
        .spacing(spacing::MD)
        .width(Length::FillPortion(1))
        .push(Text::new(i18n.tr("contact-connect-title")).size(typography::TITLE_SM))
        .push(links);

    let mut form_column = Column::new()
        .spacing(spacing::SM)
        .width(Length::FillPortion(2))
        .push(field(form, Field::Name, "contact-name-label", "contact-name-placeholder", i18n))
        .push(field(form, Field::Email, "contact-email-label", "contact-email-placeholder", i18n))
        .push(field(form, Field::Message, "contact-message-label", "contact-message-placeholder", i18n))
        .push(submit_button(form, i18n));
    if let Some(feedback) = feedback(form.state(), i18n) {
        form_column = form_column.push(feedback);
    }

    Column::new()
        .spacing(spacing::LG)
        .push(Text::new(i18n.tr("contact-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("contact-subtitle")).size(typography::BODY_LG))
        .push(
            Container::new(Row::new().spacing(spacing::XL).push(connect).push(form_column))
                .padding(spacing::LG)
                .style(styles::container::card),
        )
        .into()
}

fn field<'a>(
    form: &ContactForm,
    field: Field,
    label_key: &str,
    placeholder_key: &str,
    i18n: &I18n,
) -> Element<'a, Message> {
    let mut input = text_input(&i18n.tr(placeholder_key), form.value(field))
        .padding(spacing::SM)
        .size(typography::BODY)
        .style(styles::text_input::field);
    if !form.is_submitting() {
        input = input.on_input(move |value| Message::Edit(field, value));
    }
    if field == Field::Message {
        input = input.width(Length::Fill);
    }

    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr(label_key)).size(typography::BODY_SM))
        .push(
            Container::new(input).height(if field == Field::Message {
                Length::Fixed(sizing::MESSAGE_INPUT_HEIGHT)
            } else {
                Length::Shrink
            }),
        )
        .into()
}

fn submit_button<'a>(form: &ContactForm, i18n: &I18n) -> Element<'a, Message> {
    let label = if form.is_submitting() {
        i18n.tr("contact-sending")
    } else {
        i18n.tr("contact-send")
    };

    let button = button(Text::new(label).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);
    if form.is_submitting() {
        button.into()
    } else {
        button.on_press(Message::Submit).into()
    }
}

fn feedback<'a>(state: &SubmitState, i18n: &I18n) -> Option<Element<'a, Message>> {
    let (feedback, success) = match state {
        SubmitState::Idle | SubmitState::Submitting => return None,
        SubmitState::Sent(feedback) => (feedback, true),
        SubmitState::Failed(feedback) => (feedback, false),
    };
    let message = match feedback {
        Feedback::Key(key) => i18n.tr(key),
        Feedback::Server(message) => message.clone(),
    };

    Some(
        Text::new(message)
            .size(typography::BODY)
            .style(move |theme: &Theme| {
                let colors = ColorScheme::for_theme(theme);
                text::Style {
                    color: Some(if success { colors.success } else { colors.error }),
                }
            })
            .into(),
    )
}
