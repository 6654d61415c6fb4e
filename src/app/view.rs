// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{Message, Screen};
use crate::app::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::portfolio::ViewContext as PortfolioViewContext;
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a Screen,
    pub notifications: &'a notifications::Manager,
    pub is_dark: bool,
}

/// Renders the active screen with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Boot(boot) => boot.view(ctx.i18n).map(Message::Boot),
        Screen::Portfolio(page) => page
            .view(PortfolioViewContext {
                i18n: ctx.i18n,
                is_dark: ctx.is_dark,
            })
            .map(Message::Portfolio),
    };

    let toasts = notifications::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(current_view)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
