// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Screens report what they need through events; this module turns those
//! events into screen transitions, persisted preferences and notifications.

use super::config::Config;
use super::{persistence, Message, Screen};
use crate::infrastructure::HttpContactSender;
use crate::ui::boot_screen::{self, Event as BootEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::portfolio::{self, Event as PortfolioEvent, Portfolio};
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Mutable application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub config: &'a mut Config,
    pub screen: &'a mut Screen,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut notifications::Manager,
    pub contact_sender: &'a mut Option<HttpContactSender>,
}

pub fn handle_boot_message(ctx: &mut UpdateContext<'_>, message: boot_screen::Message) -> Task<Message> {
    let Screen::Boot(boot) = ctx.screen else {
        // Late message from a boot screen that has already been torn down.
        return Task::none();
    };

    let (task, event) = boot.update(message);
    let task = task.map(Message::Boot);

    match event {
        BootEvent::None => task,
        BootEvent::Completed => {
            enter_portfolio(ctx);
            Task::none()
        }
    }
}

/// Replaces the boot screen with the portfolio.
fn enter_portfolio(ctx: &mut UpdateContext<'_>) {
    let Some(sender) = ctx.contact_sender.take() else {
        log::error!("Boot completed without a contact sender; staying on the boot screen");
        return;
    };
    log::info!("Showing portfolio");
    *ctx.screen = Screen::Portfolio(Portfolio::new(sender));
}

pub fn handle_portfolio_message(
    ctx: &mut UpdateContext<'_>,
    message: portfolio::Message,
) -> Task<Message> {
    let Screen::Portfolio(page) = ctx.screen else {
        return Task::none();
    };

    let (task, event) = page.update(message);
    let task = task.map(Message::Portfolio);

    match event {
        PortfolioEvent::None => {}
        PortfolioEvent::ToggleTheme => toggle_theme(ctx),
        PortfolioEvent::LinkCopied => ctx
            .notifications
            .push(Notification::success("notification-link-copied")),
    }

    task
}

fn toggle_theme(ctx: &mut UpdateContext<'_>) {
    *ctx.theme_mode = ctx.theme_mode.toggled();
    if let Some(key) = persistence::persist_theme_mode(ctx.config, *ctx.theme_mode, None) {
        ctx.notifications.push(Notification::warning(key));
    }
}
