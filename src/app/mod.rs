// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns localization, settings and the active screen. All
//! state changes go through `App::update` on the Iced event loop: pipeline
//! updates, timers and user input alike.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::boot::{self, BootError};
use crate::content;
use crate::infrastructure::{http, HttpContactSender};
use crate::ui::boot_screen::BootScreen;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    screen: Screen,
    theme_mode: ThemeMode,
    /// Handed to the portfolio when the boot sequence completes.
    contact_sender: Option<HttpContactSender>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and localization, then starts the boot sequence.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(std::path::PathBuf::from));
        let i18n = I18n::new(flags.lang, &config);
        let theme_mode = config.general.theme_mode;

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let (screen, contact_sender, task) = match http::build_client() {
            Ok(client) => {
                let sender = HttpContactSender::new(client.clone(), config.contact.endpoint());
                let pipeline = boot::live_pipeline(
                    client,
                    content::text_registry(&i18n),
                    config.boot.settings(),
                );
                let (boot_screen, task) = BootScreen::start(pipeline);
                (boot_screen, Some(sender), task.map(Message::Boot))
            }
            Err(error) => {
                log::error!("Cannot create HTTP client: {error}");
                (
                    BootScreen::failed(BootError::TransportUnreachable),
                    None,
                    Task::none(),
                )
            }
        };

        let app = App {
            i18n,
            config,
            screen: Screen::Boot(screen),
            theme_mode,
            contact_sender,
            notifications,
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tip_subscription(&self.screen, self.config.boot.tip_rotation()),
            subscription::create_frame_subscription(&self.screen),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &mut self.config,
            screen: &mut self.screen,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
            contact_sender: &mut self.contact_sender,
        };

        match message {
            Message::Boot(boot_message) => update::handle_boot_message(&mut ctx, boot_message),
            Message::Portfolio(page_message) => {
                update::handle_portfolio_message(&mut ctx, page_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: &self.screen,
            notifications: &self.notifications,
            is_dark: self.theme_mode.is_dark(),
        })
    }
}
