// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the application.

use super::{Message, Screen};
use crate::infrastructure::clock::FRAME_INTERVAL;
use crate::ui::boot_screen;
use crate::ui::portfolio;
use iced::{time, Subscription};
use std::time::Duration;

/// Tip rotation while the boot screen is up.
///
/// The subscription disappears with the boot screen, which stops the timer.
pub fn create_tip_subscription(screen: &Screen, rotation: Duration) -> Subscription<Message> {
    match screen {
        Screen::Boot(boot) if boot.is_active() => {
            time::every(rotation).map(|_| Message::Boot(boot_screen::Message::RotateTip))
        }
        Screen::Boot(_) | Screen::Portfolio(_) => Subscription::none(),
    }
}

/// Frame ticks while the stat counters animate.
pub fn create_frame_subscription(screen: &Screen) -> Subscription<Message> {
    match screen {
        Screen::Portfolio(page) if page.is_animating() => time::every(FRAME_INTERVAL)
            .map(|at| Message::Portfolio(portfolio::Message::Tick(at))),
        Screen::Boot(_) | Screen::Portfolio(_) => Subscription::none(),
    }
}

/// Periodic tick for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
