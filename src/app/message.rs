// SPDX-License-Identifier: MPL-2.0
//! Root message type and launch flags.

use crate::ui::boot_screen;
use crate::ui::notifications;
use crate::ui::portfolio;
use std::time::Instant;

/// Everything `App::update` reacts to. Screen messages are wrapped so the
/// root can route them to whichever screen is active.
#[derive(Debug, Clone)]
pub enum Message {
    Boot(boot_screen::Message),
    Portfolio(portfolio::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// `--lang`, a BCP-47 tag such as `en-US`.
    pub lang: Option<String>,
    /// `--config-dir`. Saving relies on it having been registered with
    /// [`paths::init_cli_overrides`](super::paths::init_cli_overrides) too.
    pub config_dir: Option<String>,
}
