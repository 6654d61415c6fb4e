// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::boot_screen::BootScreen;
use crate::ui::portfolio::Portfolio;

/// The active screen. Leaving the boot screen drops it, which cancels the
/// boot pipeline and its timers.
#[derive(Debug)]
pub enum Screen {
    Boot(BootScreen),
    Portfolio(Portfolio),
}
