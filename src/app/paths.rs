// SPDX-License-Identifier: MPL-2.0
//! Location of `settings.toml`.
//!
//! The first of these wins:
//! 1. a directory passed explicitly (tests)
//! 2. `--config-dir`, registered once through [`init_cli_overrides`]
//! 3. the `FOLIO_CONFIG_DIR` environment variable, when non-empty
//! 4. `Folio/` under the platform config directory (`dirs::config_dir`)

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "Folio";

pub const ENV_CONFIG_DIR: &str = "FOLIO_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Registers the `--config-dir` argument. Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    let Some(dir) = config_dir else {
        return;
    };
    if CLI_CONFIG_DIR.set(PathBuf::from(dir)).is_err() {
        log::debug!("--config-dir already registered; keeping the first value");
    }
}

/// Resolves the config directory, preferring `explicit` when given.
///
/// Returns `None` only when no override is set and the platform has no
/// config directory.
#[must_use]
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(|| CLI_CONFIG_DIR.get().cloned())
        .or_else(env_config_dir)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME)))
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
