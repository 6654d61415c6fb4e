// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.

use super::config::{self, Config};
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Stores `mode` in `config` and writes the settings file.
///
/// `base_dir` overrides the config directory (tests). Returns the
/// notification key to show when the file could not be written; the
/// in-memory choice is kept either way.
pub fn persist_theme_mode(
    config: &mut Config,
    mode: ThemeMode,
    base_dir: Option<PathBuf>,
) -> Option<&'static str> {
    config.general.theme_mode = mode;

    match config::save_with_override(config, base_dir) {
        Ok(()) => None,
        Err(error) => {
            log::warn!("Failed to save theme preference: {error}");
            Some("notification-config-save-error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn theme_choice_is_written_to_settings() {
        let dir = tempdir().expect("temp dir");
        let mut config = Config::default();

        let warning = persist_theme_mode(&mut config, ThemeMode::Dark, Some(dir.path().to_path_buf()));
        assert_eq!(warning, None);

        let (reloaded, load_warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(load_warning, None);
        assert_eq!(reloaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unwritable_directory_yields_a_warning() {
        let dir = tempdir().expect("temp dir");
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").expect("write blocker");

        let mut config = Config::default();
        let warning = persist_theme_mode(&mut config, ThemeMode::Light, Some(blocker));

        assert_eq!(warning, Some("notification-config-save-error"));
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }
}
