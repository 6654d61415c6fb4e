// SPDX-License-Identifier: MPL-2.0
//! Boot sequence without a window.
//!
//! Used by `folio --check` to verify from a terminal or CI job that the
//! backend answers, the text catalog is complete, and the splash asset
//! decodes, with the same adapters and settings as the GUI.

use super::{live_pipeline, BootError, BootUpdate, CancellationToken, RunOutcome, StatusLine};
use crate::app::config::Config;
use crate::app::i18n::fluent::I18n;
use crate::content;
use crate::error::Result;
use std::collections::HashMap;

const REPORTED_STATUSES: [StatusLine; 5] = [
    StatusLine::Loading,
    StatusLine::Ready,
    StatusLine::Failed(BootError::TransportUnreachable),
    StatusLine::Failed(BootError::ContentValidationFailed),
    StatusLine::Failed(BootError::AssetLoadFailed),
];

/// Runs the boot sequence to completion on a fresh tokio runtime.
///
/// Every update is logged. Status lines are also printed in the active
/// locale so the check is readable without `RUST_LOG`; they are resolved up
/// front because the emitter runs on the runtime's worker threads.
///
/// # Errors
///
/// Returns an error if the runtime or the HTTP client cannot be created.
pub fn run(config: &Config, i18n: &I18n) -> Result<RunOutcome> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let client = crate::infrastructure::http::build_client()?;
    let pipeline = live_pipeline(client, content::text_registry(i18n), config.boot.settings());
    let token = CancellationToken::default();
    let messages: HashMap<&'static str, String> = REPORTED_STATUSES
        .iter()
        .map(|status| (status.i18n_key(), i18n.tr(status.i18n_key())))
        .collect();
    let message = |key: &'static str| messages.get(key).cloned().unwrap_or_else(|| key.to_string());

    let outcome = runtime.block_on(pipeline.run(&token, |update| {
        log::debug!("{update:?}");
        match update {
            BootUpdate::Status(status) => println!("{}", message(status.i18n_key())),
            BootUpdate::Failed(error) => eprintln!("{}", message(error.i18n_key())),
            BootUpdate::Progress(_) | BootUpdate::Exiting | BootUpdate::Completed => {}
        }
    }));

    Ok(outcome)
}
