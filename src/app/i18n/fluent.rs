// SPDX-License-Identifier: MPL-2.0
//! Fluent catalogs embedded in the binary.
//!
//! Every `assets/i18n/<locale>.ftl` file becomes one bundle. The active
//! locale is the first available one among `--lang`, the `language`
//! setting and the OS locale, falling back to `en-US`.

use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Catalogs;

const FALLBACK_LOCALE: LanguageIdentifier = langid!("en-US");

type Bundle = FluentBundle<FluentResource>;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, Bundle>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current_locale", &self.current_locale)
            .field("locales", &self.bundles.len())
            .finish()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let bundles: HashMap<LanguageIdentifier, Bundle> = Catalogs::iter()
            .filter_map(|file| {
                let locale = file.strip_suffix(".ftl")?.parse::<LanguageIdentifier>().ok()?;
                let source = Catalogs::get(&file)?;
                let source = String::from_utf8_lossy(&source.data).into_owned();
                let bundle = build_bundle(&locale, source)?;
                Some((locale, bundle))
            })
            .collect();

        let candidates = [
            cli_lang,
            config.general.language.clone(),
            sys_locale::get_locale(),
        ];
        let current_locale = pick_locale(candidates, |locale| bundles.contains_key(locale))
            .unwrap_or(FALLBACK_LOCALE);
        log::debug!("Using locale {current_locale}");

        Self {
            bundles,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Resolves `key`, or `None` when the message is absent or fails to format.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.format(key, None)
    }

    /// Resolves `key`, marking missing messages visibly.
    pub fn tr(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| missing(key))
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, FluentValue<'_>)]) -> String {
        let args: FluentArgs<'_> = args
            .iter()
            .map(|(name, value)| (*name, value.clone()))
            .collect();
        self.format(key, Some(&args)).unwrap_or_else(|| missing(key))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> Option<String> {
        let bundle = self.bundles.get(&self.current_locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = Vec::new();
        let text = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(text.into_owned())
        } else {
            log::warn!("Formatting {key} failed: {errors:?}");
            None
        }
    }
}

fn missing(key: &str) -> String {
    format!("MISSING: {key}")
}

fn build_bundle(locale: &LanguageIdentifier, source: String) -> Option<Bundle> {
    let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, errors)| {
        log::warn!("{locale}.ftl has {} syntax errors", errors.len());
        partial
    });
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Unicode isolation marks would show up in plain labels.
    bundle.set_use_isolating(false);
    match bundle.add_resource(resource) {
        Ok(()) => Some(bundle),
        Err(errors) => {
            log::warn!("Skipping {locale}.ftl: {errors:?}");
            None
        }
    }
}

/// First candidate that parses and is accepted by `is_available`.
fn pick_locale(
    candidates: impl IntoIterator<Item = Option<String>>,
    is_available: impl Fn(&LanguageIdentifier) -> bool,
) -> Option<LanguageIdentifier> {
    candidates
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find(|locale| is_available(locale))
}
