// SPDX-License-Identifier: MPL-2.0
//! User-facing text checked before the portfolio is revealed.

/// Resolved user-facing strings, keyed by their message id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRegistry {
    entries: Vec<(String, String)>,
}

impl TextRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. A missing translation should be passed as an empty string.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.push((key.into(), text.into()));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that every entry is non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns the keys of all blank entries.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let blank: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, text)| text.trim().is_empty())
            .map(|(key, _)| key.clone())
            .collect();
        if blank.is_empty() {
            Ok(())
        } else {
            Err(blank)
        }
    }
}

impl<K: Into<String>, T: Into<String>> FromIterator<(K, T)> for TextRegistry {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, text)| (key.into(), text.into()))
                .collect(),
        }
    }
}
