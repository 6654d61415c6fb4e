// SPDX-License-Identifier: MPL-2.0
//! Asset loading port definition.
//!
//! This module defines the [`AssetLoader`] trait used to preload the splash
//! image before the portfolio is revealed. A load only succeeds once the image
//! has been fully decoded to pixels, so a corrupt file fails the boot instead
//! of rendering a broken placeholder later.

use std::fmt;
use std::future::Future;
use std::path::PathBuf;

// =============================================================================
// AssetRef
// =============================================================================

/// Location of an image asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRef {
    /// Asset bundled into the binary, addressed by its path inside the
    /// embedded asset folder (e.g. `projects/theforge-desktop.png`).
    Embedded(String),

    /// Asset on the local filesystem.
    File(PathBuf),

    /// Asset fetched over HTTP(S).
    Remote(String),
}

impl AssetRef {
    /// Parses a configured asset location.
    ///
    /// `http://` and `https://` prefixes select [`AssetRef::Remote`],
    /// `embedded:` selects [`AssetRef::Embedded`], anything else is a file path.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            AssetRef::Remote(value.to_string())
        } else if let Some(name) = value.strip_prefix("embedded:") {
            AssetRef::Embedded(name.to_string())
        } else {
            AssetRef::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetRef::Embedded(name) => write!(f, "embedded:{name}"),
            AssetRef::File(path) => write!(f, "{}", path.display()),
            AssetRef::Remote(url) => write!(f, "{url}"),
        }
    }
}

// =============================================================================
// AssetError
// =============================================================================

/// Errors that can occur while loading an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// No asset exists at the given location.
    NotFound(String),

    /// The bytes could not be fetched or read.
    Fetch(String),

    /// The bytes were read but are not a decodable image.
    Decode(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotFound(location) => write!(f, "Asset not found: {location}"),
            AssetError::Fetch(msg) => write!(f, "Failed to fetch asset: {msg}"),
            AssetError::Decode(msg) => write!(f, "Failed to decode asset: {msg}"),
        }
    }
}

impl std::error::Error for AssetError {}

// =============================================================================
// LoadedAsset
// =============================================================================

/// A fully decoded image, ready to hand to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedAsset {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 pixel data, row-major.
    pub rgba: Vec<u8>,
}

// =============================================================================
// AssetLoader Trait
// =============================================================================

/// Trait for loading and decoding image assets.
pub trait AssetLoader: Send + Sync {
    /// Loads the asset and decodes it to pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if the asset cannot be found, read, or decoded.
    fn load(&self, asset: &AssetRef) -> impl Future<Output = Result<LoadedAsset, AssetError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_detects_remote_urls() {
        assert_eq!(
            AssetRef::parse("https://example.com/a.png"),
            AssetRef::Remote("https://example.com/a.png".into())
        );
    }

    #[test]
    fn parse_detects_embedded_prefix() {
        assert_eq!(
            AssetRef::parse("embedded:projects/theforge-desktop.png"),
            AssetRef::Embedded("projects/theforge-desktop.png".into())
        );
    }

    #[test]
    fn parse_falls_back_to_file_path() {
        assert_eq!(
            AssetRef::parse(" /tmp/splash.png "),
            AssetRef::File(PathBuf::from("/tmp/splash.png"))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let asset = AssetRef::Embedded("projects/aurelia-desktop.png".into());
        assert_eq!(AssetRef::parse(&asset.to_string()), asset);
    }

    #[test]
    fn error_display_names_the_location() {
        let err = AssetError::NotFound("embedded:missing.png".into());
        assert!(err.to_string().contains("missing.png"));
    }
}
