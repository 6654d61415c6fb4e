// SPDX-License-Identifier: MPL-2.0
//! Image asset loading.
//!
//! Images bundled under `assets/images/` are embedded into the binary. File
//! and remote assets are read at runtime. All of them are decoded with the
//! `image` crate on a blocking thread before the load resolves.

use crate::application::port::{AssetError, AssetLoader, AssetRef, LoadedAsset};
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::future::Future;

#[derive(RustEmbed)]
#[folder = "assets/images/"]
struct EmbeddedImages;

/// Returns the raw bytes of an embedded image, if bundled.
#[must_use]
pub fn embedded_bytes(name: &str) -> Option<Cow<'static, [u8]>> {
    EmbeddedImages::get(name).map(|file| file.data)
}

/// Decodes encoded image bytes into RGBA pixels.
///
/// # Errors
///
/// Returns [`AssetError::Decode`] if the bytes are not a supported image.
pub fn decode(bytes: &[u8]) -> Result<LoadedAsset, AssetError> {
    let image =
        image_rs::load_from_memory(bytes).map_err(|err| AssetError::Decode(err.to_string()))?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LoadedAsset {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Loads embedded, file and remote images.
#[derive(Debug, Clone)]
pub struct ImageAssetLoader {
    client: reqwest::Client,
}

impl ImageAssetLoader {
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

async fn fetch_bytes(client: reqwest::Client, asset: &AssetRef) -> Result<Vec<u8>, AssetError> {
    match asset {
        AssetRef::Embedded(name) => embedded_bytes(name)
            .map(Cow::into_owned)
            .ok_or_else(|| AssetError::NotFound(asset.to_string())),
        AssetRef::File(path) => tokio::fs::read(path).await.map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound(asset.to_string())
            } else {
                AssetError::Fetch(err.to_string())
            }
        }),
        AssetRef::Remote(url) => {
            let response = client
                .get(url)
                .send()
                .await
                .map_err(|err| AssetError::Fetch(err.to_string()))?;
            if !response.status().is_success() {
                return Err(AssetError::Fetch(format!(
                    "HTTP status: {}",
                    response.status()
                )));
            }
            let bytes = response
                .bytes()
                .await
                .map_err(|err| AssetError::Fetch(err.to_string()))?;
            Ok(bytes.to_vec())
        }
    }
}

impl AssetLoader for ImageAssetLoader {
    fn load(&self, asset: &AssetRef) -> impl Future<Output = Result<LoadedAsset, AssetError>> + Send {
        let client = self.client.clone();
        let asset = asset.clone();
        async move {
            let bytes = fetch_bytes(client, &asset).await?;
            tokio::task::spawn_blocking(move || decode(&bytes))
                .await
                .map_err(|err| AssetError::Decode(err.to_string()))?
        }
    }
}
