//! Sticker pack data structures

use serde::{Deserialize, Serialize};

/// A sticker pack as described by its bundle manifest.
///
/// Constructed by callers (parser, UI, tests) before validation; the
/// validator only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StickerPack {
    pub identifier: String,
    pub name: String,
    pub publisher: String,

    /// Asset handle for the pack's tray icon.
    pub tray_image_file: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_policy_website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_agreement_website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_play_store_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_app_store_link: Option<String>,

    #[serde(default)]
    pub animated_sticker_pack: bool,

    /// Version tag forwarded in the hand-off payload.
    #[serde(default = "default_image_data_version")]
    pub image_data_version: String,

    #[serde(default)]
    pub stickers: Vec<Sticker>,
}

fn default_image_data_version() -> String {
    "1".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sticker {
    /// Asset handle for the sticker image; its only identity within a pack.
    pub image_file: String,

    #[serde(default)]
    pub emojis: Vec<String>,
}

impl Sticker {
    pub fn new(image_file: impl Into<String>, emojis: Vec<String>) -> Self {
        Self {
            image_file: image_file.into(),
            emojis,
        }
    }
}

/// Lightweight summary of a loaded pack, for CLI and wasm reporting.
#[derive(Debug, Clone, Serialize)]
pub struct PackSummary {
    pub identifier: String,
    pub name: String,
    pub publisher: String,
    pub image_data_version: String,
    pub animated: bool,
    pub sticker_count: usize,
}

impl PackSummary {
    pub fn of(pack: &StickerPack) -> Self {
        Self {
            identifier: pack.identifier.clone(),
            name: pack.name.clone(),
            publisher: pack.publisher.clone(),
            image_data_version: pack.image_data_version.clone(),
            animated: pack.animated_sticker_pack,
            sticker_count: pack.stickers.len(),
        }
    }
}
