//! Hand-off payload construction

use crate::models::StickerPack;
use serde_json::Value;

/// Build the payload map the platform hand-off call expects.
///
/// Field names are the host contract; only validated packs should be
/// handed off, but nothing here re-checks that.
pub fn payload_from_pack(pack: &StickerPack) -> Value {
    serde_json::json!({
        "identifier": pack.identifier,
        "name": pack.name,
        "publisher": pack.publisher,
        "trayImageFileName": pack.tray_image_file,
        "publisherWebsite": pack.publisher_website,
        "privacyPolicyWebsite": pack.privacy_policy_website,
        "licenseAgreementWebsite": pack.license_agreement_website,
        "imageDataVersion": pack.image_data_version,
        "animatedStickerPack": pack.animated_sticker_pack,
        "stickers": pack.stickers.iter().map(|sticker| {
            serde_json::json!({
                "imageFileName": sticker.image_file,
                "emojis": sticker.emojis,
            })
        }).collect::<Vec<_>>(),
    })
}
