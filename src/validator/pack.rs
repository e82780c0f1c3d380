//! Pack-level checks
//!
//! The check order is fixed and meaningful: cheap string checks first, then
//! URL and email syntax, then the tray image bytes, then the sticker count,
//! then every sticker in sequence. The receiving app rejects in this order
//! and error-message parity depends on it. First failure wins.

use crate::loader::AssetLoader;
use crate::models::{
    Limits, StickerPack, ValidationError, APPLE_STORE_DOMAIN, KB_IN_BYTES, PLAY_STORE_DOMAIN,
};
use crate::utils::helpers::{check_string_validity, display_file_name, is_valid_email};
use crate::utils::url::{is_http_or_https, parse_absolute_url, url_in_domain};
use crate::validator::image::ImageInspector;
use crate::validator::sticker::validate_sticker;

pub fn validate_pack(
    pack: &StickerPack,
    loader: &dyn AssetLoader,
    limits: &Limits,
    inspector: &dyn ImageInspector,
) -> Result<(), ValidationError> {
    if pack.identifier.is_empty() {
        return Err(ValidationError::EmptyString(
            "sticker pack identifier is empty".to_string(),
        ));
    }
    if pack.identifier.chars().count() > limits.char_count_max {
        return Err(ValidationError::StringTooLong(format!(
            "sticker pack identifier cannot exceed {} characters",
            limits.char_count_max
        )));
    }
    check_string_validity(&pack.identifier)?;

    if pack.publisher.is_empty() {
        return Err(ValidationError::EmptyString(format!(
            "sticker pack publisher is empty, sticker pack identifier: {}",
            pack.identifier
        )));
    }
    if pack.publisher.chars().count() > limits.char_count_max {
        return Err(ValidationError::StringTooLong(format!(
            "sticker pack publisher cannot exceed {} characters, sticker pack identifier: {}",
            limits.char_count_max, pack.identifier
        )));
    }
    if pack.name.is_empty() {
        return Err(ValidationError::EmptyString(format!(
            "sticker pack name is empty, sticker pack identifier: {}",
            pack.identifier
        )));
    }
    if pack.name.chars().count() > limits.char_count_max {
        return Err(ValidationError::StringTooLong(format!(
            "sticker pack name cannot exceed {} characters, sticker pack identifier: {}",
            limits.char_count_max, pack.identifier
        )));
    }
    if pack.tray_image_file.is_empty() {
        return Err(ValidationError::EmptyString(format!(
            "sticker pack tray id is empty, sticker pack identifier: {}",
            pack.identifier
        )));
    }

    check_store_link(
        present(&pack.android_play_store_link),
        PLAY_STORE_DOMAIN,
        "android play store link",
        "android play store link should use play store domain",
    )?;
    check_store_link(
        present(&pack.ios_app_store_link),
        APPLE_STORE_DOMAIN,
        "ios app store link",
        "iOS app store link should use app store domain",
    )?;

    check_optional_website(
        present(&pack.license_agreement_website),
        "license agreement link",
    )?;
    check_optional_website(present(&pack.privacy_policy_website), "privacy policy link")?;
    check_optional_website(
        present(&pack.publisher_website),
        "publisher website link",
    )?;

    if let Some(email) = present(&pack.publisher_email) {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail(format!(
                "publisher email does not seem valid, email is: {}",
                email
            )));
        }
    }

    validate_tray_image(pack, loader, limits)?;

    if pack.stickers.len() < limits.sticker_count_min
        || pack.stickers.len() > limits.sticker_count_max
    {
        return Err(ValidationError::OutsideAllowableRange(format!(
            "sticker pack sticker count should be between {} to {} inclusive, it currently has {}, sticker pack identifier: {}",
            limits.sticker_count_min,
            limits.sticker_count_max,
            pack.stickers.len(),
            pack.identifier
        )));
    }

    for sticker in &pack.stickers {
        validate_sticker(
            &pack.identifier,
            sticker,
            pack.animated_sticker_pack,
            loader,
            limits,
            inspector,
        )?;
    }

    Ok(())
}

/// Optional fields count as absent when empty.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn check_optional_website(url: Option<&str>, label: &str) -> Result<(), ValidationError> {
    if let Some(url) = url {
        let parsed = parse_absolute_url(url)?;
        if !is_http_or_https(&parsed) {
            return Err(ValidationError::InvalidUrl(format!(
                "Make sure to include http or https in url links, {} is not a valid url: {}",
                label, url
            )));
        }
    }
    Ok(())
}

fn check_store_link(
    url: Option<&str>,
    domain: &str,
    label: &str,
    domain_message: &str,
) -> Result<(), ValidationError> {
    if let Some(url) = url {
        check_optional_website(Some(url), label)?;
        if !url_in_domain(url, domain)? {
            return Err(ValidationError::InvalidUrl(format!(
                "{}: {}",
                domain_message, domain
            )));
        }
    }
    Ok(())
}

/// Byte-size and decoded-dimension checks for the pack's tray icon.
fn validate_tray_image(
    pack: &StickerPack,
    loader: &dyn AssetLoader,
    limits: &Limits,
) -> Result<(), ValidationError> {
    let bytes = loader
        .fetch(&pack.identifier, &pack.tray_image_file)
        .map_err(|_| {
            ValidationError::FileNotFound(format!(
                "Cannot open tray image, {}, sticker pack identifier: {}",
                display_file_name(&pack.tray_image_file),
                pack.identifier
            ))
        })?;

    if bytes.len() > limits.tray_image_limit_bytes() {
        return Err(ValidationError::IncorrectImageSize(format!(
            "tray image should be less than {} KB, current file is {} KB, tray image file: {}, sticker pack identifier: {}",
            limits.tray_image_file_limit_kb,
            bytes.len() / KB_IN_BYTES,
            pack.tray_image_file,
            pack.identifier
        )));
    }

    let decoded = image::load_from_memory(&bytes).map_err(|e| {
        ValidationError::UnsupportedImageFormat(format!(
            "Cannot decode tray image, tray image file: {}, sticker pack identifier: {}: {}",
            pack.tray_image_file, pack.identifier, e
        ))
    })?;

    if decoded.height() > limits.tray_dimension_max || decoded.height() < limits.tray_dimension_min
    {
        return Err(ValidationError::IncorrectImageSize(format!(
            "tray image height should be between {} and {} pixels, current tray image height is {}, tray image file: {}, sticker pack identifier: {}",
            limits.tray_dimension_min,
            limits.tray_dimension_max,
            decoded.height(),
            pack.tray_image_file,
            pack.identifier
        )));
    }
    if decoded.width() > limits.tray_dimension_max || decoded.width() < limits.tray_dimension_min {
        return Err(ValidationError::IncorrectImageSize(format!(
            "tray image width should be between {} and {} pixels, current tray image width is {}, tray image file: {}, sticker pack identifier: {}",
            limits.tray_dimension_min,
            limits.tray_dimension_max,
            decoded.width(),
            pack.tray_image_file,
            pack.identifier
        )));
    }

    Ok(())
}
