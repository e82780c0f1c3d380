//! Sticker Pack Validator
//!
//! A library for validating sticker pack bundles (manifest + image assets)
//! against WhatsApp's content rules before the pack is handed off to the
//! app. Covers structural, string, URL and binary-asset checks with the
//! receiving app's exact thresholds and rejection order.

pub mod delivery;
pub mod loader;
pub mod models;
pub mod parser;
pub mod utils;
pub mod validator;
pub mod wasm;

pub use loader::{AssetLoader, MemoryAssetLoader, PackBundle};
pub use models::{Limits, PackSummary, Sticker, StickerPack, ValidationError};
pub use validator::{validate_pack, ImageInspector, NoopInspector, Validator};

use anyhow::{Context, Result};
use std::path::Path;

/// Main entry point for checking a pack bundle on disk
///
/// Accepts either a bundle directory (`pack.json` plus assets) or a ZIP
/// archive with the same layout. A failed validation surfaces the typed
/// [`ValidationError`] through the error chain.
pub fn check_pack(input_path: &Path, limits: Limits) -> Result<PackSummary> {
    // 1. Load bundle (directory or archive)
    let bundle = load_bundle(input_path)?;

    // 2. Validate against the receiving app's rules
    let validator = Validator::with_limits(limits);
    validator
        .validate_pack(&bundle.pack, bundle.loader.as_ref())
        .with_context(|| format!("pack {} failed validation", bundle.pack.identifier))?;

    // 3. Summarize for the caller
    Ok(PackSummary::of(&bundle.pack))
}

/// Load a bundle from a directory or a ZIP archive, by path kind.
pub fn load_bundle(input_path: &Path) -> Result<PackBundle> {
    if input_path.is_dir() {
        loader::load_bundle_from_directory(input_path)
    } else {
        loader::load_bundle_from_archive(input_path)
    }
}
