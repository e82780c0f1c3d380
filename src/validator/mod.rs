//! Validation engine

pub mod image;
pub mod pack;
pub mod sticker;

pub use image::{ImageInspector, ImageProperties, NoopInspector};

use crate::loader::AssetLoader;
use crate::models::{Limits, Sticker, StickerPack, ValidationError};

/// Validation engine with injectable thresholds and image inspection.
///
/// Owns no state across calls; each `validate_*` call is a pure function of
/// its inputs and the loader's bytes.
pub struct Validator {
    limits: Limits,
    inspector: Box<dyn ImageInspector>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Reference limits, no deep image inspection.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
            inspector: Box::new(NoopInspector),
        }
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits,
            inspector: Box::new(NoopInspector),
        }
    }

    /// Substitute a codec-backed inspector for the deep sticker checks.
    pub fn with_inspector(mut self, inspector: Box<dyn ImageInspector>) -> Self {
        self.inspector = inspector;
        self
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Run every pack-level check, then every sticker, in the fixed order.
    /// First failure wins; no partial results.
    pub fn validate_pack(
        &self,
        pack: &StickerPack,
        loader: &dyn AssetLoader,
    ) -> Result<(), ValidationError> {
        pack::validate_pack(pack, loader, &self.limits, self.inspector.as_ref())
    }

    pub fn validate_sticker(
        &self,
        identifier: &str,
        sticker: &Sticker,
        animated_sticker_pack: bool,
        loader: &dyn AssetLoader,
    ) -> Result<(), ValidationError> {
        sticker::validate_sticker(
            identifier,
            sticker,
            animated_sticker_pack,
            loader,
            &self.limits,
            self.inspector.as_ref(),
        )
    }

    pub fn validate_sticker_asset(
        &self,
        identifier: &str,
        file_name: &str,
        animated_sticker_pack: bool,
        loader: &dyn AssetLoader,
    ) -> Result<(), ValidationError> {
        sticker::validate_sticker_asset(
            identifier,
            file_name,
            animated_sticker_pack,
            loader,
            &self.limits,
            self.inspector.as_ref(),
        )
    }
}

/// Validate a pack with the reference limits and no deep inspection.
pub fn validate_pack(
    pack: &StickerPack,
    loader: &dyn AssetLoader,
) -> Result<(), ValidationError> {
    Validator::new().validate_pack(pack, loader)
}
