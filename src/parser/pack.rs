//! Pack manifest parsing functionality

use crate::models::StickerPack;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse a pack manifest from bytes
pub fn parse_pack(content: &[u8]) -> Result<StickerPack> {
    // Convert bytes to string for json5 parsing
    let content_str = std::str::from_utf8(content).context("Invalid UTF-8 in pack manifest")?;

    // json5 tolerates comments in hand-maintained manifests
    let pack: StickerPack =
        json5::from_str(content_str).context("Failed to parse pack manifest")?;

    Ok(pack)
}

/// Parse a pack manifest from a file path
pub fn parse_pack_from_file(path: impl AsRef<Path>) -> Result<StickerPack> {
    let content = std::fs::read(path.as_ref()).context("Failed to read pack manifest")?;
    parse_pack(&content)
}

/// Parse a pack manifest from a string
pub fn parse_pack_from_str(content: &str) -> Result<StickerPack> {
    parse_pack(content.as_bytes())
}
