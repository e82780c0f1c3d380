//! Asset byte sources for pack bundles

pub mod extractor;

use crate::utils::helpers::{ASSET_DIR_MARKER, FILES_DIR_MARKER};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

pub use extractor::{
    load_bundle_from_archive, load_bundle_from_archive_bytes, load_bundle_from_directory,
    PackBundle,
};

/// Resolves a (pack identifier, asset handle) pair to raw bytes.
///
/// Implementations may read a directory, an archive or an in-memory map;
/// the validator only requires that the same pair yields the same bytes
/// within one validation call. Missing or unreadable assets surface as
/// `io::Error`.
pub trait AssetLoader {
    fn fetch(&self, identifier: &str, file_name: &str) -> io::Result<Vec<u8>>;
}

/// Decode the internal path markers an asset handle may carry in place of
/// path separators.
fn decode_handle(file_name: &str) -> String {
    file_name
        .replace(ASSET_DIR_MARKER, "/")
        .replace(FILES_DIR_MARKER, "/")
}

/// In-memory loader keyed by the full (identifier, file name) pair.
///
/// Backs the wasm surface and most tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryAssetLoader {
    assets: HashMap<(String, String), Vec<u8>>,
}

impl MemoryAssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        identifier: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) {
        self.assets.insert((identifier.into(), file_name.into()), bytes);
    }
}

impl AssetLoader for MemoryAssetLoader {
    fn fetch(&self, identifier: &str, file_name: &str) -> io::Result<Vec<u8>> {
        self.assets
            .get(&(identifier.to_string(), file_name.to_string()))
            .cloned()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no asset {} in pack {}", file_name, identifier),
                )
            })
    }
}

/// Loader over a flat bundle directory: assets live beside the manifest,
/// so the pack identifier is not part of the on-disk path.
#[derive(Debug, Clone)]
pub struct DirectoryAssetLoader {
    root: PathBuf,
}

impl DirectoryAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetLoader for DirectoryAssetLoader {
    fn fetch(&self, _identifier: &str, file_name: &str) -> io::Result<Vec<u8>> {
        let decoded = decode_handle(file_name);
        // a stray leading separator would make join() discard the root
        std::fs::read(self.root.join(decoded.trim_start_matches('/')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_loader_roundtrip() {
        let mut loader = MemoryAssetLoader::new();
        loader.insert("pack", "01.webp", vec![1, 2, 3]);

        assert_eq!(loader.fetch("pack", "01.webp").unwrap(), vec![1, 2, 3]);
        let err = loader.fetch("pack", "missing.webp").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_memory_loader_keys_on_identifier_too() {
        let mut loader = MemoryAssetLoader::new();
        loader.insert("pack_a", "01.webp", vec![1]);
        assert!(loader.fetch("pack_b", "01.webp").is_err());
    }

    #[test]
    fn test_directory_loader_decodes_markers() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/tray.png"), b"png").unwrap();

        let loader = DirectoryAssetLoader::new(dir.path());
        let bytes = loader.fetch("pack", "assetsmzn_ad_tray.png").unwrap();
        assert_eq!(bytes, b"png");
    }
}
