//! Bundle extraction from archives and directories

use crate::loader::{AssetLoader, DirectoryAssetLoader, MemoryAssetLoader};
use crate::models::StickerPack;
use crate::parser::pack::parse_pack;
use anyhow::{Context, Result};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipArchive;

pub const MANIFEST_FILE_NAME: &str = "pack.json";

/// A parsed pack together with the byte source for its assets.
pub struct PackBundle {
    pub pack: StickerPack,
    pub loader: Box<dyn AssetLoader>,
}

/// Load a bundle from a directory: `pack.json` plus asset files beside it.
pub fn load_bundle_from_directory(dir: &Path) -> Result<PackBundle> {
    let manifest_path = dir.join(MANIFEST_FILE_NAME);
    let manifest_content = fs::read(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
    let pack = parse_pack(&manifest_content)?;

    Ok(PackBundle {
        pack,
        loader: Box::new(DirectoryAssetLoader::new(dir)),
    })
}

/// Load a bundle from a ZIP archive with the same flat layout.
pub fn load_bundle_from_archive(archive_path: &Path) -> Result<PackBundle> {
    let bytes = fs::read(archive_path)
        .with_context(|| format!("Failed to open {}", archive_path.display()))?;
    load_bundle_from_archive_bytes(&bytes)
}

/// Load a bundle from raw ZIP bytes (the wasm entry point).
pub fn load_bundle_from_archive_bytes(zip_data: &[u8]) -> Result<PackBundle> {
    let cursor = Cursor::new(zip_data);
    let mut archive = ZipArchive::new(cursor).context("Failed to read ZIP archive")?;

    let mut manifest_content = None;
    let mut files: Vec<(PathBuf, Vec<u8>)> = Vec::new();

    // Extract all files
    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .context("Failed to read file from archive")?;

        if file.is_file() {
            let path = PathBuf::from(file.name());
            let mut content = Vec::new();
            std::io::copy(&mut file, &mut content).context("Failed to read file content")?;

            // Save manifest content separately
            if path.file_name().and_then(|n| n.to_str()) == Some(MANIFEST_FILE_NAME) {
                manifest_content = Some(content.clone());
            }

            files.push((path, content));
        }
    }

    // Parse manifest
    let pack = manifest_content
        .ok_or_else(|| anyhow::anyhow!("{} not found in archive", MANIFEST_FILE_NAME))
        .and_then(|content| parse_pack(&content))?;

    let mut loader = MemoryAssetLoader::new();
    for (path, content) in files {
        let name = path.to_string_lossy().into_owned();
        loader.insert(pack.identifier.clone(), name, content);
    }

    Ok(PackBundle {
        pack,
        loader: Box::new(loader),
    })
}

/// Total asset bytes of a directory bundle, manifest excluded. CLI reporting only.
pub fn bundle_asset_bytes(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_str() != Some(MANIFEST_FILE_NAME))
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len() as usize)
        .sum()
}
