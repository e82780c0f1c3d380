//! Per-sticker and sticker-asset checks

use crate::loader::AssetLoader;
use crate::models::{Limits, Sticker, ValidationError, KB_IN_BYTES};
use crate::utils::helpers::display_file_name;
use crate::validator::image::ImageInspector;

/// Validate one sticker of a pack: emoji bounds, filename, then the asset.
///
/// Zero emojis raises the same `TooManyEmojis` kind as too many; the
/// receiving app does not distinguish the two directions and consumers
/// pattern-match on the single code.
pub fn validate_sticker(
    identifier: &str,
    sticker: &Sticker,
    animated_sticker_pack: bool,
    loader: &dyn AssetLoader,
    limits: &Limits,
    inspector: &dyn ImageInspector,
) -> Result<(), ValidationError> {
    if sticker.emojis.len() > limits.emoji_max {
        return Err(ValidationError::TooManyEmojis(format!(
            "emoji count exceed limit, sticker pack identifier: {}, filename: {}",
            identifier, sticker.image_file
        )));
    }
    if sticker.emojis.len() < limits.emoji_min {
        return Err(ValidationError::TooManyEmojis(format!(
            "To provide best user experience, please associate at least 1 emoji to this sticker, sticker pack identifier: {}, filename: {}",
            identifier, sticker.image_file
        )));
    }
    if sticker.image_file.is_empty() {
        return Err(ValidationError::EmptyString(format!(
            "no file path for sticker, sticker pack identifier: {}",
            identifier
        )));
    }
    validate_sticker_asset(
        identifier,
        &sticker.image_file,
        animated_sticker_pack,
        loader,
        limits,
        inspector,
    )
}

/// Load a sticker asset and enforce the byte caps, then hand the bytes to
/// the inspector for the optional deep checks.
pub fn validate_sticker_asset(
    identifier: &str,
    file_name: &str,
    animated_sticker_pack: bool,
    loader: &dyn AssetLoader,
    limits: &Limits,
    inspector: &dyn ImageInspector,
) -> Result<(), ValidationError> {
    let bytes = loader.fetch(identifier, file_name).map_err(|e| {
        ValidationError::FileNotFound(format!(
            "cannot open sticker file: sticker pack identifier: {}, filename: {}\n\n{}",
            identifier,
            display_file_name(file_name),
            e
        ))
    })?;

    if !animated_sticker_pack && bytes.len() > limits.static_sticker_limit_bytes() {
        return Err(ValidationError::ImageTooBig(format!(
            "static sticker should be less than {}KB, current file is {} KB, sticker pack identifier: {}, filename: {}",
            limits.static_sticker_file_limit_kb,
            bytes.len() / KB_IN_BYTES,
            identifier,
            file_name
        )));
    }
    if animated_sticker_pack && bytes.len() > limits.animated_sticker_limit_bytes() {
        return Err(ValidationError::ImageTooBig(format!(
            "animated sticker should be less than {}KB, current file is {} KB, sticker pack identifier: {}, filename: {}",
            limits.animated_sticker_file_limit_kb,
            bytes.len() / KB_IN_BYTES,
            identifier,
            file_name
        )));
    }

    inspect_sticker_image(
        identifier,
        file_name,
        &bytes,
        animated_sticker_pack,
        limits,
        inspector,
    )
}

/// Deep checks over the inspector's findings. A no-op inspector reports
/// nothing and the whole block is skipped.
fn inspect_sticker_image(
    identifier: &str,
    file_name: &str,
    bytes: &[u8],
    animated_sticker_pack: bool,
    limits: &Limits,
    inspector: &dyn ImageInspector,
) -> Result<(), ValidationError> {
    let props = match inspector.probe(bytes) {
        Ok(Some(props)) => props,
        Ok(None) => return Ok(()),
        Err(e) => {
            return Err(ValidationError::UnsupportedImageFormat(format!(
                "Error parsing sticker image, sticker pack identifier: {}, filename: {}: {}",
                identifier, file_name, e
            )));
        }
    };

    if props.height != limits.sticker_height {
        return Err(ValidationError::IncorrectImageSize(format!(
            "sticker height should be {}, current height is {}, sticker pack identifier: {}, filename: {}",
            limits.sticker_height, props.height, identifier, file_name
        )));
    }
    if props.width != limits.sticker_width {
        return Err(ValidationError::IncorrectImageSize(format!(
            "sticker width should be {}, current width is {}, sticker pack identifier: {}, filename: {}",
            limits.sticker_width, props.width, identifier, file_name
        )));
    }

    if animated_sticker_pack {
        if props.frame_count <= 1 {
            return Err(ValidationError::UnsupportedImageFormat(format!(
                "this pack is marked as animated sticker pack, all stickers should animate, sticker pack identifier: {}, filename: {}",
                identifier, file_name
            )));
        }
        for frame_duration in &props.frame_durations_ms {
            if *frame_duration < limits.animated_frame_duration_min_ms {
                return Err(ValidationError::UnsupportedImageFormat(format!(
                    "animated sticker frame duration limit is {}, sticker pack identifier: {}, filename: {}",
                    limits.animated_frame_duration_min_ms, identifier, file_name
                )));
            }
        }
        if props.total_duration_ms() > limits.animated_total_duration_max_ms {
            return Err(ValidationError::UnsupportedImageFormat(format!(
                "sticker animation max duration is: {} ms, current duration is: {} ms, sticker pack identifier: {}, filename: {}",
                limits.animated_total_duration_max_ms,
                props.total_duration_ms(),
                identifier,
                file_name
            )));
        }
    } else if props.frame_count > 1 {
        return Err(ValidationError::AnimatedImagesNotSupported(format!(
            "this pack is not marked as animated sticker pack, all stickers should be static stickers, sticker pack identifier: {}, filename: {}",
            identifier, file_name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::MemoryAssetLoader;
    use crate::validator::image::{ImageProperties, NoopInspector};
    use test_case::test_case;

    fn loader_with(file: &str, bytes: Vec<u8>) -> MemoryAssetLoader {
        let mut loader = MemoryAssetLoader::new();
        loader.insert("pack", file, bytes);
        loader
    }

    fn emojis(n: usize) -> Vec<String> {
        (0..n).map(|_| "🙂".to_string()).collect()
    }

    #[test_case(0 => false ; "zero emojis fails")]
    #[test_case(1 => true ; "one emoji passes")]
    #[test_case(2 => true ; "two emojis pass")]
    #[test_case(3 => true ; "three emojis pass")]
    #[test_case(4 => false ; "four emojis fail")]
    fn emoji_bounds(count: usize) -> bool {
        let loader = loader_with("01.webp", vec![0; 10]);
        let sticker = Sticker::new("01.webp", emojis(count));
        validate_sticker(
            "pack",
            &sticker,
            false,
            &loader,
            &Limits::default(),
            &NoopInspector,
        )
        .is_ok()
    }

    #[test]
    fn test_too_few_and_too_many_share_the_error_kind() {
        let loader = loader_with("01.webp", vec![0; 10]);
        let too_few = validate_sticker(
            "pack",
            &Sticker::new("01.webp", vec![]),
            false,
            &loader,
            &Limits::default(),
            &NoopInspector,
        )
        .unwrap_err();
        let too_many = validate_sticker(
            "pack",
            &Sticker::new("01.webp", emojis(4)),
            false,
            &loader,
            &Limits::default(),
            &NoopInspector,
        )
        .unwrap_err();

        assert!(matches!(too_few, ValidationError::TooManyEmojis(_)));
        assert!(matches!(too_many, ValidationError::TooManyEmojis(_)));
        assert_eq!(too_few.code(), too_many.code());
    }

    #[test]
    fn test_empty_file_name_fails_before_asset_load() {
        let loader = MemoryAssetLoader::new();
        let err = validate_sticker(
            "pack",
            &Sticker::new("", emojis(1)),
            false,
            &loader,
            &Limits::default(),
            &NoopInspector,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::EmptyString(_)));
        assert!(err.to_string().contains("pack"));
    }

    #[test]
    fn test_missing_asset_is_file_not_found() {
        let loader = MemoryAssetLoader::new();
        let err = validate_sticker_asset(
            "pack",
            "missing.webp",
            false,
            &loader,
            &Limits::default(),
            &NoopInspector,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::FileNotFound(_)));
        assert!(err.to_string().contains("missing.webp"));
    }

    #[test]
    fn test_file_not_found_substitutes_path_markers() {
        let loader = MemoryAssetLoader::new();
        let err = validate_sticker_asset(
            "pack",
            "cachemzn_fd_01.webp",
            false,
            &loader,
            &Limits::default(),
            &NoopInspector,
        )
        .unwrap_err();
        assert!(!err.to_string().contains("mzn_fd_"));
    }

    #[test]
    fn test_static_cap_100kb() {
        let limits = Limits::default();
        let loader = loader_with("01.webp", vec![0; 100 * 1024 + 1]);
        let err = validate_sticker_asset(
            "pack",
            "01.webp",
            false,
            &loader,
            &limits,
            &NoopInspector,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::ImageTooBig(_)));
        assert!(err.to_string().contains("100KB"));
        assert!(err.fatal());
    }

    #[test]
    fn test_animated_cap_500kb() {
        let limits = Limits::default();
        let big = vec![0; 600 * 1024];

        // 600 KB fails the animated cap at 500 KB
        let loader = loader_with("01.webp", big.clone());
        let err = validate_sticker_asset("pack", "01.webp", true, &loader, &limits, &NoopInspector)
            .unwrap_err();
        assert!(matches!(err, ValidationError::ImageTooBig(_)));
        assert!(err.to_string().contains("500KB"));

        // the same asset under a static pack already fails at 100 KB
        let loader = loader_with("01.webp", big);
        let err = validate_sticker_asset("pack", "01.webp", false, &loader, &limits, &NoopInspector)
            .unwrap_err();
        assert!(err.to_string().contains("100KB"));
    }

    #[test]
    fn test_exactly_at_cap_passes() {
        let limits = Limits::default();
        let loader = loader_with("01.webp", vec![0; 100 * 1024]);
        assert!(validate_sticker_asset(
            "pack",
            "01.webp",
            false,
            &loader,
            &limits,
            &NoopInspector
        )
        .is_ok());
    }

    struct FixedInspector(ImageProperties);

    impl ImageInspector for FixedInspector {
        fn probe(&self, _bytes: &[u8]) -> anyhow::Result<Option<ImageProperties>> {
            Ok(Some(self.0.clone()))
        }
    }

    struct FailingInspector;

    impl ImageInspector for FailingInspector {
        fn probe(&self, _bytes: &[u8]) -> anyhow::Result<Option<ImageProperties>> {
            anyhow::bail!("truncated image data")
        }
    }

    fn props(width: u32, height: u32, frames: usize, durations: Vec<u32>) -> ImageProperties {
        ImageProperties {
            width,
            height,
            frame_count: frames,
            frame_durations_ms: durations,
        }
    }

    #[test]
    fn test_inspector_dimension_mismatch() {
        let loader = loader_with("01.webp", vec![0; 10]);
        let inspector = FixedInspector(props(512, 256, 1, vec![]));
        let err = validate_sticker_asset(
            "pack",
            "01.webp",
            false,
            &loader,
            &Limits::default(),
            &inspector,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::IncorrectImageSize(_)));
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn test_inspector_static_sticker_in_animated_pack() {
        let loader = loader_with("01.webp", vec![0; 10]);
        let inspector = FixedInspector(props(512, 512, 1, vec![]));
        let err = validate_sticker_asset(
            "pack",
            "01.webp",
            true,
            &loader,
            &Limits::default(),
            &inspector,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedImageFormat(_)));
    }

    #[test]
    fn test_inspector_animated_sticker_in_static_pack() {
        let loader = loader_with("01.webp", vec![0; 10]);
        let inspector = FixedInspector(props(512, 512, 4, vec![40; 4]));
        let err = validate_sticker_asset(
            "pack",
            "01.webp",
            false,
            &loader,
            &Limits::default(),
            &inspector,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::AnimatedImagesNotSupported(_)));
        assert!(err.fatal());
    }

    #[test]
    fn test_inspector_frame_duration_floor() {
        let loader = loader_with("01.webp", vec![0; 10]);
        let inspector = FixedInspector(props(512, 512, 3, vec![40, 7, 40]));
        let err = validate_sticker_asset(
            "pack",
            "01.webp",
            true,
            &loader,
            &Limits::default(),
            &inspector,
        )
        .unwrap_err();
        assert!(err.to_string().contains("frame duration limit is 8"));
    }

    #[test]
    fn test_inspector_total_duration_ceiling() {
        let loader = loader_with("01.webp", vec![0; 10]);
        let inspector = FixedInspector(props(512, 512, 3, vec![5000, 5000, 1000]));
        let err = validate_sticker_asset(
            "pack",
            "01.webp",
            true,
            &loader,
            &Limits::default(),
            &inspector,
        )
        .unwrap_err();
        assert!(err.to_string().contains("10000 ms"));
    }

    #[test]
    fn test_inspector_happy_animated() {
        let loader = loader_with("01.webp", vec![0; 10]);
        let inspector = FixedInspector(props(512, 512, 3, vec![40, 40, 40]));
        assert!(validate_sticker_asset(
            "pack",
            "01.webp",
            true,
            &loader,
            &Limits::default(),
            &inspector
        )
        .is_ok());
    }

    #[test]
    fn test_inspector_parse_failure() {
        let loader = loader_with("01.webp", vec![0; 10]);
        let err = validate_sticker_asset(
            "pack",
            "01.webp",
            false,
            &loader,
            &Limits::default(),
            &FailingInspector,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedImageFormat(_)));
        assert!(err.to_string().contains("truncated image data"));
    }
}
