//! Deep sticker-image inspection strategy
//!
//! The receiving app additionally constrains sticker pixel dimensions and
//! animation timing, but checking those requires a full animated-WebP
//! decoder. The engine takes the decoder as an injectable strategy: the
//! default [`NoopInspector`] reports nothing and the deep checks are
//! skipped, matching the reference behavior. A codec-backed inspector can
//! be substituted without touching the rest of the engine.

use anyhow::Result;

/// Decoded facts about one sticker image, as reported by an inspector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageProperties {
    pub width: u32,
    pub height: u32,
    pub frame_count: usize,
    /// Per-frame durations in ms; empty for static images.
    pub frame_durations_ms: Vec<u32>,
}

impl ImageProperties {
    pub fn total_duration_ms(&self) -> u32 {
        self.frame_durations_ms.iter().sum()
    }
}

/// Decodes enough of an image to report dimensions and animation frames.
///
/// `Ok(None)` means "no inspection available" and skips the deep checks
/// entirely; a decode failure is an `Err` and fails the asset as an
/// unsupported format.
pub trait ImageInspector {
    fn probe(&self, bytes: &[u8]) -> Result<Option<ImageProperties>>;
}

/// Default inspector: inspects nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopInspector;

impl ImageInspector for NoopInspector {
    fn probe(&self, _bytes: &[u8]) -> Result<Option<ImageProperties>> {
        Ok(None)
    }
}
