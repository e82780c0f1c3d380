//! Numeric thresholds for pack validation

pub const KB_IN_BYTES: usize = 1024;

pub const PLAY_STORE_DOMAIN: &str = "play.google.com";
pub const APPLE_STORE_DOMAIN: &str = "itunes.apple.com";

/// Every threshold the validator enforces, in one injectable place.
///
/// `Limits::default()` reproduces the receiving app's published constraints;
/// tests override individual fields to probe boundaries without rebuilding
/// the engine.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Max byte size for a sticker in a static pack, in KB.
    pub static_sticker_file_limit_kb: usize,
    /// Max byte size for a sticker in an animated pack, in KB.
    pub animated_sticker_file_limit_kb: usize,
    pub emoji_min: usize,
    pub emoji_max: usize,
    /// Required sticker pixel dimensions (deep inspection only).
    pub sticker_width: u32,
    pub sticker_height: u32,
    pub sticker_count_min: usize,
    pub sticker_count_max: usize,
    /// Max length for identifier, name and publisher strings.
    pub char_count_max: usize,
    pub tray_image_file_limit_kb: usize,
    pub tray_dimension_min: u32,
    pub tray_dimension_max: u32,
    /// Min duration of a single animation frame, in ms (deep inspection only).
    pub animated_frame_duration_min_ms: u32,
    /// Max total animation duration, in ms (deep inspection only).
    pub animated_total_duration_max_ms: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            static_sticker_file_limit_kb: 100,
            animated_sticker_file_limit_kb: 500,
            emoji_min: 1,
            emoji_max: 3,
            sticker_width: 512,
            sticker_height: 512,
            sticker_count_min: 3,
            sticker_count_max: 30,
            char_count_max: 128,
            tray_image_file_limit_kb: 50,
            tray_dimension_min: 24,
            tray_dimension_max: 512,
            animated_frame_duration_min_ms: 8,
            animated_total_duration_max_ms: 10 * 1000,
        }
    }
}

impl Limits {
    pub fn static_sticker_limit_bytes(&self) -> usize {
        self.static_sticker_file_limit_kb * KB_IN_BYTES
    }

    pub fn animated_sticker_limit_bytes(&self) -> usize {
        self.animated_sticker_file_limit_kb * KB_IN_BYTES
    }

    pub fn tray_image_limit_bytes(&self) -> usize {
        self.tray_image_file_limit_kb * KB_IN_BYTES
    }
}
