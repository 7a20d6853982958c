use alloc::string::String;
use enough::StopReason;

use crate::header::Compression;

/// Errors from BMP decoding, pixel access, and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("unrecognized file signature (expected \"BM\")")]
    UnknownHeaderField,

    #[error("unsupported DIB header size {0} (expected 40)")]
    UnknownBitmapVersion(u32),

    #[error("buffer truncated: need {needed} bytes, got {actual}")]
    TruncatedBuffer { needed: usize, actual: usize },

    #[error("output buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("pixel count mismatch: expected {expected} pixels, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("unsupported bit depth {0} (only 32 bpp is supported)")]
    UnsupportedBitDepth(u16),

    #[error("unsupported compression {0:?}")]
    UnsupportedCompression(Compression),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("pixel ({x}, {y}) outside {width}x{height} image")]
    CoordinateOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("image has no pixels: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: i32, height: i32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("invalid glyph grid: {0}")]
    InvalidGlyphGrid(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}
