//! BMP header types shared by the decoder, pixel accessor, and encoder.

use crate::error::BitmapError;
use crate::pixel::RowOrder;

/// Size of the `BITMAPFILEHEADER` block.
pub const FILE_HEADER_SIZE: u32 = 14;
/// Size of the `BITMAPINFOHEADER` block, the only DIB variant accepted.
pub const INFO_HEADER_SIZE: u32 = 40;
/// Offset of the first pixel in files written by this crate.
pub const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
/// Bytes per stored pixel (B, G, R, unused).
pub const BYTES_PER_PIXEL: usize = 4;

/// `"BM"` read as a big-endian u16.
pub(crate) const SIGNATURE: u16 = u16::from_be_bytes(*b"BM");

/// DIB compression method.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum Compression {
    Rgb,
    Rle8,
    Rle4,
    Bitfields,
    Jpeg,
    Png,
    AlphaBitfields,
    Cmyk,
    CmykRle8,
    CmykRle4,
    /// A value outside the documented set. Only produced by
    /// [`Permissiveness::Permissive`](crate::Permissiveness::Permissive).
    Unknown(u32),
}

impl Compression {
    /// Map the raw header value. Unrecognized values become [`Compression::Unknown`].
    pub fn from_u32(num: u32) -> Self {
        match num {
            0 => Self::Rgb,
            1 => Self::Rle8,
            2 => Self::Rle4,
            3 => Self::Bitfields,
            4 => Self::Jpeg,
            5 => Self::Png,
            6 => Self::AlphaBitfields,
            11 => Self::Cmyk,
            12 => Self::CmykRle8,
            13 => Self::CmykRle4,
            other => Self::Unknown(other),
        }
    }

    /// The raw header value.
    pub fn to_u32(self) -> u32 {
        match self {
            Self::Rgb => 0,
            Self::Rle8 => 1,
            Self::Rle4 => 2,
            Self::Bitfields => 3,
            Self::Jpeg => 4,
            Self::Png => 5,
            Self::AlphaBitfields => 6,
            Self::Cmyk => 11,
            Self::CmykRle8 => 12,
            Self::CmykRle4 => 13,
            Self::Unknown(v) => v,
        }
    }
}

/// Parsed BMP metadata.
///
/// Produced by [`decode`](crate::decode). For encoding, only `width` and
/// `height` are consulted; build one with [`BitmapHeader::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapHeader {
    /// DIB header size; always 40 for a decoded header.
    pub header_size: u32,
    pub width: i32,
    /// Positive: rows stored bottom-to-top. Negative: top-to-bottom.
    pub height: i32,
    pub bits_per_pixel: u16,
    pub compression: Compression,
    /// Declared pixel data length. Many writers leave this at zero.
    pub image_data_size: u32,
    /// Byte offset from the start of the file to the first pixel.
    pub pixel_data_offset: u32,
}

impl BitmapHeader {
    /// Header for a 32bpp uncompressed image, as [`encode`](crate::encode) writes it.
    ///
    /// `image_data_size` saturates for dimensions the format cannot hold;
    /// [`required_size`](crate::required_size) reports those as an error.
    pub fn new(width: i32, height: i32) -> Self {
        let image_data_size = pixel_count(width, height)
            .saturating_mul(BYTES_PER_PIXEL as u64)
            .min(u64::from(u32::MAX)) as u32;
        Self {
            header_size: INFO_HEADER_SIZE,
            width,
            height,
            bits_per_pixel: 32,
            compression: Compression::Rgb,
            image_data_size,
            pixel_data_offset: PIXEL_DATA_OFFSET,
        }
    }

    /// Column count, ignoring sign.
    pub fn abs_width(&self) -> u32 {
        self.width.unsigned_abs()
    }

    /// Row count, ignoring the row-order sign.
    pub fn abs_height(&self) -> u32 {
        self.height.unsigned_abs()
    }

    /// Storage row order encoded by the height sign.
    pub fn row_order(&self) -> RowOrder {
        RowOrder::from_height(self.height)
    }

    /// Pixel count `|width * height|`.
    pub fn pixel_count(&self) -> u64 {
        pixel_count(self.width, self.height)
    }

    /// Byte length of packed 32bpp pixel data, `|width * height| * 4`.
    pub(crate) fn pixel_bytes(&self) -> Result<usize, BitmapError> {
        usize::try_from(self.pixel_count())
            .ok()
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(BitmapError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            })
    }

    /// Fail unless this header describes pixels [`BitmapFile::get_pixel`](crate::BitmapFile::get_pixel) can read.
    pub(crate) fn check_readable(&self) -> Result<(), BitmapError> {
        if self.bits_per_pixel != 32 {
            return Err(BitmapError::UnsupportedBitDepth(self.bits_per_pixel));
        }
        if self.compression != Compression::Rgb {
            return Err(BitmapError::UnsupportedCompression(self.compression));
        }
        Ok(())
    }
}

fn pixel_count(width: i32, height: i32) -> u64 {
    u64::from(width.unsigned_abs()) * u64::from(height.unsigned_abs())
}
