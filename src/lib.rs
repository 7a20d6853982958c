//! # zenbmp
//!
//! Zero-copy decoder, random pixel accessor, and encoder for uncompressed
//! 32-bit BMP files with a 40-byte `BITMAPINFOHEADER`.
//!
//! ## Zero-Copy Decoding
//!
//! [`decode`] only parses the 54 bytes of headers. The returned
//! [`BitmapFile`] borrows the pixel bytes straight from the input buffer;
//! pixels are read on demand with [`BitmapFile::get_pixel`] or through a
//! validated [`PixelView`].
//!
//! ## Row Order
//!
//! BMP stores rows bottom-to-top when the height field is positive and
//! top-to-bottom when it is negative. [`BitmapFile::row_order`] reports which,
//! and [`RowMapping::TopDown`] addresses rows visually regardless of storage.
//! The encoder never reorders rows: pixels are written in the order given and
//! the sign of the height says which way they run.
//!
//! ## Non-Goals
//!
//! - RLE, bitfield, JPEG or PNG compressed BMPs
//! - Palette images and bit depths other than 32
//! - File I/O
//!
//! ## Usage
//!
//! ```
//! use zenbmp::{BitmapHeader, Pixel, RowMapping, Unstoppable};
//!
//! // 2x2, top row first (negative height)
//! let header = BitmapHeader::new(2, -2);
//! let pixels = [
//!     Pixel::new(255, 0, 0), Pixel::new(0, 255, 0),
//!     Pixel::new(0, 0, 255), Pixel::new(255, 255, 255),
//! ];
//! let bytes = zenbmp::encode(&header, &pixels, Unstoppable)?;
//! assert_eq!(bytes.len() as u32, zenbmp::required_size(&header)?);
//!
//! let file = zenbmp::decode(&bytes)?;
//! assert_eq!(file.get_pixel(1, 1)?, Pixel::new(255, 255, 255));
//! assert_eq!(file.pixel(0, 0, RowMapping::TopDown)?, Pixel::new(255, 0, 0));
//! # Ok::<(), zenbmp::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod cursor;
pub mod glyph;

mod bmp;
mod decode;
mod encode;
mod error;
mod header;
mod limits;
mod pixel;

use alloc::vec::Vec;

// Re-exports
pub use bmp::{Permissiveness, PixelView};
pub use decode::{BitmapFile, DecodeRequest};
#[cfg(feature = "imgref")]
pub use encode::encode_imgref;
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::BitmapError;
pub use glyph::GlyphGrid;
pub use header::{
    BYTES_PER_PIXEL, BitmapHeader, Compression, FILE_HEADER_SIZE, INFO_HEADER_SIZE,
    PIXEL_DATA_OFFSET,
};
pub use limits::Limits;
pub use pixel::{Pixel, RowMapping, RowOrder};

/// Decode a BMP buffer with default validation and no limits.
///
/// Fails with [`BitmapError::UnknownHeaderField`] if the buffer does not
/// start with `"BM"` and [`BitmapError::UnknownBitmapVersion`] if the DIB
/// header is not 40 bytes.
pub fn decode(data: &[u8]) -> Result<BitmapFile<'_>, BitmapError> {
    DecodeRequest::new(data).decode()
}

/// Encoded length for `header`'s dimensions: `54 + |width * height| * 4`.
pub fn required_size(header: &BitmapHeader) -> Result<u32, BitmapError> {
    bmp::required_size(header)
}

/// Encode `pixels` into `out`, which must be exactly [`required_size`] bytes.
///
/// Only `header.width` and `header.height` are used; the output is always
/// 32bpp uncompressed.
pub fn encode_into(
    header: &BitmapHeader,
    pixels: &[Pixel],
    out: &mut [u8],
    stop: impl Stop,
) -> Result<(), BitmapError> {
    bmp::encode_into(header, pixels, out, &stop)
}

/// Encode `pixels` into a new, exactly sized buffer.
pub fn encode(
    header: &BitmapHeader,
    pixels: &[Pixel],
    stop: impl Stop,
) -> Result<Vec<u8>, BitmapError> {
    bmp::encode(header, pixels, None, &stop)
}
