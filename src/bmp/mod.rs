//! 32-bit BMP decoder, pixel accessor, and encoder (internal).
//!
//! Use top-level [`crate::decode`], [`crate::encode`], etc.

mod access;
mod decode;
mod encode;

pub use access::PixelView;
pub use decode::Permissiveness;

use crate::decode::BitmapFile;
use crate::error::BitmapError;
use crate::header::BitmapHeader;
use crate::limits::Limits;
use crate::pixel::Pixel;
use alloc::vec;
use alloc::vec::Vec;
use enough::Stop;

/// Decode BMP headers and borrow the pixel region.
pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    permissiveness: Permissiveness,
) -> Result<BitmapFile<'a>, BitmapError> {
    let header = decode::parse_header(data, permissiveness)?;
    if let Some(limits) = limits {
        limits.check(header.abs_width(), header.abs_height())?;
    }
    let pixels = decode::pixel_region(data, &header)?;
    Ok(BitmapFile::new(header, pixels))
}

pub(crate) fn required_size(header: &BitmapHeader) -> Result<u32, BitmapError> {
    encode::required_size(header)
}

/// Encode into a caller-provided buffer of exactly [`required_size`] bytes.
pub(crate) fn encode_into(
    header: &BitmapHeader,
    pixels: &[Pixel],
    out: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), BitmapError> {
    encode::encode_into(header, pixels, out, stop)
}

/// Encode into a freshly allocated buffer.
pub(crate) fn encode(
    header: &BitmapHeader,
    pixels: &[Pixel],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BitmapError> {
    let size = encode::required_size(header)? as usize;
    if let Some(limits) = limits {
        limits.check(header.abs_width(), header.abs_height())?;
        limits.check_memory(size)?;
    }
    let mut out = vec![0u8; size];
    encode::encode_into(header, pixels, &mut out, stop)?;
    Ok(out)
}
