//! BMP header parsing and pixel-region location.
//!
//! Only the 14-byte file header followed by a 40-byte `BITMAPINFOHEADER` is
//! accepted. Nothing is copied: the pixel region is a sub-slice of the input.

use crate::cursor::Cursor;
use crate::error::BitmapError;
use crate::header::{BitmapHeader, Compression, INFO_HEADER_SIZE, PIXEL_DATA_OFFSET, SIGNATURE};

// ── Permissiveness ──────────────────────────────────────────────────

/// Controls how strictly the BMP decoder validates input.
///
/// Every level rejects a bad signature, a DIB header other than 40 bytes,
/// and pixel data that runs past the end of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permissiveness {
    /// Reject files that violate the BMP spec even in non-critical ways.
    /// Validates: planes == 1, file size field matches the buffer length,
    /// image data size field, pixel data offset past the headers.
    Strict,

    /// Default behavior. Ignore the informational fields but reject
    /// compression values outside the documented set.
    #[default]
    Standard,

    /// Accept any compression value, keeping unrecognized ones as
    /// [`Compression::Unknown`].
    Permissive,
}

// ── Header parsing ──────────────────────────────────────────────────

/// Parse the file header and DIB header.
pub(crate) fn parse_header(
    data: &[u8],
    permissiveness: Permissiveness,
) -> Result<BitmapHeader, BitmapError> {
    // A one-byte buffer that already differs from "BM" is a signature
    // mismatch, not a truncation.
    let prefix = &data[..data.len().min(2)];
    if !b"BM".starts_with(prefix) {
        return Err(BitmapError::UnknownHeaderField);
    }

    let mut bytes = Cursor::new(data);
    if bytes.read_u16_be()? != SIGNATURE {
        return Err(BitmapError::UnknownHeaderField);
    }

    let file_size = bytes.read_u32_le()?;
    bytes.skip(4)?; // 2x reserved u16
    let pixel_data_offset = bytes.read_u32_le()?;

    let header_size = bytes.read_u32_le()?;
    if header_size != INFO_HEADER_SIZE {
        return Err(BitmapError::UnknownBitmapVersion(header_size));
    }

    let width = bytes.read_i32_le()?;
    let height = bytes.read_i32_le()?;
    let planes = bytes.read_u16_le()?;
    let bits_per_pixel = bytes.read_u16_le()?;
    let compression = Compression::from_u32(bytes.read_u32_le()?);
    let image_data_size = bytes.read_u32_le()?;

    if permissiveness != Permissiveness::Permissive {
        if let Compression::Unknown(_) = compression {
            return Err(BitmapError::UnsupportedCompression(compression));
        }
    }

    let header = BitmapHeader {
        header_size,
        width,
        height,
        bits_per_pixel,
        compression,
        image_data_size,
        pixel_data_offset,
    };

    if permissiveness == Permissiveness::Strict {
        check_strict(&header, data.len(), file_size, planes)?;
    }

    Ok(header)
}

fn check_strict(
    header: &BitmapHeader,
    data_len: usize,
    file_size: u32,
    planes: u16,
) -> Result<(), BitmapError> {
    if planes != 1 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP planes field is {planes}, expected 1"
        )));
    }
    if file_size as usize != data_len {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP file size field ({file_size}) doesn't match actual size ({data_len})"
        )));
    }
    if header.pixel_data_offset < PIXEL_DATA_OFFSET {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP pixel data offset ({}) overlaps the headers",
            header.pixel_data_offset
        )));
    }
    if header.image_data_size != 0 && header.check_readable().is_ok() {
        let expected = header.pixel_bytes()?;
        if header.image_data_size as usize != expected {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "BMP image data size field ({}) doesn't match expected ({expected})",
                header.image_data_size
            )));
        }
    }
    Ok(())
}

// ── Pixel region ────────────────────────────────────────────────────

/// Locate the pixel bytes described by `header` inside `data`.
///
/// For a readable (32bpp, uncompressed) header the region is exactly
/// `|width * height| * 4` bytes and must be fully present. Otherwise it runs
/// from the pixel data offset to the end of the buffer.
pub(crate) fn pixel_region<'a>(
    data: &'a [u8],
    header: &BitmapHeader,
) -> Result<&'a [u8], BitmapError> {
    let start = header.pixel_data_offset as usize;
    if start > data.len() {
        return Err(BitmapError::TruncatedBuffer {
            needed: start,
            actual: data.len(),
        });
    }
    if header.check_readable().is_err() {
        return Ok(&data[start..]);
    }

    let end = header
        .pixel_bytes()?
        .checked_add(start)
        .ok_or(BitmapError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    data.get(start..end).ok_or(BitmapError::TruncatedBuffer {
        needed: end,
        actual: data.len(),
    })
}
