//! BMP encoder: uncompressed 32-bit BMP with a 40-byte DIB header.

use enough::Stop;

use crate::cursor::CursorMut;
use crate::error::BitmapError;
use crate::header::{
    BYTES_PER_PIXEL, BitmapHeader, Compression, INFO_HEADER_SIZE, PIXEL_DATA_OFFSET, SIGNATURE,
};
use crate::pixel::Pixel;

/// Total encoded length for `header`'s dimensions: `54 + |width * height| * 4`.
pub(crate) fn required_size(header: &BitmapHeader) -> Result<u32, BitmapError> {
    let too_large = BitmapError::DimensionsTooLarge {
        width: header.width,
        height: header.height,
    };
    header
        .pixel_count()
        .checked_mul(BYTES_PER_PIXEL as u64)
        .and_then(|n| n.checked_add(u64::from(PIXEL_DATA_OFFSET)))
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(too_large)
}

/// Serialize `header` and `pixels` into `out`, which must be exactly
/// [`required_size`] bytes long.
pub(crate) fn encode_into(
    header: &BitmapHeader,
    pixels: &[Pixel],
    out: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), BitmapError> {
    let file_size = required_size(header)?;
    if out.len() != file_size as usize {
        return Err(BitmapError::SizeMismatch {
            expected: file_size as usize,
            actual: out.len(),
        });
    }
    // Fits: bounded by file_size above.
    let pixel_count = header.pixel_count() as usize;
    if pixels.len() != pixel_count {
        return Err(BitmapError::PixelCountMismatch {
            expected: pixel_count,
            actual: pixels.len(),
        });
    }

    stop.check()?;

    let mut w = CursorMut::new(out);
    write_bmp_header(&mut w, header, file_size)?;

    // Rows are written exactly as supplied; the height sign tells readers
    // which way they run.
    let row_len = header.abs_width() as usize;
    if row_len == 0 {
        return Ok(());
    }
    for (row, chunk) in pixels.chunks_exact(row_len).enumerate() {
        if row % 16 == 0 {
            stop.check()?;
        }
        for px in chunk {
            w.write_bytes(&px.to_bgrx())?;
        }
    }

    Ok(())
}

fn write_bmp_header(
    w: &mut CursorMut<'_>,
    header: &BitmapHeader,
    file_size: u32,
) -> Result<(), BitmapError> {
    let pixel_data_size = file_size - PIXEL_DATA_OFFSET;

    // File header (14 bytes)
    w.write_u16_be(SIGNATURE)?;
    w.write_u32_le(file_size)?;
    w.write_u32_le(0)?; // reserved
    w.write_u32_le(PIXEL_DATA_OFFSET)?;

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    w.write_u32_le(INFO_HEADER_SIZE)?;
    w.write_i32_le(header.width)?;
    w.write_i32_le(header.height)?; // sign preserved: positive = bottom-up
    w.write_u16_le(1)?; // planes
    w.write_u16_le(32)?;
    w.write_u32_le(Compression::Rgb.to_u32())?;
    w.write_u32_le(pixel_data_size)?;
    w.write_zeros(16) // resolution, colors used, important colors
}
