use alloc::vec::Vec;

use enough::Stop;

use crate::bmp;
use crate::error::BitmapError;
use crate::header::BitmapHeader;
use crate::limits::Limits;
use crate::pixel::Pixel;
#[cfg(feature = "imgref")]
use crate::pixel::RowOrder;

/// Encode request builder for 32bpp BMP output.
///
/// `height` carries the row order as BMP does: positive means the supplied
/// pixels run bottom row first, negative means top row first. Pixels are
/// written in exactly the order given.
#[derive(Clone, Debug)]
pub struct EncodeRequest<'a> {
    header: BitmapHeader,
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            header: BitmapHeader::new(width, height),
            limits: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// The header that will be written.
    pub fn header(&self) -> &BitmapHeader {
        &self.header
    }

    /// Encoded length in bytes.
    pub fn required_size(&self) -> Result<u32, BitmapError> {
        bmp::required_size(&self.header)
    }

    /// Encode into a new buffer.
    pub fn encode(&self, pixels: &[Pixel], stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
        bmp::encode(&self.header, pixels, self.limits, &stop)
    }

    /// Encode into `out`, which must be exactly [`EncodeRequest::required_size`] bytes.
    pub fn encode_into(
        &self,
        pixels: &[Pixel],
        out: &mut [u8],
        stop: impl Stop,
    ) -> Result<(), BitmapError> {
        if let Some(limits) = self.limits {
            limits.check(self.header.abs_width(), self.header.abs_height())?;
        }
        bmp::encode_into(&self.header, pixels, out, &stop)
    }
}

/// Encode a top-down RGB image, storing rows in `order`.
///
/// The written height is negative for [`RowOrder::TopDown`] and positive for
/// [`RowOrder::BottomUp`], so any reader recovers the same picture.
#[cfg(feature = "imgref")]
pub fn encode_imgref(
    img: imgref::ImgRef<'_, rgb::RGB8>,
    order: RowOrder,
    stop: impl Stop,
) -> Result<Vec<u8>, BitmapError> {
    let (w, h) = (img.width(), img.height());
    let too_large = || BitmapError::DimensionsTooLarge {
        width: i32::try_from(w).unwrap_or(i32::MAX),
        height: i32::try_from(h).unwrap_or(i32::MAX),
    };
    let width = i32::try_from(w).map_err(|_| too_large())?;
    let height = u32::try_from(h)
        .ok()
        .and_then(|rows| order.signed_height(rows))
        .ok_or_else(too_large)?;
    let header = BitmapHeader::new(width, height);
    let size = bmp::required_size(&header)?;

    let mut pixels = Vec::with_capacity(w * h);
    let stride = img.stride();
    let buf = img.buf();
    let rows = (0..h as u32).filter_map(|row| order.stored_row(row, h as u32));
    for (stored, y) in rows.enumerate() {
        if stored % 16 == 0 {
            stop.check()?;
        }
        let y = y as usize;
        let row = &buf[y * stride..y * stride + w];
        pixels.extend(row.iter().copied().map(Pixel::from));
    }

    let mut out = alloc::vec![0u8; size as usize];
    bmp::encode_into(&header, &pixels, &mut out, &stop)?;
    Ok(out)
}
