use alloc::vec::Vec;

use enough::Stop;

use crate::bmp::{self, Permissiveness, PixelView};
use crate::error::BitmapError;
use crate::header::BitmapHeader;
use crate::limits::Limits;
use crate::pixel::{Pixel, RowMapping, RowOrder};

/// Decode request builder.
///
/// ```
/// use zenbmp::{DecodeRequest, Limits, Permissiveness};
///
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let header = zenbmp::BitmapHeader::new(1, 1);
/// let data = zenbmp::encode(&header, &[zenbmp::Pixel::new(1, 2, 3)], zenbmp::Unstoppable)?;
/// let file = DecodeRequest::new(&data)
///     .with_limits(&limits)
///     .with_permissiveness(Permissiveness::Strict)
///     .decode()?;
/// assert_eq!(file.get_pixel(0, 0)?, zenbmp::Pixel::new(1, 2, 3));
/// # Ok::<(), zenbmp::BitmapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    permissiveness: Permissiveness,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            permissiveness: Permissiveness::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_permissiveness(mut self, permissiveness: Permissiveness) -> Self {
        self.permissiveness = permissiveness;
        self
    }

    /// Parse the headers and borrow the pixel region. No pixel bytes are copied.
    pub fn decode(self) -> Result<BitmapFile<'a>, BitmapError> {
        bmp::decode(self.data, self.limits, self.permissiveness)
    }
}

/// A decoded bitmap: parsed header plus a borrowed view of the pixel bytes.
///
/// The view starts at the header's pixel data offset inside the original
/// buffer. For a 32bpp uncompressed file it covers exactly
/// `|width * height| * 4` bytes; for anything else it runs to the end of the
/// buffer and pixel access fails.
#[derive(Clone, Copy, Debug)]
pub struct BitmapFile<'a> {
    header: BitmapHeader,
    pixels: &'a [u8],
}

impl<'a> BitmapFile<'a> {
    pub(crate) fn new(header: BitmapHeader, pixels: &'a [u8]) -> Self {
        Self { header, pixels }
    }

    pub fn header(&self) -> &BitmapHeader {
        &self.header
    }

    /// Column count.
    pub fn width(&self) -> u32 {
        self.header.abs_width()
    }

    /// Row count, independent of row order.
    pub fn height(&self) -> u32 {
        self.header.abs_height()
    }

    /// Storage row order, from the sign of the height field.
    pub fn row_order(&self) -> RowOrder {
        self.header.row_order()
    }

    /// Byte offset of the pixel data within the original buffer.
    pub fn pixel_data_offset(&self) -> usize {
        self.header.pixel_data_offset as usize
    }

    /// The borrowed pixel bytes, as stored.
    pub fn pixel_data(&self) -> &'a [u8] {
        self.pixels
    }

    /// Validate the header for pixel access and return a lookup view.
    ///
    /// Fails with [`BitmapError::UnsupportedBitDepth`] unless the file is
    /// 32bpp and [`BitmapError::UnsupportedCompression`] unless it is
    /// uncompressed RGB.
    pub fn pixels(&self) -> Result<PixelView<'a>, BitmapError> {
        self.header.check_readable()?;
        let needed = self.header.pixel_bytes()?;
        if self.pixels.len() < needed {
            return Err(BitmapError::TruncatedBuffer {
                needed: self.pixel_data_offset() + needed,
                actual: self.pixel_data_offset() + self.pixels.len(),
            });
        }
        Ok(PixelView::new(
            &self.pixels[..needed],
            self.width(),
            self.height(),
            self.row_order(),
        ))
    }

    /// Pixel at column `x` of stored row `y`.
    ///
    /// `y` addresses rows as they appear in the file. For a bottom-up file
    /// (positive height) row 0 is the bottom of the image; use
    /// [`BitmapFile::pixel`] with [`RowMapping::TopDown`] to address rows
    /// visually.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Pixel, BitmapError> {
        self.pixel(x, y, RowMapping::Stored)
    }

    /// Pixel at column `x`, row `y` interpreted through `mapping`.
    pub fn pixel(&self, x: u32, y: u32, mapping: RowMapping) -> Result<Pixel, BitmapError> {
        self.pixels()?
            .get_mapped(x, y, mapping)
            .ok_or(BitmapError::CoordinateOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
    }

    /// Copy every pixel into an owned buffer, rows ordered by `mapping`.
    pub fn to_pixels(
        &self,
        mapping: RowMapping,
        stop: impl Stop,
    ) -> Result<Vec<Pixel>, BitmapError> {
        let view = self.pixels()?;
        let mut out = Vec::with_capacity(self.header.pixel_count() as usize);
        for (y, row) in view.rows(mapping).enumerate() {
            if y % 16 == 0 {
                stop.check()?;
            }
            out.extend(row);
        }
        Ok(out)
    }

    /// Copy into a top-down [`imgref::ImgVec`] of RGB pixels.
    ///
    /// `ImgVec` cannot represent an image without rows or columns, so a zero
    /// width or height is [`BitmapError::EmptyImage`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self, stop: impl Stop) -> Result<imgref::ImgVec<rgb::RGB8>, BitmapError> {
        if self.width() == 0 || self.height() == 0 {
            return Err(BitmapError::EmptyImage {
                width: self.width(),
                height: self.height(),
            });
        }
        let pixels = self
            .to_pixels(RowMapping::TopDown, stop)?
            .into_iter()
            .map(rgb::RGB8::from)
            .collect();
        Ok(imgref::ImgVec::new(
            pixels,
            self.width() as usize,
            self.height() as usize,
        ))
    }
}
