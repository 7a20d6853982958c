//! Random access into packed 32bpp pixel data.

use crate::header::BYTES_PER_PIXEL;
use crate::pixel::{Pixel, RowMapping, RowOrder};

/// Validated view over the pixels of a 32bpp uncompressed bitmap.
///
/// Obtained from [`BitmapFile::pixels`](crate::BitmapFile::pixels), which
/// checks bit depth, compression, and that every pixel lies inside the
/// buffer. Lookups here only need a coordinate check.
#[derive(Clone, Copy, Debug)]
pub struct PixelView<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    order: RowOrder,
}

impl<'a> PixelView<'a> {
    /// `data` must hold exactly `width * height * 4` bytes.
    pub(crate) fn new(data: &'a [u8], width: u32, height: u32, order: RowOrder) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * BYTES_PER_PIXEL
        );
        Self {
            data,
            width,
            height,
            order,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn row_order(&self) -> RowOrder {
        self.order
    }

    /// Raw packed `[blue, green, red, unused]` bytes in stored row order.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Pixel at column `x` of stored row `y`.
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let mut bgrx = [0u8; BYTES_PER_PIXEL];
        bgrx.copy_from_slice(&self.data[off..off + BYTES_PER_PIXEL]);
        Some(Pixel::from_bgrx(bgrx))
    }

    /// Pixel at column `x`, row `y` interpreted through `mapping`.
    pub fn get_mapped(&self, x: u32, y: u32, mapping: RowMapping) -> Option<Pixel> {
        self.get(x, mapping.stored_row(self.order, y, self.height)?)
    }

    /// Raw bytes of one row, or `None` if `y` is out of range.
    pub fn row_bytes(&self, y: u32, mapping: RowMapping) -> Option<&'a [u8]> {
        let stored = mapping.stored_row(self.order, y, self.height)? as usize;
        let stride = self.width as usize * BYTES_PER_PIXEL;
        let data = self.data;
        Some(&data[stored * stride..(stored + 1) * stride])
    }

    /// Iterate rows in the order given by `mapping`, each as an iterator of pixels.
    pub fn rows(
        self,
        mapping: RowMapping,
    ) -> impl ExactSizeIterator<Item = impl ExactSizeIterator<Item = Pixel> + 'a> + 'a {
        (0..self.height).map(move |y| {
            self.row_bytes(y, mapping)
                .unwrap_or_default()
                .chunks_exact(BYTES_PER_PIXEL)
                .map(|c| Pixel::from_bgrx([c[0], c[1], c[2], c[3]]))
        })
    }
}
