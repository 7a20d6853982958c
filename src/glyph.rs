//! Packing monochrome glyph cells into 64-bit masks.
//!
//! A font sheet is a bitmap divided into a grid of equally sized cells, one
//! glyph per cell, laid out left to right and then top to bottom. Each cell
//! with at most 64 pixels packs into a `u64`: the cell is read row-major from
//! its top-left corner and the first pixel lands in the highest used bit.
//! A pixel is "ink" when its red channel is non-zero.

use alloc::vec::Vec;

use enough::Stop;

use crate::decode::BitmapFile;
use crate::error::BitmapError;
use crate::pixel::RowMapping;

/// Grid layout of a glyph sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphGrid {
    /// Cells per row of the sheet.
    pub columns: u32,
    /// Cell rows in the sheet.
    pub rows: u32,
    /// Number of glyphs to pack, starting from the top-left cell.
    pub count: u32,
}

impl GlyphGrid {
    pub fn new(columns: u32, rows: u32, count: u32) -> Self {
        Self {
            columns,
            rows,
            count,
        }
    }

    /// Cell size in pixels for a sheet of `width` by `height`.
    pub fn cell_size(&self, width: u32, height: u32) -> Result<(u32, u32), BitmapError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(BitmapError::InvalidGlyphGrid(alloc::format!(
                "grid must have at least one column and row, got {}x{}",
                self.columns,
                self.rows
            )));
        }
        let cell = (width / self.columns, height / self.rows);
        let area = u64::from(cell.0) * u64::from(cell.1);
        if area == 0 || area > 64 {
            return Err(BitmapError::InvalidGlyphGrid(alloc::format!(
                "{}x{} cells hold {area} pixels, need 1 to 64",
                cell.0,
                cell.1
            )));
        }
        Ok(cell)
    }

    /// Pack the first `count` cells of `sheet` into masks.
    ///
    /// Rows are addressed top-down whatever the file's row order.
    pub fn pack(&self, sheet: &BitmapFile<'_>, stop: impl Stop) -> Result<Vec<u64>, BitmapError> {
        let (cell_w, cell_h) = self.cell_size(sheet.width(), sheet.height())?;
        let capacity = u64::from(self.columns) * u64::from(self.rows);
        if u64::from(self.count) > capacity {
            return Err(BitmapError::InvalidGlyphGrid(alloc::format!(
                "{} glyphs requested but a {}x{} grid holds {capacity}",
                self.count,
                self.columns,
                self.rows
            )));
        }

        let view = sheet.pixels()?;
        let cell_pixels = cell_w * cell_h;
        let mut masks = Vec::with_capacity(self.count as usize);

        for glyph in 0..self.count {
            if glyph % 16 == 0 {
                stop.check()?;
            }
            let x0 = (glyph % self.columns) * cell_w;
            let y0 = (glyph / self.columns) * cell_h;

            let mut mask = 0u64;
            for i in 0..cell_pixels {
                let (x, y) = (x0 + i % cell_w, y0 + i / cell_w);
                // In range: cells never extend past the sheet.
                let ink = view
                    .get_mapped(x, y, RowMapping::TopDown)
                    .is_some_and(|p| p.r != 0);
                if ink {
                    mask |= 1u64 << (cell_pixels - 1 - i);
                }
            }
            masks.push(mask);
        }

        Ok(masks)
    }
}
