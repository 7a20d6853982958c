/// An 8-bit-per-channel RGB color.
///
/// BMP stores a fourth byte per 32bpp pixel; it is never read back and is
/// written as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a stored `[blue, green, red, unused]` group.
    pub(crate) fn from_bgrx(bgrx: [u8; 4]) -> Self {
        Self {
            r: bgrx[2],
            g: bgrx[1],
            b: bgrx[0],
        }
    }

    /// Stored `[blue, green, red, 0]` group.
    pub(crate) fn to_bgrx(self) -> [u8; 4] {
        [self.b, self.g, self.r, 0]
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for Pixel {
    fn from(p: rgb::RGB8) -> Self {
        Self::new(p.r, p.g, p.b)
    }
}

#[cfg(feature = "rgb")]
impl From<Pixel> for rgb::RGB8 {
    fn from(p: Pixel) -> Self {
        rgb::RGB8::new(p.r, p.g, p.b)
    }
}

/// Order in which pixel rows are stored in the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowOrder {
    /// First stored row is the top of the image (negative height).
    TopDown,
    /// First stored row is the bottom of the image (positive height).
    BottomUp,
}

impl RowOrder {
    /// Positive heights are bottom-up; zero and negative heights are top-down.
    pub fn from_height(height: i32) -> Self {
        if height > 0 {
            Self::BottomUp
        } else {
            Self::TopDown
        }
    }

    /// Stored row index for visual row `row` (0 = top) of an image with `rows` rows.
    ///
    /// Returns `None` when `row` is not less than `rows`.
    pub fn stored_row(self, row: u32, rows: u32) -> Option<u32> {
        if row >= rows {
            return None;
        }
        Some(match self {
            Self::TopDown => row,
            Self::BottomUp => rows - 1 - row,
        })
    }

    /// Apply this order's sign to a row count.
    ///
    /// Returns `None` when `rows` does not fit the signed height field.
    pub fn signed_height(self, rows: u32) -> Option<i32> {
        let rows = i32::try_from(rows).ok()?;
        Some(match self {
            Self::TopDown => -rows,
            Self::BottomUp => rows,
        })
    }
}

/// How a row index passed to pixel access is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RowMapping {
    /// Row index addresses stored rows exactly as they appear in the file.
    #[default]
    Stored,
    /// Row 0 is the visual top of the image, whatever the file's [`RowOrder`].
    TopDown,
}

impl RowMapping {
    pub(crate) fn stored_row(self, order: RowOrder, row: u32, rows: u32) -> Option<u32> {
        match self {
            Self::Stored => (row < rows).then_some(row),
            Self::TopDown => order.stored_row(row, rows),
        }
    }
}
