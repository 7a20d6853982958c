//! Sequential byte cursors with explicit-endianness fixed-width primitives.
//!
//! [`Cursor`] reads from a borrowed `&[u8]`, [`CursorMut`] writes into a
//! borrowed `&mut [u8]`. Every primitive advances the position by exactly
//! its width. There is no implicit padding or alignment.
//!
//! Running past the end of the buffer is reported as
//! [`BitmapError::TruncatedBuffer`] and leaves the position where it was.

use crate::error::BitmapError;

/// Reading cursor over a borrowed byte slice.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current byte offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the position and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Advance without reading.
    pub fn skip(&mut self, n: usize) -> Result<(), BitmapError> {
        self.take(n).map(|_| ())
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], BitmapError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(BitmapError::TruncatedBuffer {
                needed: self.pos.saturating_add(n),
                actual: self.data.len(),
            })?;
        let data = self.data;
        let bytes = &data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    pub fn read_u8(&mut self) -> Result<u8, BitmapError> {
        Ok(self.take_array::<1>()?[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16, BitmapError> {
        self.take_array().map(u16::from_le_bytes)
    }

    pub fn read_u16_be(&mut self) -> Result<u16, BitmapError> {
        self.take_array().map(u16::from_be_bytes)
    }

    pub fn read_u32_le(&mut self) -> Result<u32, BitmapError> {
        self.take_array().map(u32::from_le_bytes)
    }

    pub fn read_u32_be(&mut self) -> Result<u32, BitmapError> {
        self.take_array().map(u32::from_be_bytes)
    }

    pub fn read_i32_le(&mut self) -> Result<i32, BitmapError> {
        self.take_array().map(i32::from_le_bytes)
    }
}

/// Writing cursor over a borrowed mutable byte slice.
#[derive(Debug)]
pub struct CursorMut<'a> {
    data: &'a mut [u8],
    pos: usize,
}

impl<'a> CursorMut<'a> {
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn slot(&mut self, n: usize) -> Result<&mut [u8], BitmapError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(BitmapError::TruncatedBuffer {
                needed: self.pos.saturating_add(n),
                actual: self.data.len(),
            })?;
        let start = self.pos;
        self.pos = end;
        Ok(&mut self.data[start..end])
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), BitmapError> {
        self.slot(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    /// Write `n` zero bytes.
    pub fn write_zeros(&mut self, n: usize) -> Result<(), BitmapError> {
        self.slot(n)?.fill(0);
        Ok(())
    }

    pub fn write_u8(&mut self, v: u8) -> Result<(), BitmapError> {
        self.write_bytes(&[v])
    }

    pub fn write_u16_le(&mut self, v: u16) -> Result<(), BitmapError> {
        self.write_bytes(&v.to_le_bytes())
    }

    pub fn write_u16_be(&mut self, v: u16) -> Result<(), BitmapError> {
        self.write_bytes(&v.to_be_bytes())
    }

    pub fn write_u32_le(&mut self, v: u32) -> Result<(), BitmapError> {
        self.write_bytes(&v.to_le_bytes())
    }

    pub fn write_u32_be(&mut self, v: u32) -> Result<(), BitmapError> {
        self.write_bytes(&v.to_be_bytes())
    }

    pub fn write_i32_le(&mut self, v: i32) -> Result<(), BitmapError> {
        self.write_bytes(&v.to_le_bytes())
    }
}
