//! Byte-level reader with bounded operations.

use crate::error::{ByteError, ByteResult};
use crate::strings::trim_fixed;

/// A little-endian cursor over an immutable byte slice.
///
/// All read operations are bounds-checked and return errors on failure.
/// The cursor only moves forward; a failed read leaves it untouched.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Fails unless at least `len` bytes remain.
    pub fn ensure(&self, len: usize) -> ByteResult<()> {
        let available = self.remaining();
        if len > available {
            return Err(ByteError::UnexpectedEndOfData {
                requested: len,
                available,
            });
        }
        Ok(())
    }

    /// Skips `len` bytes.
    pub fn skip(&mut self, len: usize) -> ByteResult<()> {
        self.ensure(len)?;
        self.pos += len;
        Ok(())
    }

    /// Reads a borrowed slice of `len` bytes.
    pub fn read_slice(&mut self, len: usize) -> ByteResult<&'a [u8]> {
        self.ensure(len)?;
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Reads exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> ByteResult<[u8; N]> {
        let slice = self.read_slice(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    /// Reads a `u8`.
    pub fn read_u8(&mut self) -> ByteResult<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Reads a little-endian `u16`.
    pub fn read_u16(&mut self) -> ByteResult<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32(&mut self) -> ByteResult<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Reads a little-endian `i32`.
    pub fn read_i32(&mut self) -> ByteResult<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    /// Reads a little-endian IEEE-754 `f64`.
    pub fn read_f64(&mut self) -> ByteResult<f64> {
        self.read_array().map(f64::from_le_bytes)
    }

    /// Reads a fixed-width string field of `width` bytes.
    ///
    /// See [`trim_fixed`] for how padding is removed.
    pub fn read_fixed_str(&mut self, width: usize) -> ByteResult<String> {
        self.read_slice(width).map(trim_fixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reader() {
        let reader = ByteReader::new(&[]);
        assert!(reader.is_empty());
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut reader = ByteReader::new(&[]);
        let result = reader.read_u8();
        assert!(matches!(
            result,
            Err(ByteError::UnexpectedEndOfData {
                requested: 1,
                available: 0
            })
        ));
    }

    #[test]
    fn read_u32_little_endian() {
        let mut reader = ByteReader::new(&[0x78, 0x56, 0x34, 0x12]);
        assert_eq!(reader.read_u32().unwrap(), 0x1234_5678);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_i32_negative() {
        let mut reader = ByteReader::new(&[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(reader.read_i32().unwrap(), -1);
    }

    #[test]
    fn read_f64_little_endian() {
        let bytes = 2.5f64.to_le_bytes();
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_f64().unwrap(), 2.5);
    }

    #[test]
    fn failed_read_does_not_advance() {
        let mut reader = ByteReader::new(&[1, 2, 3]);
        let err = reader.read_u32().unwrap_err();
        assert_eq!(
            err,
            ByteError::UnexpectedEndOfData {
                requested: 4,
                available: 3
            }
        );
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_u8().unwrap(), 1);
    }

    #[test]
    fn skip_advances_position() {
        let mut reader = ByteReader::new(&[0, 0, 7]);
        reader.skip(2).unwrap();
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.read_u8().unwrap(), 7);
        assert!(reader.skip(1).is_err());
    }

    #[test]
    fn read_fixed_str_trims_padding() {
        let mut reader = ByteReader::new(b"sky\0\0\0\0\0\0\0rest");
        assert_eq!(reader.read_fixed_str(10).unwrap(), "sky");
        assert_eq!(reader.remaining(), 4);
    }
}
