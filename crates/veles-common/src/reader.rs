//! Little-endian binary reader over borrowed byte slices.
//!
//! [`BinaryReader`] walks a byte slice field by field. Every read is bounds
//! checked and decodes explicitly as little-endian, so the layout of a file
//! format never depends on the host's struct packing or byte order.

use byteorder::{ByteOrder, LittleEndian};

use crate::{Error, Result};

/// A cursor that reads little-endian values from a byte slice without copying.
///
/// # Example
///
/// ```
/// use veles_common::BinaryReader;
///
/// let data = [0x44, 0x44, 0x53, 0x20, 0x7C, 0x00, 0x00, 0x00];
/// let mut reader = BinaryReader::new(&data);
///
/// assert_eq!(reader.read_u32().unwrap(), 0x2053_4444);
/// assert_eq!(reader.read_u32().unwrap(), 124);
/// assert_eq!(reader.remaining(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    /// Create a new reader from a byte slice.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Get the current position in the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get the number of bytes remaining to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Get the unread tail of the buffer.
    #[inline]
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.data[self.position.min(self.data.len())..]
    }

    /// Fail with [`Error::UnexpectedEof`] unless `count` more bytes are available.
    #[inline]
    pub fn ensure(&self, count: usize) -> Result<()> {
        if self.remaining() < count {
            return Err(Error::UnexpectedEof {
                needed: count,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    /// Peek at bytes without advancing the position.
    #[inline]
    pub fn peek_bytes(&self, count: usize) -> Result<&'a [u8]> {
        self.ensure(count)?;
        Ok(&self.data[self.position..self.position + count])
    }

    /// Read bytes and advance the position.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(count)?;
        self.position += count;
        Ok(bytes)
    }

    /// Read a little-endian u32.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_bytes(4).map(LittleEndian::read_u32)
    }

    /// Peek at a little-endian u32 without advancing.
    #[inline]
    pub fn peek_u32(&self) -> Result<u32> {
        self.peek_bytes(4).map(LittleEndian::read_u32)
    }

    /// Read `N` consecutive little-endian u32 values.
    pub fn read_u32_array<const N: usize>(&mut self) -> Result<[u32; N]> {
        let bytes = self.read_bytes(N * 4)?;
        let mut out = [0u32; N];
        LittleEndian::read_u32_into(bytes, &mut out);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u32_little_endian() {
        let data = [
            0x01u8, 0x02, 0x03, 0x04, // u32: 0x04030201
            0xFF, 0xFF, 0xFF, 0xFF, // u32: 0xFFFFFFFF
        ];
        let mut reader = BinaryReader::new(&data);

        assert_eq!(reader.read_u32().unwrap(), 0x04030201);
        assert_eq!(reader.read_u32().unwrap(), 0xFFFFFFFF);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_read_u32_array() {
        let data = [1u8, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 0xAA];
        let mut reader = BinaryReader::new(&data);

        assert_eq!(reader.read_u32_array::<3>().unwrap(), [1, 2, 3]);
        assert_eq!(reader.remaining_bytes(), &[0xAA]);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let reader = BinaryReader::new(&data);

        assert_eq!(reader.peek_u32().unwrap(), 0x04030201);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_eof_error_reports_sizes() {
        let data = [0x01, 0x02];
        let mut reader = BinaryReader::new(&data);

        match reader.read_u32() {
            Err(Error::UnexpectedEof { needed, available }) => {
                assert_eq!(needed, 4);
                assert_eq!(available, 2);
            }
            other => panic!("expected EOF, got {:?}", other),
        }
        // A failed read leaves the cursor where it was.
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_remaining_tracks_position() {
        let data = [0u8; 10];
        let mut reader = BinaryReader::new(&data);
        reader.read_u32_array::<2>().unwrap();
        assert_eq!(reader.position(), 8);
        assert_eq!(reader.remaining(), 2);
        assert_eq!(reader.remaining_bytes().len(), 2);

        assert!(reader.ensure(3).is_err());
        reader.read_bytes(2).unwrap();
        assert!(reader.remaining_bytes().is_empty());
    }
}
