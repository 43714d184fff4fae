//! Binary reader over encoded texture data.
//!
//! This module provides [`BinaryReader`], a cursor-like type that reads
//! block words from a byte slice without copying.

use crate::wire::{self, WORD_SIZE};
use crate::{Error, Result};

/// A binary reader that provides zero-copy reading from a byte slice.
///
/// # Example
///
/// ```
/// use picatex_common::BinaryReader;
///
/// let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
/// let mut reader = BinaryReader::new(&data);
///
/// assert_eq!(reader.read_word().unwrap(), 0x0807060504030201);
/// assert!(reader.is_empty());
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

    /// Check if there are no more bytes to read.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Read bytes and advance the position.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::UnexpectedEof {
                needed: count,
                available: self.remaining(),
            });
        }
        let bytes = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(bytes)
    }

    /// Read one 64-bit block word stored in wire order.
    #[inline]
    pub fn read_word(&mut self) -> Result<u64> {
        self.read_bytes(WORD_SIZE).map(wire::from_wire_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_words() {
        let data = [
            0x08u8, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01, // 0x0102030405060708
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        let mut reader = BinaryReader::new(&data);

        assert_eq!(reader.read_word().unwrap(), 0x0102_0304_0506_0708);
        assert_eq!(reader.position(), 8);
        assert_eq!(reader.read_word().unwrap(), u64::MAX);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_read_bytes_advances() {
        let data = [0u8; 16];
        let mut reader = BinaryReader::new(&data);

        assert_eq!(reader.read_bytes(12).unwrap().len(), 12);
        assert_eq!(reader.remaining(), 4);
    }

    #[test]
    fn test_eof_error() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = BinaryReader::new(&data);

        match reader.read_word() {
            Err(Error::UnexpectedEof { needed, available }) => {
                assert_eq!(needed, 8);
                assert_eq!(available, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
