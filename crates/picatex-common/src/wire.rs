//! Byte order of block codes on the wire.
//!
//! A standard ETC1 block is the big-endian serialisation of its 64-bit code:
//! bit 63 is the most significant bit of the first byte. PICA200 textures
//! store every 64-bit word byte-swapped relative to that, which amounts to a
//! little-endian serialisation of the same code. The 4-bit alpha words of
//! ETC1A4 textures are stored little-endian as well, so both words go through
//! the functions in this module.

use byteorder::{ByteOrder, LittleEndian};

/// Size of one serialised 64-bit block word.
pub const WORD_SIZE: usize = 8;

/// Convert a block code in standard ETC1 bit numbering to its wire bytes.
///
/// # Example
///
/// ```
/// use picatex_common::wire::to_wire_order;
///
/// assert_eq!(
///     to_wire_order(0x0102_0304_0506_0708),
///     [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
/// );
/// ```
#[inline]
pub fn to_wire_order(code: u64) -> [u8; WORD_SIZE] {
    let mut bytes = [0u8; WORD_SIZE];
    LittleEndian::write_u64(&mut bytes, code);
    bytes
}

/// Read a block code back from its wire bytes.
///
/// # Panics
///
/// Panics if `bytes` is shorter than [`WORD_SIZE`].
#[inline]
pub fn from_wire_order(bytes: &[u8]) -> u64 {
    LittleEndian::read_u64(bytes)
}

/// Write `code` in wire order to the first [`WORD_SIZE`] bytes of `out`.
///
/// # Panics
///
/// Panics if `out` is shorter than [`WORD_SIZE`].
#[inline]
pub fn write_word(out: &mut [u8], code: u64) {
    out[..WORD_SIZE].copy_from_slice(&to_wire_order(code));
}
