//! ETC1 texture format variants.

use std::fmt;

use picatex_common::wire::WORD_SIZE;

use crate::layout::BlockLayout;
use crate::{Error, Result};

/// ETC1 texture format as understood by the PICA200 GPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Etc1Format {
    /// Colour only: one 64-bit word per sub-block.
    Etc1,
    /// Colour plus 4-bit alpha: an alpha word followed by the colour word.
    Etc1A4,
}

impl Etc1Format {
    /// PICA texture format ID of ETC1.
    pub const ETC1_ID: u32 = 0x0C;
    /// PICA texture format ID of ETC1A4.
    pub const ETC1A4_ID: u32 = 0x0D;

    /// Format for the given alpha setting.
    #[inline]
    pub const fn from_has_alpha(has_alpha: bool) -> Self {
        if has_alpha {
            Self::Etc1A4
        } else {
            Self::Etc1
        }
    }

    /// Look up a format by its PICA texture format ID.
    pub fn from_format_id(id: u32) -> Result<Self> {
        match id {
            Self::ETC1_ID => Ok(Self::Etc1),
            Self::ETC1A4_ID => Ok(Self::Etc1A4),
            other => Err(Error::UnsupportedFormat(other)),
        }
    }

    /// PICA texture format ID.
    #[inline]
    pub const fn format_id(self) -> u32 {
        match self {
            Self::Etc1 => Self::ETC1_ID,
            Self::Etc1A4 => Self::ETC1A4_ID,
        }
    }

    /// Whether sub-blocks carry an alpha word.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Etc1A4)
    }

    /// Bytes per 4x4 sub-block.
    #[inline]
    pub const fn block_size(self) -> usize {
        match self {
            Self::Etc1 => WORD_SIZE,
            Self::Etc1A4 => 2 * WORD_SIZE,
        }
    }

    /// Encoded size in bytes of a `width` x `height` texture.
    ///
    /// Partial tiles at the edges occupy a full tile.
    pub fn encoded_size(self, width: u16, height: u16) -> usize {
        BlockLayout::new(width, height).block_count() * self.block_size()
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Etc1 => "ETC1",
            Self::Etc1A4 => "ETC1A4",
        }
    }
}

impl fmt::Display for Etc1Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(8, 8)]
    #[case(64, 32)]
    #[case(256, 256)]
    #[case(1024, 8)]
    fn test_encoded_size_multiple_of_eight(#[case] width: u16, #[case] height: u16) {
        let blocks = (width as usize / 4) * (height as usize / 4);
        assert_eq!(Etc1Format::Etc1.encoded_size(width, height), blocks * 8);
        assert_eq!(Etc1Format::Etc1A4.encoded_size(width, height), blocks * 16);
    }

    #[test]
    fn test_encoded_size_partial_tiles() {
        assert_eq!(Etc1Format::Etc1.encoded_size(5, 5), 32);
        assert_eq!(Etc1Format::Etc1A4.encoded_size(5, 5), 64);
        assert_eq!(Etc1Format::Etc1.encoded_size(12, 4), 2 * 4 * 8);
    }

    #[test]
    fn test_format_ids() {
        assert_eq!(Etc1Format::from_format_id(0x0C).unwrap(), Etc1Format::Etc1);
        assert_eq!(Etc1Format::from_format_id(0x0D).unwrap(), Etc1Format::Etc1A4);
        assert!(matches!(
            Etc1Format::from_format_id(0x03),
            Err(Error::UnsupportedFormat(0x03))
        ));
        for format in [Etc1Format::Etc1, Etc1Format::Etc1A4] {
            assert_eq!(Etc1Format::from_format_id(format.format_id()).unwrap(), format);
        }
    }

    #[test]
    fn test_alpha_flag() {
        assert_eq!(Etc1Format::from_has_alpha(true), Etc1Format::Etc1A4);
        assert_eq!(Etc1Format::from_has_alpha(false), Etc1Format::Etc1);
        assert!(Etc1Format::Etc1A4.has_alpha());
        assert_eq!(Etc1Format::Etc1A4.to_string(), "ETC1A4");
    }
}
