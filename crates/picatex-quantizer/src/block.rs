//! ETC1 block representation, packing and decoding.

use picatex_common::Rgba;

use crate::tables::{
    expand4, expand5, modifier, CHANNEL_STRIDE, DIFFERENTIAL_BASE_OFFSET, DIFFERENTIAL_BIT,
    DIFFERENTIAL_DELTA_OFFSET, FLIP_BIT, INDIVIDUAL_BASE1_OFFSET, INDIVIDUAL_BASE2_OFFSET,
    SELECTOR_MSB_OFFSET, TABLE1_OFFSET, TABLE2_OFFSET,
};
use crate::{PixelBlock, BLOCK_PIXELS};

/// Base colours of the two halves of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseColors {
    /// Two independent 4-bit-per-channel colours.
    Individual([u8; 3], [u8; 3]),
    /// A 5-bit-per-channel colour and a signed delta (-4..=3) per channel
    /// giving the second half's colour.
    Differential([u8; 3], [i8; 3]),
}

impl BaseColors {
    /// Whether the colours use differential mode.
    pub const fn is_differential(&self) -> bool {
        matches!(self, Self::Differential(..))
    }

    /// Both base colours expanded to 8 bits per channel.
    ///
    /// A differential second colour that falls outside the 5-bit range is
    /// clamped.
    pub fn expand(&self) -> [[u8; 3]; 2] {
        match *self {
            Self::Individual(first, second) => [first.map(expand4), second.map(expand4)],
            Self::Differential(base, delta) => {
                let mut second = [0u8; 3];
                for channel in 0..3 {
                    let value = (i32::from(base[channel] & 0x1F) + i32::from(delta[channel])).clamp(0, 31);
                    second[channel] = value as u8;
                }
                [base.map(expand5), second.map(expand5)]
            }
        }
    }
}

/// Unpacked fields of an ETC1 block code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Etc1Block {
    /// `false`: halves are the left and right 2x4 columns.
    /// `true`: halves are the top and bottom 4x2 rows.
    pub flip: bool,
    /// Base colours of both halves.
    pub colors: BaseColors,
    /// Intensity table index (0..8) of each half.
    pub tables: [u8; 2],
    /// 2-bit selector per pixel, row-major (`y * 4 + x`).
    pub selectors: [u8; BLOCK_PIXELS],
}

impl Etc1Block {
    /// Which half (0 or 1) the pixel at `(x, y)` belongs to.
    #[inline]
    pub const fn half_of(flip: bool, x: usize, y: usize) -> usize {
        if flip {
            (y >= 2) as usize
        } else {
            (x >= 2) as usize
        }
    }

    /// Pack the fields into a 64-bit code in standard ETC1 bit numbering.
    pub fn pack(&self) -> u64 {
        let mut code = 0u64;

        for channel in 0..3u32 {
            let shift = channel * CHANNEL_STRIDE;
            match self.colors {
                BaseColors::Individual(first, second) => {
                    code |= u64::from(first[channel as usize] & 0xF) << (INDIVIDUAL_BASE1_OFFSET - shift);
                    code |= u64::from(second[channel as usize] & 0xF) << (INDIVIDUAL_BASE2_OFFSET - shift);
                }
                BaseColors::Differential(base, delta) => {
                    code |= u64::from(base[channel as usize] & 0x1F) << (DIFFERENTIAL_BASE_OFFSET - shift);
                    code |= u64::from(delta[channel as usize] as u8 & 0x7) << (DIFFERENTIAL_DELTA_OFFSET - shift);
                }
            }
        }

        code |= u64::from(self.tables[0] & 7) << TABLE1_OFFSET;
        code |= u64::from(self.tables[1] & 7) << TABLE2_OFFSET;
        if self.colors.is_differential() {
            code |= 1u64 << DIFFERENTIAL_BIT;
        }
        if self.flip {
            code |= 1u64 << FLIP_BIT;
        }

        // Selector planes are indexed column-major.
        for y in 0..4 {
            for x in 0..4 {
                let selector = u64::from(self.selectors[y * 4 + x]);
                let bit = x * 4 + y;
                code |= (selector & 1) << bit;
                code |= ((selector >> 1) & 1) << (SELECTOR_MSB_OFFSET as usize + bit);
            }
        }

        code
    }

    /// Unpack a 64-bit code in standard ETC1 bit numbering.
    pub fn unpack(code: u64) -> Self {
        let field = |offset: u32, mask: u64| ((code >> offset) & mask) as u8;

        let colors = if (code >> DIFFERENTIAL_BIT) & 1 == 1 {
            let mut base = [0u8; 3];
            let mut delta = [0i8; 3];
            for channel in 0..3u32 {
                let shift = channel * CHANNEL_STRIDE;
                base[channel as usize] = field(DIFFERENTIAL_BASE_OFFSET - shift, 0x1F);
                // Sign-extend the 3-bit delta.
                delta[channel as usize] = ((field(DIFFERENTIAL_DELTA_OFFSET - shift, 0x7) << 5) as i8) >> 5;
            }
            BaseColors::Differential(base, delta)
        } else {
            let mut first = [0u8; 3];
            let mut second = [0u8; 3];
            for channel in 0..3u32 {
                let shift = channel * CHANNEL_STRIDE;
                first[channel as usize] = field(INDIVIDUAL_BASE1_OFFSET - shift, 0xF);
                second[channel as usize] = field(INDIVIDUAL_BASE2_OFFSET - shift, 0xF);
            }
            BaseColors::Individual(first, second)
        };

        let mut selectors = [0u8; BLOCK_PIXELS];
        for y in 0..4 {
            for x in 0..4 {
                let bit = (x * 4 + y) as u32;
                let lsb = field(bit, 1);
                let msb = field(SELECTOR_MSB_OFFSET + bit, 1);
                selectors[y * 4 + x] = (msb << 1) | lsb;
            }
        }

        Self {
            flip: (code >> FLIP_BIT) & 1 == 1,
            colors,
            tables: [field(TABLE1_OFFSET, 7), field(TABLE2_OFFSET, 7)],
            selectors,
        }
    }

    /// Reconstruct the 16 pixels of the block, row-major, fully opaque.
    pub fn decode(&self) -> PixelBlock {
        let bases = self.colors.expand();
        let mut pixels = [Rgba::opaque(0, 0, 0); BLOCK_PIXELS];

        for y in 0..4 {
            for x in 0..4 {
                let half = Self::half_of(self.flip, x, y);
                let delta = modifier(self.tables[half], self.selectors[y * 4 + x]);
                let [r, g, b] = bases[half].map(|c| (i32::from(c) + delta).clamp(0, 255) as u8);
                pixels[y * 4 + x] = Rgba::opaque(r, g, b);
            }
        }

        pixels
    }
}

/// Decode a 64-bit ETC1 code (standard bit numbering) into 16 row-major pixels.
pub fn decode_block(code: u64) -> PixelBlock {
    Etc1Block::unpack(code).decode()
}
