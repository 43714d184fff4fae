//! ETC1 constants: intensity tables, field offsets and colour precision helpers.

/// Intensity modifier magnitudes `[small, large]` for each of the eight tables.
pub const INTENSITY_TABLES: [[i32; 2]; 8] = [
    [2, 8],
    [5, 17],
    [9, 29],
    [13, 42],
    [18, 60],
    [24, 80],
    [33, 106],
    [47, 183],
];

/// Bit offset of the first 4-bit base colour channel (R1) in individual mode.
pub const INDIVIDUAL_BASE1_OFFSET: u32 = 60;
/// Bit offset of the second 4-bit base colour channel (R2) in individual mode.
pub const INDIVIDUAL_BASE2_OFFSET: u32 = 56;
/// Bit offset of the 5-bit base colour channel (R1) in differential mode.
pub const DIFFERENTIAL_BASE_OFFSET: u32 = 59;
/// Bit offset of the 3-bit signed delta (dR) in differential mode.
pub const DIFFERENTIAL_DELTA_OFFSET: u32 = 56;
/// Distance between successive colour channels.
pub const CHANNEL_STRIDE: u32 = 8;

/// Bit offset of the first half's table index.
pub const TABLE1_OFFSET: u32 = 37;
/// Bit offset of the second half's table index.
pub const TABLE2_OFFSET: u32 = 34;
/// Differential mode flag.
pub const DIFFERENTIAL_BIT: u32 = 33;
/// Flip flag: set when the halves are stacked (4x2) instead of side by side.
pub const FLIP_BIT: u32 = 32;
/// Bit offset of the selector MSB plane; the LSB plane starts at bit 0.
pub const SELECTOR_MSB_OFFSET: u32 = 16;

/// Smallest representable differential delta.
pub const DELTA_MIN: i32 = -4;
/// Largest representable differential delta.
pub const DELTA_MAX: i32 = 3;

/// Modifier applied to a base colour for a 2-bit selector.
///
/// Selector values follow the bit planes of the block code:
/// `0 => +small`, `1 => +large`, `2 => -small`, `3 => -large`.
#[inline]
pub const fn modifier(table: u8, selector: u8) -> i32 {
    let [small, large] = INTENSITY_TABLES[(table & 7) as usize];
    match selector & 3 {
        0 => small,
        1 => large,
        2 => -small,
        _ => -large,
    }
}

/// Expand a 4-bit channel to 8 bits.
#[inline]
pub const fn expand4(value: u8) -> u8 {
    ((value & 0xF) << 4) | (value & 0xF)
}

/// Expand a 5-bit channel to 8 bits.
#[inline]
pub const fn expand5(value: u8) -> u8 {
    ((value & 0x1F) << 3) | ((value & 0x1F) >> 2)
}

/// Quantize an 8-bit channel to 4 bits with rounding.
#[inline]
pub const fn quantize4(value: u8) -> u8 {
    ((value as u32 * 15 + 127) / 255) as u8
}

/// Quantize an 8-bit channel to 5 bits with rounding.
#[inline]
pub const fn quantize5(value: u8) -> u8 {
    ((value as u32 * 31 + 127) / 255) as u8
}
