//! 4-bit alpha packing for ETC1A4.
//!
//! Each sub-block's alpha word holds 16 nibbles, least-significant first.
//! Nibble `x * 4 + y` holds the alpha of the block pixel at column `x`,
//! row `y`: the traversal is transposed relative to the row-major colour
//! pixels handed to the quantizer.

use picatex_common::SourceImage;

use crate::layout::image_row;

/// Pack the alpha of the sub-block at block-space `(block_x, block_y)`.
///
/// Alpha is truncated to its high nibble. Pixels outside the image
/// contribute 0.
pub fn pack_alpha(image: &SourceImage<'_>, block_x: u32, block_y: u32) -> u64 {
    let (block_x, block_y) = (block_x as i32, block_y as i32);
    let mut code = 0u64;
    let mut count = 0u32;

    for y in 0..4 {
        for x in 0..4 {
            // Axes swapped: the outer loop walks columns.
            let pixel = image.get_or_transparent(block_x + y, image_row(image.height(), block_y + x));
            code |= u64::from(pixel.a >> 4) << (count * 4);
            count += 1;
        }
    }

    code
}

/// Expanded 8-bit alpha of the block pixel at column `x`, row `y`.
#[inline]
pub fn alpha_at(code: u64, x: usize, y: usize) -> u8 {
    (((code >> ((x * 4 + y) * 4)) & 0xF) as u8) * 0x11
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x4 image whose alpha high nibble encodes the coordinate: `x * 4 + y`.
    fn coordinate_alpha() -> Vec<u8> {
        let mut data = Vec::new();
        for y in 0..4u8 {
            for x in 0..4u8 {
                data.extend_from_slice(&[0, 0, 0, (x * 4 + y) << 4]);
            }
        }
        data
    }

    #[test]
    fn test_transposed_nibble_order() {
        let data = coordinate_alpha();
        let image = SourceImage::new(&data, 4, 4).unwrap();
        let code = pack_alpha(&image, 0, 0);

        // Nibble (col * 4 + row) holds the pixel at block column `col`,
        // block row `row`, which is image (col, 3 - row).
        for col in 0..4u64 {
            for row in 0..4u64 {
                let nibble = (code >> ((col * 4 + row) * 4)) & 0xF;
                assert_eq!(nibble, col * 4 + (3 - row), "col {col} row {row}");
            }
        }
    }

    #[test]
    fn test_truncates_low_nibble() {
        let mut data = vec![0u8; 4 * 4 * 4];
        for pixel in data.chunks_exact_mut(4) {
            pixel[3] = 0x8F;
        }
        let image = SourceImage::new(&data, 4, 4).unwrap();

        assert_eq!(pack_alpha(&image, 0, 0), 0x8888_8888_8888_8888);
    }

    #[test]
    fn test_opaque_block() {
        let data = vec![0xFFu8; 8 * 8 * 4];
        let image = SourceImage::new(&data, 8, 8).unwrap();

        assert_eq!(pack_alpha(&image, 4, 4), u64::MAX);
    }

    #[test]
    fn test_out_of_bounds_is_zero() {
        let data = vec![0xFFu8; 5 * 5 * 4];
        let image = SourceImage::new(&data, 5, 5).unwrap();

        // Block (4, 0) covers image columns 4..8; only column 4 exists.
        let code = pack_alpha(&image, 4, 0);
        for col in 0..4usize {
            for row in 0..4usize {
                let expected = if col == 0 { 0xF } else { 0 };
                assert_eq!((code >> ((col * 4 + row) * 4)) & 0xF, expected, "col {col} row {row}");
            }
        }

        // Block (0, 4) covers block rows 4..8; only row 4 (image row 0) exists.
        let code = pack_alpha(&image, 0, 4);
        for col in 0..4usize {
            for row in 0..4usize {
                let expected = if row == 0 { 0xF } else { 0 };
                assert_eq!((code >> ((col * 4 + row) * 4)) & 0xF, expected, "col {col} row {row}");
            }
        }
    }

    #[test]
    fn test_alpha_at_inverts_packing() {
        let data = coordinate_alpha();
        let image = SourceImage::new(&data, 4, 4).unwrap();
        let code = pack_alpha(&image, 0, 0);

        for y in 0..4usize {
            for x in 0..4usize {
                assert_eq!(alpha_at(code, x, y), (x * 4 + 3 - y) as u8 * 0x11);
            }
        }
    }
}
