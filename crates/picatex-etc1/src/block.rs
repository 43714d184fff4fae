//! Encoding of a single 4x4 sub-block.

use picatex_common::wire::{self, WORD_SIZE};
use picatex_common::SourceImage;
use picatex_quantizer::{BlockQuantizer, PixelBlock, QuantizerQuality};

use crate::alpha::pack_alpha;
use crate::layout::image_row;

/// Collect the 16 pixels of the sub-block at block-space `(block_x, block_y)`.
///
/// Pixels come out row-major (`y * 4 + x`). Block row 0 samples the image row
/// furthest from the top of the block's range, so the block is vertically
/// mirrored relative to the image. Pixels past any edge are transparent black.
pub fn gather_pixels(image: &SourceImage<'_>, block_x: u32, block_y: u32) -> PixelBlock {
    let (block_x, block_y) = (block_x as i32, block_y as i32);
    let height = image.height();

    std::array::from_fn(|i| {
        let (x, y) = ((i % 4) as i32, (i / 4) as i32);
        image.get_or_transparent(block_x + x, image_row(height, block_y + y))
    })
}

/// Encodes sub-blocks of one image into their wire representation.
///
/// Holds nothing mutable, so one encoder can serve any number of threads as
/// long as the quantizer allows it.
#[derive(Debug)]
pub struct BlockEncoder<'a, Q> {
    image: SourceImage<'a>,
    quantizer: &'a Q,
    quality: QuantizerQuality,
    has_alpha: bool,
}

impl<'a, Q: BlockQuantizer> BlockEncoder<'a, Q> {
    pub fn new(image: SourceImage<'a>, quantizer: &'a Q, quality: QuantizerQuality, has_alpha: bool) -> Self {
        Self {
            image,
            quantizer,
            quality,
            has_alpha,
        }
    }

    /// Bytes written per sub-block.
    #[inline]
    pub const fn block_size(&self) -> usize {
        if self.has_alpha {
            2 * WORD_SIZE
        } else {
            WORD_SIZE
        }
    }

    /// Encode the sub-block at block-space `(block_x, block_y)` into `out`.
    ///
    /// With alpha, the alpha word comes first and the colour word follows.
    /// Both are written in wire order.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than [`block_size`](Self::block_size).
    pub fn encode_block(&self, block_x: u32, block_y: u32, out: &mut [u8]) {
        debug_assert!(out.len() >= self.block_size());

        let out = if self.has_alpha {
            wire::write_word(out, pack_alpha(&self.image, block_x, block_y));
            &mut out[WORD_SIZE..]
        } else {
            out
        };

        let pixels = gather_pixels(&self.image, block_x, block_y);
        let code = self.quantizer.quantize(&pixels, self.quality);
        wire::write_word(out, code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picatex_common::Rgba;
    use std::cell::RefCell;

    /// Records what it was given and answers with a fixed code.
    struct Recording {
        code: u64,
        seen: RefCell<Vec<PixelBlock>>,
    }

    impl Recording {
        fn new(code: u64) -> Self {
            Self {
                code,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl BlockQuantizer for Recording {
        fn quantize(&self, pixels: &PixelBlock, _quality: QuantizerQuality) -> u64 {
            self.seen.borrow_mut().push(*pixels);
            self.code
        }
    }

    /// Image whose red and green channels hold the pixel coordinate.
    fn coordinates(width: u16, height: u16) -> Vec<u8> {
        let mut data = Vec::new();
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[x as u8, y as u8, 0, 0xFF]);
            }
        }
        data
    }

    #[test]
    fn test_gather_mirrors_rows() {
        let data = coordinates(8, 8);
        let image = SourceImage::new(&data, 8, 8).unwrap();
        let pixels = gather_pixels(&image, 0, 0);

        // Block (0, 0) starts at the bottom-left of the image.
        assert_eq!(pixels[0], Rgba::new(0, 7, 0, 0xFF));
        assert_eq!(pixels[3], Rgba::new(3, 7, 0, 0xFF));
        assert_eq!(pixels[4], Rgba::new(0, 6, 0, 0xFF));
        assert_eq!(pixels[15], Rgba::new(3, 4, 0, 0xFF));

        let pixels = gather_pixels(&image, 4, 4);
        assert_eq!(pixels[0], Rgba::new(4, 3, 0, 0xFF));
        assert_eq!(pixels[15], Rgba::new(7, 0, 0, 0xFF));
    }

    #[test]
    fn test_gather_pads_outside_image() {
        let data = coordinates(5, 5);
        let image = SourceImage::new(&data, 5, 5).unwrap();
        let pixels = gather_pixels(&image, 4, 4);

        // Only block (0, 0) maps inside: image (4, 0).
        assert_eq!(pixels[0], Rgba::new(4, 0, 0, 0xFF));
        assert!(pixels[1..].iter().all(|p| *p == Rgba::TRANSPARENT));
    }

    #[test]
    fn test_colour_only_layout() {
        let data = coordinates(8, 8);
        let image = SourceImage::new(&data, 8, 8).unwrap();
        let quantizer = Recording::new(0x0102_0304_0506_0708);
        let encoder = BlockEncoder::new(image, &quantizer, QuantizerQuality::Low, false);

        let mut out = [0u8; 8];
        encoder.encode_block(0, 0, &mut out);

        assert_eq!(encoder.block_size(), 8);
        assert_eq!(out, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
        assert_eq!(quantizer.seen.borrow().len(), 1);
    }

    #[test]
    fn test_alpha_word_first() {
        let data = vec![0xFFu8; 8 * 8 * 4];
        let image = SourceImage::new(&data, 8, 8).unwrap();
        let quantizer = Recording::new(0x0102_0304_0506_0708);
        let encoder = BlockEncoder::new(image, &quantizer, QuantizerQuality::Low, true);

        let mut out = [0u8; 16];
        encoder.encode_block(4, 0, &mut out);

        assert_eq!(encoder.block_size(), 16);
        assert_eq!(&out[..8], &[0xFF; 8]);
        assert_eq!(&out[8..], &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_quantizer_sees_block_pixels() {
        let data = coordinates(8, 8);
        let image = SourceImage::new(&data, 8, 8).unwrap();
        let quantizer = Recording::new(0);
        let encoder = BlockEncoder::new(image, &quantizer, QuantizerQuality::Medium, true);

        let mut out = [0u8; 16];
        encoder.encode_block(4, 4, &mut out);

        assert_eq!(quantizer.seen.borrow()[0], gather_pixels(&image, 4, 4));
    }
}
