//! Parallel image encoding using rayon.
//!
//! Every sub-block owns a disjoint slice of the output, so blocks are
//! encoded independently and the result is byte-identical to
//! [`ImageEncoder::encode`].

use std::time::Instant;

use picatex_common::SourceImage;
use picatex_quantizer::BlockQuantizer;
use rayon::prelude::*;

use crate::{EncodedTexture, ImageEncoder, Result};

impl<Q: BlockQuantizer + Sync> ImageEncoder<Q> {
    /// Encode `image` on the rayon thread pool.
    pub fn encode_parallel(&self, image: &SourceImage<'_>) -> Result<EncodedTexture> {
        self.check_dimensions(image)?;
        let start = Instant::now();

        let (mut output, layout, encoder) = self.prepare(*image);
        log::debug!(
            "encoding {}x{} {} texture ({} blocks, quality {}, parallel)",
            self.config().width,
            self.config().height,
            self.config().format(),
            layout.block_count(),
            self.config().quality
        );
        output
            .par_chunks_exact_mut(encoder.block_size())
            .enumerate()
            .for_each(|(index, out)| {
                let (block_x, block_y) = layout.block_origin(index);
                encoder.encode_block(block_x, block_y, out);
            });

        log::debug!(
            "encoded {}x{} {} texture ({} blocks, parallel) in {:?}",
            self.config().width,
            self.config().height,
            self.config().format(),
            layout.block_count(),
            start.elapsed()
        );
        Ok(self.finish(output))
    }

    /// Encode raw row-major RGBA8 bytes on the rayon thread pool.
    pub fn encode_bytes_parallel(&self, data: &[u8]) -> Result<EncodedTexture> {
        let config = self.config();
        let image = SourceImage::new(data, config.width, config.height)?;
        self.encode_parallel(&image)
    }
}

#[cfg(test)]
mod tests {
    use crate::{EncodeConfig, ImageEncoder};
    use picatex_quantizer::QuantizerQuality;

    fn noise(width: u16, height: u16) -> Vec<u8> {
        let mut state = 0x2545_F491u32;
        (0..width as usize * height as usize * 4)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state as u8
            })
            .collect()
    }

    #[test]
    fn test_matches_sequential() {
        let data = noise(40, 24);
        let encoder = ImageEncoder::new(
            EncodeConfig::new(40, 24)
                .with_alpha(true)
                .with_quality(QuantizerQuality::Medium),
        );

        let sequential = encoder.encode_bytes(&data).unwrap();
        let parallel = encoder.encode_bytes_parallel(&data).unwrap();
        assert_eq!(sequential, parallel);
    }
}
