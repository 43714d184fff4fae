//! Whole-image encoding.

use std::time::Instant;

use picatex_common::SourceImage;
use picatex_quantizer::{BlockQuantizer, Etc1Quantizer};

use crate::block::BlockEncoder;
use crate::layout::BlockLayout;
use crate::{EncodeConfig, EncodedTexture, Error, Result};

/// Encodes RGBA8 images into PICA200 ETC1/ETC1A4 textures.
///
/// # Example
///
/// ```
/// use picatex_etc1::{EncodeConfig, ImageEncoder};
///
/// let pixels = vec![0xFFu8; 16 * 16 * 4];
/// let encoder = ImageEncoder::new(EncodeConfig::new(16, 16).with_alpha(true));
/// let texture = encoder.encode_bytes(&pixels)?;
///
/// assert_eq!(texture.len(), 16 * 16);
/// # Ok::<(), picatex_etc1::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ImageEncoder<Q = Etc1Quantizer> {
    config: EncodeConfig,
    quantizer: Q,
}

impl ImageEncoder<Etc1Quantizer> {
    /// Encoder using the bundled quantizer.
    pub fn new(config: EncodeConfig) -> Self {
        Self::with_quantizer(config, Etc1Quantizer)
    }
}

impl<Q: BlockQuantizer> ImageEncoder<Q> {
    /// Encoder delegating block quantization to `quantizer`.
    pub fn with_quantizer(config: EncodeConfig, quantizer: Q) -> Self {
        Self { config, quantizer }
    }

    #[inline]
    pub const fn config(&self) -> &EncodeConfig {
        &self.config
    }

    #[inline]
    pub const fn quantizer(&self) -> &Q {
        &self.quantizer
    }

    /// Encode `image`, one sub-block after another.
    ///
    /// The image must match the configured dimensions.
    pub fn encode(&self, image: &SourceImage<'_>) -> Result<EncodedTexture> {
        self.check_dimensions(image)?;
        let start = Instant::now();

        let (mut output, layout, encoder) = self.prepare(*image);
        log::debug!(
            "encoding {}x{} {} texture ({} blocks, quality {})",
            self.config.width,
            self.config.height,
            self.config.format(),
            layout.block_count(),
            self.config.quality
        );
        for ((block_x, block_y), out) in layout.origins().zip(output.chunks_exact_mut(encoder.block_size())) {
            encoder.encode_block(block_x, block_y, out);
        }

        log::debug!(
            "encoded {}x{} {} texture ({} blocks) in {:?}",
            self.config.width,
            self.config.height,
            self.config.format(),
            layout.block_count(),
            start.elapsed()
        );
        Ok(self.finish(output))
    }

    /// Encode raw row-major RGBA8 bytes.
    pub fn encode_bytes(&self, data: &[u8]) -> Result<EncodedTexture> {
        let image = SourceImage::new(data, self.config.width, self.config.height)?;
        self.encode(&image)
    }

    pub(crate) fn check_dimensions(&self, image: &SourceImage<'_>) -> Result<()> {
        if image.width() != self.config.width || image.height() != self.config.height {
            return Err(Error::DimensionMismatch {
                width: self.config.width,
                height: self.config.height,
                actual_width: image.width(),
                actual_height: image.height(),
            });
        }
        Ok(())
    }

    /// Zeroed output buffer, the tile layout and a block encoder for `image`.
    pub(crate) fn prepare<'a>(&'a self, image: SourceImage<'a>) -> (Vec<u8>, BlockLayout, BlockEncoder<'a, Q>) {
        let layout = BlockLayout::new(self.config.width, self.config.height);
        let output = vec![0u8; self.config.encoded_size()];
        let encoder = BlockEncoder::new(image, &self.quantizer, self.config.quality, self.config.has_alpha);
        (output, layout, encoder)
    }

    pub(crate) fn finish(&self, output: Vec<u8>) -> EncodedTexture {
        EncodedTexture::new(output, self.config.width, self.config.height, self.config.format())
    }
}

/// Encode raw RGBA8 bytes with the bundled quantizer at the default quality.
pub fn encode_image(data: &[u8], width: u16, height: u16, has_alpha: bool) -> Result<EncodedTexture> {
    ImageEncoder::new(EncodeConfig::new(width, height).with_alpha(has_alpha)).encode_bytes(data)
}
