//! Encoder configuration.

use picatex_quantizer::QuantizerQuality;

use crate::Etc1Format;

/// Immutable settings for one encode.
///
/// Width and height are expected to be multiples of 8; other sizes are
/// accepted and the partial tiles are padded with transparent black.
///
/// # Example
///
/// ```
/// use picatex_etc1::{EncodeConfig, Etc1Format};
/// use picatex_quantizer::QuantizerQuality;
///
/// let config = EncodeConfig::new(64, 32)
///     .with_alpha(true)
///     .with_quality(QuantizerQuality::High);
///
/// assert_eq!(config.format(), Etc1Format::Etc1A4);
/// assert_eq!(config.encoded_size(), 16 * 8 * 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeConfig {
    /// Image width in pixels.
    pub width: u16,
    /// Image height in pixels.
    pub height: u16,
    /// Emit a 4-bit alpha word before every colour word.
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_alpha: bool,
    /// Quantizer effort.
    #[cfg_attr(feature = "serde", serde(default))]
    pub quality: QuantizerQuality,
}

impl EncodeConfig {
    /// Opaque ETC1 at the fastest quality.
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            has_alpha: false,
            quality: QuantizerQuality::Low,
        }
    }

    /// Set whether alpha is encoded.
    pub const fn with_alpha(mut self, has_alpha: bool) -> Self {
        self.has_alpha = has_alpha;
        self
    }

    /// Set the quantizer quality.
    pub const fn with_quality(mut self, quality: QuantizerQuality) -> Self {
        self.quality = quality;
        self
    }

    /// Output format implied by the alpha setting.
    #[inline]
    pub const fn format(&self) -> Etc1Format {
        Etc1Format::from_has_alpha(self.has_alpha)
    }

    /// Size in bytes of the encoded texture.
    pub fn encoded_size(&self) -> usize {
        self.format().encoded_size(self.width, self.height)
    }
}
