//! Picatex - ETC1 texture packing for the PICA200 GPU.
//!
//! This crate provides a unified interface to the picatex crates.
//!
//! # Crates
//!
//! - [`picatex_common`] - Pixel types, source image views and block word byte order
//! - [`picatex_quantizer`] - ETC1 block quantization and block decoding
//! - [`picatex_etc1`] - Tile layout, alpha packing and whole-image encoding
//!
//! # Example
//!
//! ```
//! use picatex::prelude::*;
//!
//! let pixels = vec![0xFFu8; 32 * 32 * 4];
//! let config = EncodeConfig::new(32, 32)
//!     .with_alpha(true)
//!     .with_quality(QuantizerQuality::Medium);
//!
//! let texture = ImageEncoder::new(config).encode_bytes(&pixels)?;
//! assert_eq!(texture.len(), config.encoded_size());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use picatex_common as common;
pub use picatex_etc1 as etc1;
pub use picatex_quantizer as quantizer;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use picatex_common::{Rgba, SourceImage};
    pub use picatex_etc1::{
        decode_image, encode_image, EncodeConfig, EncodedTexture, Etc1Format, ImageEncoder,
    };
    pub use picatex_quantizer::{BlockQuantizer, Etc1Quantizer, PixelBlock, QuantizerQuality};
}

// Re-export commonly used items at the crate root
pub use picatex_etc1::{decode_image, encode_image, ImageEncoder};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
