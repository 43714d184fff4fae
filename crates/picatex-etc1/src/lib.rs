//! ETC1 and ETC1A4 texture packing for the PICA200 GPU.
//!
//! This crate turns RGBA8 images into the block layout the PICA200 samples
//! from:
//!
//! - The image is covered by 8x8 tiles in row-major order, each holding four
//!   4x4 sub-blocks (top-left, top-right, bottom-left, bottom-right).
//! - Block space is vertically mirrored: block row 0 is the bottom row of the
//!   source image.
//! - Each sub-block is one 64-bit ETC1 colour word, preceded by a 64-bit
//!   4-bit-per-pixel alpha word in ETC1A4.
//! - Both words are stored in wire order (see [`picatex_common::wire`]).
//!
//! Pixels past the right or bottom edge of images whose sides are not
//! multiples of 8 are encoded as transparent black.
//!
//! # Example
//!
//! ```
//! use picatex_etc1::{decode_image, encode_image, Etc1Format};
//!
//! let pixels = [0x40u8, 0x80, 0xC0, 0xFF].repeat(8 * 8);
//! let texture = encode_image(&pixels, 8, 8, false)?;
//! assert_eq!(texture.len(), 32);
//!
//! let decoded = decode_image(&texture, 8, 8, Etc1Format::Etc1)?;
//! assert_eq!(decoded.len(), pixels.len());
//! # Ok::<(), picatex_etc1::Error>(())
//! ```
//!
//! # Features
//!
//! - `parallel` - `ImageEncoder::encode_parallel` using rayon
//! - `serde` - Serialize/deserialize [`EncodeConfig`]

mod alpha;
mod block;
mod buffer;
mod config;
mod decode;
mod encoder;
mod error;
mod format;

#[cfg(feature = "parallel")]
mod parallel;

pub mod layout;

pub use alpha::{alpha_at, pack_alpha};
pub use block::{gather_pixels, BlockEncoder};
pub use buffer::EncodedTexture;
pub use config::EncodeConfig;
pub use decode::decode_image;
pub use encoder::{encode_image, ImageEncoder};
pub use error::{Error, Result};
pub use format::Etc1Format;
