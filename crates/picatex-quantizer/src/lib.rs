//! ETC1 block quantization for picatex.
//!
//! An ETC1 block encodes 16 RGB pixels (a 4x4 block) into a single 64-bit
//! code. The block is split into two halves, either side by side (2x4) or
//! stacked (4x2) depending on the flip bit. Each half gets a base colour and
//! one of eight intensity tables; every pixel then picks one of four
//! modifiers from its half's table.
//!
//! Base colours are stored either:
//! - individually, as two 4-bit-per-channel colours, or
//! - differentially, as a 5-bit-per-channel colour plus a 3-bit signed delta
//!   per channel for the second half.
//!
//! # Code layout
//!
//! Codes use the standard ETC1 bit numbering, where bit 63 is the most
//! significant bit of the first byte of a serialised block:
//!
//! | Bits    | Individual        | Differential          |
//! |---------|-------------------|-----------------------|
//! | 63..56  | R1 (4) R2 (4)     | R1 (5) dR (3)         |
//! | 55..48  | G1 (4) G2 (4)     | G1 (5) dG (3)         |
//! | 47..40  | B1 (4) B2 (4)     | B1 (5) dB (3)         |
//! | 39..34  | table 1 (3), table 2 (3)                  |
//! | 33      | differential flag                         |
//! | 32      | flip flag                                 |
//! | 31..16  | selector MSBs                             |
//! | 15..0   | selector LSBs                             |
//!
//! # Example
//!
//! ```
//! use picatex_common::Rgba;
//! use picatex_quantizer::{decode_block, BlockQuantizer, Etc1Quantizer, QuantizerQuality};
//!
//! let pixels = [Rgba::opaque(200, 40, 90); 16];
//! let code = Etc1Quantizer.quantize(&pixels, QuantizerQuality::Low);
//!
//! for pixel in decode_block(code) {
//!     assert!(pixel.r.abs_diff(200) <= 8);
//!     assert!(pixel.g.abs_diff(40) <= 8);
//!     assert!(pixel.b.abs_diff(90) <= 8);
//! }
//! ```

mod block;
mod error;
mod quality;
mod quantizer;

pub mod tables;

pub use block::{decode_block, BaseColors, Etc1Block};
pub use error::{Error, Result};
pub use quality::QuantizerQuality;
pub use quantizer::{BlockQuantizer, Etc1Quantizer};

use picatex_common::Rgba;

/// Number of pixels in one 4x4 block.
pub const BLOCK_PIXELS: usize = 16;

/// The 16 pixels of a 4x4 block in row-major order (`y * 4 + x`).
pub type PixelBlock = [Rgba; BLOCK_PIXELS];
