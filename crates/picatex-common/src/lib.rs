//! Common utilities for picatex.
//!
//! This crate provides the foundational types shared by the picatex crates:
//!
//! - [`Rgba`] - A single 8-bit-per-channel RGBA pixel
//! - [`SourceImage`] - Validated, borrowed view over row-major RGBA8 pixel data
//! - [`BinaryReader`] - Cursor over encoded texture bytes
//! - [`wire`] - Conversion of 64-bit block codes to the on-disk byte order

mod error;
mod image;
mod reader;

pub mod wire;

pub use error::{Error, Result};
pub use image::{Rgba, SourceImage};
pub use reader::BinaryReader;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
