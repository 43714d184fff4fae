//! Error types for ETC1 texture handling.

use thiserror::Error;

/// Errors that can occur when encoding or decoding ETC1 textures.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] picatex_common::Error),

    /// Image dimensions differ from the encoder configuration.
    #[error("image is {actual_width}x{actual_height} but the encoder is configured for {width}x{height}")]
    DimensionMismatch {
        width: u16,
        height: u16,
        actual_width: u16,
        actual_height: u16,
    },

    /// Encoded data is shorter than the dimensions require.
    #[error("encoded data too short: expected {expected} bytes, got {actual}")]
    DataTooShort { expected: usize, actual: usize },

    /// Texture format ID is not an ETC1 variant.
    #[error("unsupported texture format: {0:#04x}")]
    UnsupportedFormat(u32),
}

/// Result type for ETC1 operations.
pub type Result<T> = std::result::Result<T, Error>;
