//! Error types for the quantizer crate.

use thiserror::Error;

/// Errors that can occur when configuring the quantizer.
#[derive(Debug, Error)]
pub enum Error {
    /// Quality name not recognised.
    #[error("unknown quality level: {0:?} (expected low, medium or high)")]
    UnknownQuality(String),
}

/// Result type for quantizer operations.
pub type Result<T> = std::result::Result<T, Error>;
