//! Error types for blockjpeg

use std::fmt;

/// Result type for blockjpeg operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for blockjpeg operations
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid image dimensions
    InvalidDimensions {
        width: usize,
        height: usize,
        reason: &'static str,
    },
    /// Invalid pixel data
    InvalidPixelData {
        expected: usize,
        actual: usize,
    },
    /// A quantization matrix entry is zero
    DegenerateQuantMatrix {
        index: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimensions { width, height, reason } => {
                write!(f, "Invalid dimensions {}x{}: {}", width, height, reason)
            }
            Error::InvalidPixelData { expected, actual } => {
                write!(f, "Expected {} bytes of pixel data, got {}", expected, actual)
            }
            Error::DegenerateQuantMatrix { index } => {
                write!(f, "Quantization matrix entry {} is zero", index)
            }
        }
    }
}

impl std::error::Error for Error {}
