//! Custom error types for raster slicing

use std::fmt;
use std::io;

/// Errors raised while decoding, segmenting or exporting an image
#[derive(Debug)]
pub enum SliceError {
    /// I/O error
    IoError(io::Error),
    /// Source bytes could not be decoded into a raster
    DecodeError(String),
    /// A region could not be encoded back into a raster container
    EncodeError(String),
    /// Raster has no alpha channel
    UnsupportedFormat(String),
    /// Raster with a zero width or height
    InvalidDimensions(u32, u32),
    /// Malformed configuration file
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::IoError(e) => write!(f, "I/O error: {}", e),
            SliceError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
            SliceError::EncodeError(msg) => write!(f, "Encode error: {}", msg),
            SliceError::UnsupportedFormat(msg) => write!(f, "Unsupported format: {}", msg),
            SliceError::InvalidDimensions(w, h) => write!(f, "Invalid image dimensions: {}x{}", w, h),
            SliceError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SliceError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for SliceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SliceError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SliceError {
    fn from(error: io::Error) -> Self {
        SliceError::IoError(error)
    }
}

impl From<String> for SliceError {
    fn from(msg: String) -> Self {
        SliceError::GenericError(msg)
    }
}

/// Result type for slicing operations
pub type SliceResult<T> = Result<T, SliceError>;
