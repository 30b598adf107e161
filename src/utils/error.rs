// src/utils/error.rs

use thiserror::Error;

/// The error type for every fallible operation in the library.
///
/// Only resource failures end up here: I/O, allocation and malformed files.
/// Misuse of the pure image operations (mismatched sizes, zero dimensions)
/// is a programming error and panics instead.
#[derive(Error, Debug)]
pub enum ImageError {
    /// An error occurred during I/O operations (e.g., file not found, permission denied).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file does not start with the binary PBM magic number `P4`.
    #[error("Invalid file format: expected binary PBM magic \"P4\"")]
    BadMagic,

    /// The width or height field of a PBM header is missing or out of range.
    #[error("Invalid {field}: {reason}")]
    InvalidDimension { field: &'static str, reason: String },

    /// The height field is not followed by a single whitespace byte.
    #[error("Whitespace expected after the PBM header")]
    MissingSeparator,

    /// The file ended before all scanlines could be read.
    #[error("Reading pixels: scanline {row} is truncated")]
    TruncatedPixels { row: u32 },

    /// The requested dimensions exceed what the library is willing to allocate.
    #[error("Image dimensions ({width}x{height}) are too large")]
    TooLarge { width: u32, height: u32 },

    /// Reserving storage for an image failed.
    #[error("Allocation failed: {0}")]
    Allocation(String),

    /// A run-length row does not satisfy the row invariants.
    #[error("Invalid RLE row: {0}")]
    InvalidRow(String),
}

/// A specialized `Result` type for image operations.
pub type Result<T> = std::result::Result<T, ImageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err::<(), _>(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(matches!(err, ImageError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn test_dimension_message() {
        let err = ImageError::InvalidDimension {
            field: "width",
            reason: "must be positive".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid width: must be positive");
    }
}
