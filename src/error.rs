//! Custom error types for img2header.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the img2header library.
#[derive(Error, Debug)]
pub enum Error {
    /// The source image could not be opened or decoded.
    #[error("failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Target size is not a positive integer, or is too large to address.
    #[error("invalid size {value:?}: {reason}")]
    InvalidSize { value: String, reason: String },

    /// Invalid rendering parameter.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The header could not be written to its destination.
    #[error("failed to write header to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for img2header operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_size_message() {
        let err = Error::InvalidSize {
            value: "-5".to_string(),
            reason: "must be a positive integer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid size \"-5\": must be a positive integer"
        );
    }

    #[test]
    fn test_write_error_keeps_source() {
        let err = Error::Write {
            path: PathBuf::from("missing/out.h"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("failed to write header to missing/out.h"));
    }
}
