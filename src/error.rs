//! Error types for raster-kernel operations.
//!
//! Every error is non-fatal: a failing operation is aborted before it touches
//! the shape history.

use crate::shape::ShapeId;
use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in raster-kernel operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Unparsable or out-of-domain numeric input.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A fill target or pivot search found no matching shape or vertex.
    #[error("No target found: {0}")]
    NoTargetFound(&'static str),

    /// The handle does not refer to a shape in the history.
    #[error("Shape {0} not found")]
    ShapeNotFound(ShapeId),

    /// Invalid dimensions for framebuffer or canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Configuration parsing error with line number.
    #[error("Configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`].
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Reject NaN and infinite inputs.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::invalid(name, format!("expected a finite number, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = Error::invalid("radius", "must not be negative");
        let msg = err.to_string();
        assert!(msg.contains("radius"));
        assert!(msg.contains("must not be negative"));
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("angle", 90.0).unwrap(), 90.0);
        assert!(ensure_finite("angle", f64::NAN).is_err());
        assert!(ensure_finite("angle", f64::INFINITY).is_err());
    }

    #[test]
    fn test_shape_not_found_mentions_handle() {
        let err = Error::ShapeNotFound(ShapeId::from_raw(7));
        assert!(err.to_string().contains('7'));
    }
}
