//! Error types for glyph layout.
//!
//! Layout, alignment and hit-testing are total and never fail; errors only
//! come from constructing inputs (fonts, bounds, colors) out of bad values.

use std::fmt;

/// Result type alias for glyph layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for glyph layout operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// Font size that is not a finite, strictly positive number.
    InvalidFontSize(f32),
    /// Rectangle with negative or non-finite extents.
    InvalidDimensions { width: f32, height: f32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::InvalidFontSize(size) => write!(f, "invalid font size: {size}"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions: {width}x{height}")
            }
        }
    }
}

impl std::error::Error for Error {}
