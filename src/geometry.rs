//! Points, sizes and rectangles in pixel space.

use crate::error::{Error, Result};

/// A point in pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a laid-out block.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero-sized block.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rectangle without validation.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle, rejecting negative or non-finite extents.
    pub fn try_new(x: f32, y: f32, width: f32, height: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if !valid(width) || !valid(height) || !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self::new(x, y, width, height))
    }
}
