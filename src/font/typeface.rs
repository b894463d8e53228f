//! Typeface capability and font values.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Identity of a typeface. Two typefaces with the same id share cache
/// entries, so ids must be unique per distinct set of metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypefaceId(pub u64);

/// Horizontal metrics of one glyph at a given size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphMetrics {
    /// Pen advance after drawing the glyph.
    pub advance_x: f32,
    /// Offset from the pen position to the glyph origin.
    pub offset_x: f32,
    /// Offset from the line top to the glyph baseline.
    pub offset_y: f32,
    /// Whether the definition has something to draw.
    pub valid: bool,
}

/// Per-size metrics shared by every line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FontMetrics {
    /// Recommended distance between baselines; drives padding.
    pub line_spacing: f32,
    /// External leading added when requested by flags.
    pub leading: f32,
    /// Underline offset below the baseline.
    pub underline_position: Option<f32>,
    /// Strikeout offset relative to the baseline (negative is above).
    pub strikeout_position: Option<f32>,
}

/// Source of glyph metrics.
///
/// Implementations must be cheap to query repeatedly and safe to share
/// between threads; results are cached by [`GlyphCache`](super::GlyphCache).
pub trait Typeface: Send + Sync + fmt::Debug {
    /// Stable identity used as part of cache keys.
    fn id(&self) -> TypefaceId;

    /// Metrics for `ch` at `size`, or `None` when the typeface has no
    /// definition for it.
    fn glyph(&self, ch: char, size: f32) -> Option<GlyphMetrics>;

    /// Line metrics at `size`.
    fn metrics(&self, size: f32) -> FontMetrics;
}

/// Font style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Regular,
    /// Synthesized by skewing glyphs.
    Italic,
    /// One line under each visual line.
    Underline,
    /// One line through each visual line.
    Strikeout,
}

impl FontStyle {
    /// Horizontal skew applied when painting.
    #[must_use]
    pub const fn skew_x(self) -> f32 {
        match self {
            Self::Italic => -0.4,
            _ => 0.0,
        }
    }

    /// Offset of this style's decoration line from the baseline, if any.
    #[must_use]
    pub fn decoration_offset(self, metrics: &FontMetrics) -> Option<f32> {
        match self {
            Self::Underline => Some(metrics.underline_position.unwrap_or(0.0)),
            Self::Strikeout => Some(metrics.strikeout_position.unwrap_or(0.0)),
            Self::Regular | Self::Italic => None,
        }
    }
}

/// Cache key: typeface identity and size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub typeface: TypefaceId,
    size_bits: u32,
}

impl FontKey {
    /// Create a key for `typeface` at `size`.
    #[must_use]
    pub fn new(typeface: TypefaceId, size: f32) -> Self {
        Self {
            typeface,
            size_bits: size.to_bits(),
        }
    }

    /// Font size in pixels.
    #[must_use]
    pub fn size(self) -> f32 {
        f32::from_bits(self.size_bits)
    }
}

/// A typeface at a size and style.
#[derive(Clone, Debug)]
pub struct Font {
    typeface: Arc<dyn Typeface>,
    size: f32,
    style: FontStyle,
}

impl Font {
    /// Create a regular font. `size` must be finite and positive.
    pub fn new(typeface: Arc<dyn Typeface>, size: f32) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(Error::InvalidFontSize(size));
        }
        Ok(Self {
            typeface,
            size,
            style: FontStyle::Regular,
        })
    }

    /// Return this font with a different style.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn typeface(&self) -> &Arc<dyn Typeface> {
        &self.typeface
    }

    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[must_use]
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Key of the glyph cache serving this font.
    #[must_use]
    pub fn key(&self) -> FontKey {
        FontKey::new(self.typeface.id(), self.size)
    }

    /// Distance between consecutive visual lines.
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.size
    }
}
