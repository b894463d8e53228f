//! Cell-grid typeface driven by Unicode display widths.
//!
//! Every glyph is a whole number of grid columns wide, the way terminal
//! fonts lay out text: Latin letters take one column, ideographs two.

use std::sync::Arc;

use super::typeface::{FontMetrics, GlyphMetrics, Typeface, TypefaceId};
use crate::unicode::{WidthMethod, char_columns, is_line_terminator, is_space};

const DEFAULT_CELL_ASPECT: f32 = 0.5;
const ASCENT: f32 = 0.8;
const LINE_SPACING: f32 = 1.15;
const UNDERLINE_POSITION: f32 = 0.1;
const STRIKEOUT_POSITION: f32 = -0.25;

/// Typeface whose advances are `columns * size * cell_aspect`.
///
/// Control and zero-width characters have no definition. Whitespace has a
/// definition (it advances) but nothing to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellTypeface {
    id: TypefaceId,
    width_method: WidthMethod,
    cell_aspect: f32,
}

impl CellTypeface {
    /// Create a cell typeface with half-em columns.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self {
            id: TypefaceId(id),
            width_method: WidthMethod::WcWidth,
            cell_aspect: DEFAULT_CELL_ASPECT,
        }
    }

    /// Set how East Asian ambiguous characters are measured.
    #[must_use]
    pub const fn with_width_method(mut self, method: WidthMethod) -> Self {
        self.width_method = method;
        self
    }

    /// Set the column width as a fraction of the font size.
    #[must_use]
    pub const fn with_cell_aspect(mut self, aspect: f32) -> Self {
        self.cell_aspect = aspect;
        self
    }

    /// Wrap into a shareable trait object.
    #[must_use]
    pub fn shared(self) -> Arc<dyn Typeface> {
        Arc::new(self)
    }

    fn columns(&self, ch: char) -> Option<usize> {
        match char_columns(ch, self.width_method) {
            Some(0) => None,
            Some(columns) => Some(columns),
            // Tabs and other spacing controls still occupy one cell.
            None if is_space(ch) && !is_line_terminator(ch) => Some(1),
            None => None,
        }
    }
}

impl Typeface for CellTypeface {
    fn id(&self) -> TypefaceId {
        self.id
    }

    fn glyph(&self, ch: char, size: f32) -> Option<GlyphMetrics> {
        let columns = self.columns(ch)?;
        Some(GlyphMetrics {
            advance_x: columns as f32 * size * self.cell_aspect,
            offset_x: 0.0,
            offset_y: size * ASCENT,
            valid: !is_space(ch),
        })
    }

    fn metrics(&self, size: f32) -> FontMetrics {
        FontMetrics {
            line_spacing: size * LINE_SPACING,
            leading: 0.0,
            underline_position: Some(size * UNDERLINE_POSITION),
            strikeout_position: Some(size * STRIKEOUT_POSITION),
        }
    }
}
