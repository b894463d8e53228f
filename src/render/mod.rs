//! Painting laid-out text onto a canvas.
//!
//! [`TextRenderer`] owns the layout state of one text block and drives a
//! [`Canvas`] with positioned glyph runs and decoration lines. The canvas is
//! whatever actually rasterizes; [`DisplayList`] records the calls instead.
//!
//! ```
//! use glyph_layout::{CellTypeface, DisplayList, Font, Rect, Rgba, TextFormatFlags, TextRenderer};
//!
//! let font = Font::new(CellTypeface::new(7).shared(), 20.0).unwrap();
//! let mut renderer = TextRenderer::new();
//! let mut canvas = DisplayList::new();
//! let bounds = Rect::new(0.0, 0.0, 200.0, 40.0);
//!
//! renderer.draw(&mut canvas, "Hello", &font, bounds, Rgba::BLACK, TextFormatFlags::DEFAULT);
//! assert_eq!(canvas.glyphs().count(), 5);
//! ```

mod display_list;

pub use display_list::{DisplayList, DrawCommand};

use std::sync::Arc;

use crate::color::Rgba;
use crate::flags::TextFormatFlags;
use crate::font::{Font, FontCache, TypefaceId};
use crate::geometry::{Point, Rect, Size};
use crate::layout::LayoutState;

/// How glyphs and lines are painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Rgba,
    /// Font size in pixels.
    pub size: f32,
    /// Horizontal skew; non-zero for synthesized italics.
    pub skew_x: f32,
    pub typeface: TypefaceId,
}

/// One glyph at its absolute baseline position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionedGlyph {
    /// Character index in the source text.
    pub index: usize,
    pub character: char,
    pub position: Point,
}

/// Drawing surface.
pub trait Canvas {
    /// Paint a run of glyphs.
    fn draw_glyphs(&mut self, glyphs: &[PositionedGlyph], paint: &Paint);

    /// Paint a straight line.
    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint);
}

/// Measures, draws and hit-tests one text block.
#[derive(Debug)]
pub struct TextRenderer {
    state: LayoutState,
    fonts: Arc<FontCache>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRenderer {
    /// Create a renderer backed by the process-wide font cache.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cache(FontCache::global())
    }

    /// Create a renderer backed by a specific font cache.
    #[must_use]
    pub fn with_cache(fonts: Arc<FontCache>) -> Self {
        Self {
            state: LayoutState::new(),
            fonts,
        }
    }

    /// Layout state of the last pass.
    #[must_use]
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Content size of `text` laid out with the given limits.
    pub fn measure(
        &mut self,
        text: &str,
        font: &Font,
        max_line_width: f32,
        flags: TextFormatFlags,
    ) -> Size {
        self.state
            .layout(text, font, &self.fonts, max_line_width, flags)
    }

    /// Content size of `text` on lines that only break at newlines.
    pub fn measure_unbounded(&mut self, text: &str, font: &Font) -> Size {
        self.measure(text, font, 0.0, TextFormatFlags::DEFAULT)
    }

    /// Lay `text` out within `bounds` and paint it.
    ///
    /// Glyphs go to the canvas in a single run. Underline and strikeout
    /// styles add one line per visual line.
    pub fn draw<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        text: &str,
        font: &Font,
        bounds: Rect,
        color: Rgba,
        flags: TextFormatFlags,
    ) -> Size {
        let size = self.measure(text, font, bounds.width, flags);
        let state = &self.state;
        if state.records().is_empty() {
            return size;
        }

        let paint = Paint {
            color,
            size: font.size(),
            skew_x: font.style().skew_x(),
            typeface: font.typeface().id(),
        };
        let offsets = state.alignment(bounds);
        let top = state.line_origin(&offsets, 0, bounds).y;
        let line_left =
            |line: usize| state.line_origin(&offsets, line, bounds).x;

        let glyphs: Vec<PositionedGlyph> = state
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| record.valid)
            .map(|(index, record)| PositionedGlyph {
                index,
                character: record.character,
                position: Point::new(record.x + line_left(record.line_index), record.y + top),
            })
            .collect();
        if !glyphs.is_empty() {
            canvas.draw_glyphs(&glyphs, &paint);
        }

        let Some(offset) = font.style().decoration_offset(&state.font_metrics()) else {
            return size;
        };
        let mut last_line = None;
        for record in state.records().iter().filter(|r| r.placed) {
            if last_line == Some(record.line_index) {
                continue;
            }
            last_line = Some(record.line_index);
            let width = state
                .line_widths()
                .get(record.line_index)
                .copied()
                .unwrap_or(0.0);
            let x = record.x + line_left(record.line_index);
            let y = record.y + top + offset;
            canvas.draw_line(Point::new(x, y), Point::new(x + width, y), &paint);
        }
        size
    }

    /// Character index a cursor should move to for a click at `point`.
    ///
    /// Lays the text out with the same limits [`draw`](Self::draw) uses.
    pub fn cursor_index_at_point(
        &mut self,
        text: &str,
        font: &Font,
        bounds: Rect,
        flags: TextFormatFlags,
        point: Point,
    ) -> usize {
        self.measure(text, font, bounds.width, flags);
        self.state.cursor_index_at(bounds, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{CellTypeface, FontStyle};

    fn renderer() -> TextRenderer {
        TextRenderer::with_cache(Arc::new(FontCache::new()))
    }

    fn font() -> Font {
        Font::new(CellTypeface::new(3).shared(), 20.0).unwrap()
    }

    const BOUNDS: Rect = Rect::new(10.0, 5.0, 100.0, 60.0);

    #[test]
    fn test_measure_unbounded_ignores_width() {
        let mut r = renderer();
        let size = r.measure_unbounded("abcdefghijklmnopqrstuvwxyz", &font());
        assert_eq!(size, Size::new(260.0, 20.0));
    }

    #[test]
    fn test_draw_positions_glyphs() {
        let mut r = renderer();
        let mut canvas = DisplayList::new();
        r.draw(&mut canvas, "a b", &font(), BOUNDS, Rgba::RED, TextFormatFlags::DEFAULT);

        // Whitespace advances but is not painted.
        let glyphs: Vec<_> = canvas.glyphs().collect();
        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[0].index, 0);
        assert_eq!(glyphs[0].position, Point::new(10.0, 21.0));
        assert_eq!(glyphs[1].index, 2);
        assert_eq!(glyphs[1].position, Point::new(30.0, 21.0));
        assert_eq!(canvas.lines().count(), 0);
    }

    #[test]
    fn test_draw_empty_text_paints_nothing() {
        let mut r = renderer();
        let mut canvas = DisplayList::new();
        let size = r.draw(&mut canvas, "", &font(), BOUNDS, Rgba::RED, TextFormatFlags::DEFAULT);
        assert_eq!(size, Size::ZERO);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_italic_paint_is_skewed() {
        let mut r = renderer();
        let mut canvas = DisplayList::new();
        let italic = font().with_style(FontStyle::Italic);
        r.draw(&mut canvas, "x", &italic, BOUNDS, Rgba::BLACK, TextFormatFlags::DEFAULT);
        match &canvas.commands()[0] {
            DrawCommand::Glyphs { paint, .. } => assert_eq!(paint.skew_x, -0.4),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_underline_once_per_line() {
        let mut r = renderer();
        let mut canvas = DisplayList::new();
        let underlined = font().with_style(FontStyle::Underline);
        r.draw(&mut canvas, "abc\nde", &underlined, BOUNDS, Rgba::BLACK, TextFormatFlags::DEFAULT);

        let lines: Vec<_> = canvas.lines().collect();
        assert_eq!(lines.len(), 2);
        // Baseline 16 + underline offset 2, shifted by the bounds origin.
        assert_eq!(lines[0], (Point::new(10.0, 23.0), Point::new(40.0, 23.0)));
        assert_eq!(lines[1], (Point::new(10.0, 43.0), Point::new(30.0, 43.0)));
    }

    #[test]
    fn test_cursor_uses_bounds_width() {
        let mut r = renderer();
        // Wraps after five characters at width 50.
        let bounds = Rect::new(0.0, 0.0, 50.0, 60.0);
        let index =
            r.cursor_index_at_point("abcdefgh", &font(), bounds, TextFormatFlags::DEFAULT, Point::new(15.0, 25.0));
        assert_eq!(index, 6);
        assert_eq!(r.state().line_count(), 2);
    }
}
