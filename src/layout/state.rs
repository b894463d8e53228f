//! Layout state for one text block.

use std::fmt::Write;

use crate::event::{LogLevel, emit_log};
use crate::flags::TextFormatFlags;
use crate::font::{Font, FontCache, FontKey, FontMetrics, FontStyle};
use crate::geometry::{Point, Rect, Size};

use super::align::{AlignmentOffsets, resolve};
use super::breaker::break_lines;
use super::hit::hit_test;
use super::record::CharacterRecord;

/// Everything a layout pass depends on. A pass is reused as long as the
/// next request matches exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub text: String,
    pub flags: TextFormatFlags,
    pub max_line_width: f32,
    pub font: FontKey,
    pub style: FontStyle,
}

impl LayoutConfig {
    fn matches(&self, text: &str, font: &Font, max_line_width: f32, flags: TextFormatFlags) -> bool {
        self.flags == flags
            && self.max_line_width.to_bits() == max_line_width.to_bits()
            && self.font == font.key()
            && self.style == font.style()
            && self.text == text
    }
}

/// Result of the last layout pass over one text block.
///
/// Not shareable across concurrent passes; give every text block its own
/// state.
#[derive(Clone, Debug, Default)]
pub struct LayoutState {
    config: Option<LayoutConfig>,
    records: Vec<CharacterRecord>,
    line_widths: Vec<f32>,
    content_size: Size,
    line_height: f32,
    font_metrics: FontMetrics,
    passes: u64,
}

impl LayoutState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay `text` out, reusing the previous pass if nothing changed.
    ///
    /// `max_line_width <= 0` means lines are never broken for width.
    /// Returns the content size.
    pub fn layout(
        &mut self,
        text: &str,
        font: &Font,
        fonts: &FontCache,
        max_line_width: f32,
        flags: TextFormatFlags,
    ) -> Size {
        if self
            .config
            .as_ref()
            .is_some_and(|config| config.matches(text, font, max_line_width, flags))
        {
            return self.content_size;
        }

        let glyphs = fonts.get(font);
        glyphs.prepare(text);
        let chars: Vec<char> = text.chars().collect();
        let line_height = font.line_height();
        let result = break_lines(&chars, &glyphs, line_height, max_line_width, flags);

        self.records = result.records;
        self.line_widths = result.line_widths;
        self.line_height = line_height;
        self.font_metrics = glyphs.metrics();
        self.content_size = self.measure_content(flags);
        self.config = Some(LayoutConfig {
            text: text.to_string(),
            flags,
            max_line_width,
            font: font.key(),
            style: font.style(),
        });
        self.passes += 1;

        emit_log(
            LogLevel::Debug,
            &format!(
                "laid out {} chars into {} lines, content {}x{}",
                self.records.len(),
                self.line_widths.len(),
                self.content_size.width,
                self.content_size.height
            ),
        );
        self.content_size
    }

    fn measure_content(&self, flags: TextFormatFlags) -> Size {
        if self.line_widths.is_empty() {
            return Size::ZERO;
        }
        let longest = self.line_widths.iter().copied().fold(0.0_f32, f32::max);
        let (left, right) = flags.padding(self.font_metrics.line_spacing);
        let lines = self.line_widths.len() as f32;
        Size::new(
            (longest + left + right).trunc(),
            (lines * self.line_height).trunc(),
        )
    }

    /// Forget the last pass so the next call recomputes.
    pub fn invalidate(&mut self) {
        self.config = None;
    }

    /// Snapshot the current layout was computed from.
    #[must_use]
    pub fn config(&self) -> Option<&LayoutConfig> {
        self.config.as_ref()
    }

    #[must_use]
    pub fn flags(&self) -> TextFormatFlags {
        self.config
            .as_ref()
            .map_or(TextFormatFlags::DEFAULT, |config| config.flags)
    }

    /// One record per character of the text.
    #[must_use]
    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    /// Width of each visual line.
    #[must_use]
    pub fn line_widths(&self) -> &[f32] {
        &self.line_widths
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_widths.len()
    }

    /// Length of the text in characters.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    #[must_use]
    pub fn font_metrics(&self) -> FontMetrics {
        self.font_metrics
    }

    /// Left and right padding included in the content width.
    #[must_use]
    pub fn padding(&self) -> (f32, f32) {
        if self.line_widths.is_empty() {
            return (0.0, 0.0);
        }
        self.flags().padding(self.font_metrics.line_spacing)
    }

    /// Number of passes actually computed (reused passes don't count).
    #[must_use]
    pub fn pass_count(&self) -> u64 {
        self.passes
    }

    /// Alignment offsets for drawing into `bounds`.
    #[must_use]
    pub fn alignment(&self, bounds: Rect) -> AlignmentOffsets {
        resolve(
            &self.line_widths,
            self.content_size.height,
            bounds,
            self.flags(),
        )
    }

    /// Absolute position of the top-left corner of `line` in `bounds`.
    #[must_use]
    pub fn line_origin(&self, offsets: &AlignmentOffsets, line: usize, bounds: Rect) -> Point {
        let flags = self.flags();
        let mut x = bounds.x + offsets.line_offset(line);
        if !flags.contains(TextFormatFlags::HORIZONTAL_CENTER) {
            x += self.padding().0;
        }
        let mut y = bounds.y + offsets.offset_y + self.line_height * line as f32;
        if flags.contains(TextFormatFlags::EXTERNAL_LEADING) {
            y += self.font_metrics.leading;
        }
        Point::new(x, y)
    }

    /// Character index a text cursor should move to for a click at `point`.
    #[must_use]
    pub fn cursor_index_at(&self, bounds: Rect, point: Point) -> usize {
        hit_test(self, bounds, point)
    }

    /// Human-readable dump of lines and glyph positions.
    #[must_use]
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}x{}, {} lines",
            self.content_size.width,
            self.content_size.height,
            self.line_count()
        );
        for (line, width) in self.line_widths.iter().enumerate() {
            let _ = write!(out, "L{line} w={width}:");
            for record in self.records.iter().filter(|r| r.line_index == line) {
                if record.placed {
                    let _ = write!(out, " {:?}@{}", record.character, record.x);
                } else {
                    let _ = write!(out, " {:?}", record.character);
                }
            }
            out.push('\n');
        }
        out
    }
}
