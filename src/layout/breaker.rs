//! Line breaker.
//!
//! Walks the text token by token, placing glyphs on the current line until
//! one would cross the maximum width, then starts a new line and lays the
//! whole token out again from its first character.

use crate::event::report_missing_glyph;
use crate::flags::TextFormatFlags;
use crate::font::GlyphCache;
use crate::unicode::{
    CARRIAGE_RETURN, NEW_LINE, NEXT_CHAR_NO_ADVANCE, is_cjk, is_line_terminator, is_non_breaking,
    is_space,
};

use super::record::CharacterRecord;

/// Unit the breaker advances over on each step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tokenizer {
    /// Every character is its own token.
    #[default]
    ByChar,
    /// Runs of word characters that fit in the maximum width.
    ByWord,
}

impl Tokenizer {
    /// By-word needs both a positive width and [`TextFormatFlags::WORD_BREAK`].
    #[must_use]
    pub fn select(max_line_width: f32, flags: TextFormatFlags) -> Self {
        if max_line_width > 0.0 && flags.breaks_by_word() {
            Self::ByWord
        } else {
            Self::ByChar
        }
    }

    /// Length of the token starting at `start`. Always at least 1.
    #[must_use]
    pub fn next_token_len(
        self,
        text: &[char],
        start: usize,
        glyphs: &GlyphCache,
        max_line_width: f32,
    ) -> usize {
        match self {
            Self::ByChar => 1,
            Self::ByWord => word_len(text, start, glyphs, max_line_width),
        }
    }
}

fn ends_word(c: char) -> bool {
    is_line_terminator(c) || (!is_non_breaking(c) && (is_space(c) || is_cjk(c)))
}

fn word_len(text: &[char], start: usize, glyphs: &GlyphCache, max_line_width: f32) -> usize {
    let mut length = 0;
    let mut next_x = 0.0_f32;

    for &c in text.iter().skip(start) {
        if ends_word(c) {
            break;
        }
        let Some(glyph) = glyphs.glyph(c) else {
            break;
        };
        if max_line_width > 0.0 && next_x + glyph.offset_x + glyph.advance_x > max_line_width {
            break;
        }
        next_x += glyph.advance_x;
        length += 1;
    }

    // A single glyph wider than the line still has to make progress.
    length.max(1)
}

/// Output of a line breaking pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineBreak {
    /// One record per character.
    pub records: Vec<CharacterRecord>,
    /// One width per visual line, trailing whitespace excluded.
    pub line_widths: Vec<f32>,
}

/// Running state of the breaker, snapshotted at the start of every token.
#[derive(Clone, Copy, Debug)]
struct Pen {
    line_index: usize,
    x: f32,
    y: f32,
    /// Right edge of the last glyph that advanced on this line.
    line_right: f32,
    /// Advance of the whitespace run ending the line so far.
    trailing_space: f32,
    /// Cleared by U+0008 and restored by the next glyph placed.
    advance_next: bool,
}

impl Pen {
    const fn start() -> Self {
        Self {
            line_index: 0,
            x: 0.0,
            y: 0.0,
            line_right: 0.0,
            trailing_space: 0.0,
            advance_next: true,
        }
    }

    fn line_width(&self) -> f32 {
        self.line_right - self.trailing_space
    }

    fn next_line(self, line_height: f32) -> Self {
        Self {
            line_index: self.line_index + 1,
            x: 0.0,
            y: self.y + line_height,
            line_right: 0.0,
            trailing_space: 0.0,
            advance_next: self.advance_next,
        }
    }
}

struct Breaker<'a> {
    text: &'a [char],
    glyphs: &'a GlyphCache,
    tokenizer: Tokenizer,
    max_line_width: f32,
    wrap: bool,
    line_height: f32,
    pen: Pen,
    records: Vec<CharacterRecord>,
    line_widths: Vec<f32>,
}

impl<'a> Breaker<'a> {
    fn new(
        text: &'a [char],
        glyphs: &'a GlyphCache,
        line_height: f32,
        max_line_width: f32,
        flags: TextFormatFlags,
    ) -> Self {
        Self {
            text,
            glyphs,
            tokenizer: Tokenizer::select(max_line_width, flags),
            max_line_width,
            wrap: flags.wraps() && max_line_width > 0.0,
            line_height,
            pen: Pen::start(),
            records: vec![CharacterRecord::default(); text.len()],
            line_widths: Vec::new(),
        }
    }

    fn run(mut self) -> LineBreak {
        let mut index = 0;
        while index < self.text.len() {
            if self.text[index] == NEW_LINE {
                // A newline opens the line it is recorded on.
                self.close_line();
                self.record_placeholder(index, self.pen.x);
                index += 1;
                continue;
            }

            let remaining = self.text.len() - index;
            let len = self
                .tokenizer
                .next_token_len(self.text, index, self.glyphs, self.max_line_width)
                .min(remaining);
            if self.place_token(index, len) {
                index += len;
            }
        }

        self.line_widths.push(self.pen.line_width());
        LineBreak {
            records: self.records,
            line_widths: self.line_widths,
        }
    }

    fn close_line(&mut self) {
        self.line_widths.push(self.pen.line_width());
        self.pen = self.pen.next_line(self.line_height);
    }

    fn record_placeholder(&mut self, index: usize, pen_x: f32) {
        self.records[index] =
            CharacterRecord::placeholder(self.text[index], pen_x, self.pen.y, self.pen.line_index);
    }

    /// Place `len` characters from `start` on the current line. Returns
    /// false when the line broke first; the token is then retried from
    /// `start` on the new line.
    fn place_token(&mut self, start: usize, len: usize) -> bool {
        let token_start = self.pen;
        let mut x = token_start.x;
        let mut right = token_start.line_right;

        for index in start..start + len {
            let c = self.text[index];
            if c == CARRIAGE_RETURN {
                self.record_placeholder(index, x);
                continue;
            }
            if c == NEXT_CHAR_NO_ADVANCE {
                self.pen.advance_next = false;
                self.record_placeholder(index, x);
                continue;
            }
            let Some(glyph) = self.glyphs.glyph(c) else {
                self.record_placeholder(index, x);
                report_missing_glyph(c);
                continue;
            };

            let glyph_x = x + glyph.offset_x;
            if self.wrap
                && token_start.x > 0.0
                && glyph_x + glyph.advance_x > self.max_line_width
                && !is_space(c)
                && self.pen.advance_next
            {
                self.line_widths.push(token_start.line_width());
                self.pen = token_start.next_line(self.line_height);
                return false;
            }

            let advance = if self.pen.advance_next {
                glyph.advance_x
            } else {
                0.0
            };
            self.records[index] = CharacterRecord {
                character: c,
                valid: glyph.valid,
                placed: true,
                x: glyph_x,
                y: self.pen.y + glyph.offset_y,
                pen_x: x,
                advance,
                line_index: self.pen.line_index,
            };

            if self.pen.advance_next {
                x += advance;
                right = x;
                if is_space(c) {
                    self.pen.trailing_space += advance;
                } else {
                    self.pen.trailing_space = 0.0;
                }
            }
            self.pen.advance_next = true;
        }

        self.pen.x = x;
        self.pen.line_right = right;
        true
    }
}

/// Lay `text` out into lines.
///
/// `max_line_width <= 0` means unbounded. Empty text yields no records and
/// no lines; any other text yields at least one line.
#[must_use]
pub fn break_lines(
    text: &[char],
    glyphs: &GlyphCache,
    line_height: f32,
    max_line_width: f32,
    flags: TextFormatFlags,
) -> LineBreak {
    if text.is_empty() {
        return LineBreak::default();
    }
    Breaker::new(text, glyphs, line_height, max_line_width, flags).run()
}
