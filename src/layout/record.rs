//! Per-character layout records.

/// Where one character of the text ended up.
///
/// Every character gets a record, so record indices and character indices
/// always agree. Control characters and characters the font cannot render
/// are placeholders: `placed` is false and the position fields hold the pen
/// position at the time they were seen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CharacterRecord {
    pub character: char,
    /// The glyph has something to draw.
    pub valid: bool,
    /// The character occupies horizontal space on its line.
    pub placed: bool,
    /// Glyph origin, relative to the block's top-left corner.
    pub x: f32,
    /// Glyph baseline, relative to the block's top-left corner.
    pub y: f32,
    /// Pen position before the glyph, relative to the line start.
    pub pen_x: f32,
    /// Advance actually applied after this glyph.
    pub advance: f32,
    pub line_index: usize,
}

impl CharacterRecord {
    pub(crate) const fn placeholder(character: char, pen_x: f32, y: f32, line_index: usize) -> Self {
        Self {
            character,
            valid: false,
            placed: false,
            x: pen_x,
            y,
            pen_x,
            advance: 0.0,
            line_index,
        }
    }

    /// Right edge of the pen interval this glyph owns.
    #[must_use]
    pub fn pen_right(&self) -> f32 {
        self.pen_x + self.advance
    }
}
