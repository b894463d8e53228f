//! Text formatting flags.
//!
//! Every flag is an independent bit and any combination is legal. Where two
//! flags compete, the documented precedence decides:
//!
//! - padding: [`NO_PADDING`](TextFormatFlags::NO_PADDING) >
//!   [`LEFT_AND_RIGHT_PADDING`](TextFormatFlags::LEFT_AND_RIGHT_PADDING) >
//!   [`GLYPH_OVERHANG_PADDING`](TextFormatFlags::GLYPH_OVERHANG_PADDING)
//! - horizontal: [`HORIZONTAL_CENTER`](TextFormatFlags::HORIZONTAL_CENTER) >
//!   [`RIGHT`](TextFormatFlags::RIGHT) > left
//! - vertical: [`VERTICAL_CENTER`](TextFormatFlags::VERTICAL_CENTER) >
//!   [`BOTTOM`](TextFormatFlags::BOTTOM) > top
//!
//! ```
//! use glyph_layout::TextFormatFlags;
//!
//! let flags = TextFormatFlags::WORD_BREAK | TextFormatFlags::HORIZONTAL_CENTER;
//! assert!(flags.wraps());
//! assert!(flags.breaks_by_word());
//! ```

use bitflags::bitflags;

bitflags! {
    /// Formatting flags for measuring, drawing and hit-testing text.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextFormatFlags: u32 {
        /// Center each line horizontally within the bounds.
        const HORIZONTAL_CENTER      = 0x0000_0001;
        /// Align each line to the right edge of the bounds.
        const RIGHT                  = 0x0000_0002;
        /// Center the block vertically within the bounds.
        const VERTICAL_CENTER        = 0x0000_0004;
        /// Align the block to the bottom of the bounds.
        const BOTTOM                 = 0x0000_0008;
        /// Break lines between words instead of between characters.
        const WORD_BREAK             = 0x0000_0010;
        /// Never wrap; lines extend past the maximum width.
        const NO_CLIPPING            = 0x0000_0100;
        /// Add the font's external leading to glyph baselines.
        const EXTERNAL_LEADING       = 0x0000_0200;
        /// No left/right padding.
        const NO_PADDING             = 0x1000_0000;
        /// Padding of a third (left) and five twelfths (right) of the line spacing.
        const LEFT_AND_RIGHT_PADDING = 0x2000_0000;
        /// Padding of a sixth (left) and a quarter (right) of the line spacing.
        const GLYPH_OVERHANG_PADDING = 0x4000_0000;
    }
}

impl TextFormatFlags {
    /// No flags: left/top aligned, wrapped by character, unpadded.
    pub const DEFAULT: Self = Self::empty();

    /// Whether lines break when they would exceed the maximum width.
    #[must_use]
    pub const fn wraps(self) -> bool {
        !self.contains(Self::NO_CLIPPING)
    }

    /// Whether the by-word tokenizer is requested.
    #[must_use]
    pub const fn breaks_by_word(self) -> bool {
        self.contains(Self::WORD_BREAK)
    }

    /// Left and right padding for a font with the given line spacing.
    #[must_use]
    pub fn padding(self, line_spacing: f32) -> (f32, f32) {
        let unit = f64::from(line_spacing) / 6.0;
        let (left, right) = if self.contains(Self::NO_PADDING) {
            (0.0, 0.0)
        } else if self.contains(Self::LEFT_AND_RIGHT_PADDING) {
            (unit * 2.0, unit * 2.5)
        } else if self.contains(Self::GLYPH_OVERHANG_PADDING) {
            (unit, unit * 1.5)
        } else {
            (0.0, 0.0)
        };
        (left.ceil() as f32, right.ceil() as f32)
    }
}
