//! `glyph_layout` - text layout for proportional fonts
//!
//! Breaks a run of text into visual lines from per-character font metrics,
//! computes where every glyph lands, aligns the block inside a rectangle and
//! maps clicks back to cursor positions.
//!
//! ```
//! use glyph_layout::{CellTypeface, Font, Point, Rect, TextFormatFlags, TextRenderer};
//!
//! let font = Font::new(CellTypeface::new(1).shared(), 20.0).unwrap();
//! let mut renderer = TextRenderer::new();
//!
//! let size = renderer.measure("Hello 你好 world!", &font, 0.0, TextFormatFlags::DEFAULT);
//! assert_eq!((size.width, size.height), (170.0, 20.0));
//!
//! let bounds = Rect::new(0.0, 0.0, 200.0, 40.0);
//! let index = renderer.cursor_index_at_point(
//!     "Hello 你好 world!",
//!     &font,
//!     bounds,
//!     TextFormatFlags::DEFAULT,
//!     Point::new(81.0, 9.0),
//! );
//! assert_eq!(index, 7);
//! ```

// Crate-level lint configuration
#![forbid(unsafe_code)] // Pure computation, no FFI
#![allow(clippy::cast_possible_truncation)] // Intentional pixel casts
#![allow(clippy::cast_sign_loss)] // Line indices from non-negative floats
#![allow(clippy::cast_precision_loss)] // Counts to f32 are small
#![allow(clippy::module_name_repetitions)] // Allow font::FontCache etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::float_cmp)] // Pixel positions are compared exactly
#![allow(clippy::too_many_arguments)] // draw mirrors the full request
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod color;
pub mod error;
pub mod event;
pub mod flags;
pub mod font;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod unicode;

// Re-export core types at crate root
pub use color::Rgba;
pub use error::{Error, Result};
pub use event::{
    EVENT_MISSING_GLYPH, LogLevel, clear_callbacks, emit_event, emit_log, set_event_callback,
    set_log_callback,
};
pub use flags::TextFormatFlags;
pub use geometry::{Point, Rect, Size};

// Re-export font types
pub use font::{
    CellTypeface, Font, FontCache, FontKey, FontMetrics, FontStyle, GlyphCache, GlyphMetrics,
    Typeface, TypefaceId,
};

// Re-export layout types
pub use layout::{
    AlignmentOffsets, CharacterRecord, LayoutConfig, LayoutState, LineBreak, Tokenizer,
    break_lines, hit_test, resolve,
};

// Re-export rendering types
pub use render::{Canvas, DisplayList, DrawCommand, Paint, PositionedGlyph, TextRenderer};
pub use unicode::WidthMethod;
