//! Layout engine: line breaking, alignment and cursor hit-testing.
//!
//! A [`LayoutState`] owns the result of one layout pass over one text block:
//! one [`CharacterRecord`] per character plus one width per visual line.
//! Drawing and hit-testing both read from it. A new pass rebuilds it in full.

mod align;
mod breaker;
mod hit;
mod record;
mod state;

pub use align::{AlignmentOffsets, resolve};
pub use breaker::{LineBreak, Tokenizer, break_lines};
pub use hit::hit_test;
pub use record::CharacterRecord;
pub use state::{LayoutConfig, LayoutState};
