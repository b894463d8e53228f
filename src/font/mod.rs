//! Font metrics provider.
//!
//! The layout engine only needs per-character advance and offsets plus a
//! handful of line metrics. Those come from a [`Typeface`] and are cached per
//! (typeface, size) in a [`GlyphCache`], shared process-wide through a
//! [`FontCache`].

mod cache;
mod cell;
mod typeface;

pub use cache::{FontCache, GlyphCache};
pub use cell::CellTypeface;
pub use typeface::{Font, FontKey, FontMetrics, FontStyle, GlyphMetrics, Typeface, TypefaceId};
