#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Not every test binary uses every helper

use std::sync::Arc;

use glyph_layout::{
    CellTypeface, Font, FontCache, FontMetrics, GlyphMetrics, LogLevel, TextRenderer, Typeface,
    TypefaceId,
};
use tracing::Level;

/// Mixed Latin and CJK sample: 15 characters, 170 px wide at size 20.
pub const SAMPLE: &str = "Hello 你好 world!";

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();
    forward_diagnostics();
}

/// Route the library's diagnostic callbacks into `tracing`.
pub fn forward_diagnostics() {
    glyph_layout::set_log_callback(|level, message| match level {
        LogLevel::Debug => tracing::debug!(target: "glyph_layout", "{message}"),
        LogLevel::Info => tracing::info!(target: "glyph_layout", "{message}"),
        LogLevel::Warn => tracing::warn!(target: "glyph_layout", "{message}"),
        LogLevel::Error => tracing::error!(target: "glyph_layout", "{message}"),
    });
    glyph_layout::set_event_callback(|name, data| {
        tracing::info!(target: "glyph_layout::event", name, data, "event");
    });
}

/// Cell-grid font at size 20: Latin 10 px, CJK 20 px, line height 20.
pub fn font() -> Font {
    font_sized(20.0)
}

pub fn font_sized(size: f32) -> Font {
    Font::new(CellTypeface::new(1).shared(), size).unwrap()
}

/// Renderer with a private font cache.
pub fn renderer() -> TextRenderer {
    TextRenderer::with_cache(Arc::new(FontCache::new()))
}

/// Fixed-pitch face with external leading and no decoration metrics.
#[derive(Debug)]
pub struct LeadingFace;

impl Typeface for LeadingFace {
    fn id(&self) -> TypefaceId {
        TypefaceId(900)
    }

    fn glyph(&self, ch: char, size: f32) -> Option<GlyphMetrics> {
        if ch.is_control() {
            return None;
        }
        Some(GlyphMetrics {
            advance_x: size / 2.0,
            offset_x: 0.0,
            offset_y: size,
            valid: !ch.is_whitespace(),
        })
    }

    fn metrics(&self, size: f32) -> FontMetrics {
        FontMetrics {
            line_spacing: size,
            leading: 4.0,
            underline_position: None,
            strikeout_position: None,
        }
    }
}

pub fn leading_font() -> Font {
    Font::new(Arc::new(LeadingFace), 20.0).unwrap()
}
