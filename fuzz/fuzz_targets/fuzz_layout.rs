//! Fuzz target for layout and hit-testing.
//!
//! Any text, width, flag combination, color string and click must lay out
//! and resolve to a cursor index inside the text without panicking.

#![no_main]

use arbitrary::Arbitrary;
use glyph_layout::{
    CellTypeface, DisplayList, Font, FontCache, LayoutState, Point, Rect, Rgba, TextFormatFlags,
    TextRenderer,
};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    max_line_width: f32,
    flags: u32,
    bounds: (f32, f32, f32, f32),
    point: (f32, f32),
    color: &'a str,
    alpha: f32,
}

fuzz_target!(|input: Input<'_>| {
    let Ok(font) = Font::new(CellTypeface::new(1).shared(), 16.0) else {
        return;
    };
    let flags = TextFormatFlags::from_bits_truncate(input.flags);
    let fonts = FontCache::new();

    let mut state = LayoutState::new();
    state.layout(input.text, &font, &fonts, input.max_line_width, flags);
    assert_eq!(state.records().len(), input.text.chars().count());
    let highest = state.records().iter().map(|r| r.line_index).max();
    assert_eq!(highest.map_or(0, |line| line + 1), state.line_count());

    let (x, y, width, height) = input.bounds;
    let Ok(bounds) = Rect::try_new(x, y, width, height) else {
        return;
    };
    let index = state.cursor_index_at(bounds, Point::new(input.point.0, input.point.1));
    assert!(index <= state.text_len());

    let mut renderer = TextRenderer::with_cache(Arc::new(fonts));
    let mut canvas = DisplayList::new();
    let color = input
        .color
        .parse::<Rgba>()
        .unwrap_or(Rgba::BLACK)
        .with_alpha(input.alpha);
    let _ = color.to_rgba_u8();
    renderer.draw(&mut canvas, input.text, &font, bounds, color, flags);
});
