//! Glyph runs and decoration lines produced by `TextRenderer::draw`.

#![allow(clippy::float_cmp)] // Exact pixel positions are intentional in tests

mod common;

use common::{SAMPLE, font, leading_font, renderer};
use glyph_layout::{
    Canvas, DisplayList, DrawCommand, FontStyle, Point, Rect, Rgba, TextFormatFlags,
};

const BOUNDS: Rect = Rect::new(0.0, 0.0, 300.0, 100.0);

fn draw(text: &str, style: FontStyle, bounds: Rect, flags: TextFormatFlags) -> DisplayList {
    let mut canvas = DisplayList::new();
    renderer().draw(&mut canvas, text, &font().with_style(style), bounds, Rgba::BLACK, flags);
    canvas
}

#[test]
fn test_single_glyph_run() {
    let canvas = draw(SAMPLE, FontStyle::Regular, BOUNDS, TextFormatFlags::DEFAULT);
    assert_eq!(canvas.len(), 1);
    // Two spaces are skipped.
    assert_eq!(canvas.glyphs().count(), 13);

    let DrawCommand::Glyphs { paint, .. } = &canvas.commands()[0] else {
        panic!("expected a glyph run");
    };
    assert_eq!(paint.color, Rgba::BLACK);
    assert_eq!(paint.size, 20.0);
    assert_eq!(paint.skew_x, 0.0);
}

#[test]
fn test_glyph_positions_follow_alignment() {
    let canvas = draw("ab", FontStyle::Regular, BOUNDS, TextFormatFlags::HORIZONTAL_CENTER | TextFormatFlags::BOTTOM);
    let positions: Vec<Point> = canvas.glyphs().map(|g| g.position).collect();
    // x from (300 - 20) / 2, baseline 16 below a block top of 80.
    assert_eq!(positions, vec![Point::new(140.0, 96.0), Point::new(150.0, 96.0)]);
}

#[test]
fn test_underline_per_visual_line() {
    let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
    let canvas = draw(SAMPLE, FontStyle::Underline, bounds, TextFormatFlags::WORD_BREAK);
    let lines: Vec<_> = canvas.lines().collect();
    assert_eq!(
        lines,
        vec![
            (Point::new(0.0, 18.0), Point::new(100.0, 18.0)),
            (Point::new(0.0, 38.0), Point::new(60.0, 38.0)),
        ]
    );
}

#[test]
fn test_strikeout_above_baseline() {
    let canvas = draw("abc", FontStyle::Strikeout, BOUNDS, TextFormatFlags::RIGHT);
    let lines: Vec<_> = canvas.lines().collect();
    // Baseline 16, strikeout 5 above it, line from 270 to 300.
    assert_eq!(lines, vec![(Point::new(270.0, 11.0), Point::new(300.0, 11.0))]);
}

#[test]
fn test_regular_and_italic_have_no_lines() {
    for style in [FontStyle::Regular, FontStyle::Italic] {
        let canvas = draw("ab\ncd", style, BOUNDS, TextFormatFlags::DEFAULT);
        assert_eq!(canvas.lines().count(), 0);
    }
}

#[test]
fn test_decoration_skips_empty_lines() {
    let canvas = draw("a\n\nb", FontStyle::Underline, BOUNDS, TextFormatFlags::DEFAULT);
    let ys: Vec<f32> = canvas.lines().map(|(from, _)| from.y).collect();
    assert_eq!(ys, vec![18.0, 58.0]);
}

#[test]
fn test_external_leading_shifts_glyphs() {
    let mut canvas = DisplayList::new();
    let font = leading_font().with_style(FontStyle::Underline);
    renderer().draw(&mut canvas, "a", &font, BOUNDS, Rgba::WHITE, TextFormatFlags::EXTERNAL_LEADING);

    let glyph = canvas.glyphs().next().copied().unwrap();
    assert_eq!(glyph.position, Point::new(0.0, 24.0));
    // No underline metric: the line sits on the baseline.
    assert_eq!(canvas.lines().collect::<Vec<_>>(), vec![(Point::new(0.0, 24.0), Point::new(10.0, 24.0))]);
}

#[test]
fn test_padding_shifts_glyphs() {
    let canvas = draw("ab", FontStyle::Regular, BOUNDS, TextFormatFlags::GLYPH_OVERHANG_PADDING);
    let first = canvas.glyphs().next().copied().unwrap();
    assert_eq!(first.position.x, 4.0);
}

#[test]
fn test_draws_through_trait_object() {
    let mut list = DisplayList::new();
    let canvas: &mut dyn Canvas = &mut list;
    renderer().draw(canvas, "xyz", &font(), BOUNDS, Rgba::RED, TextFormatFlags::DEFAULT);
    assert_eq!(list.glyphs().count(), 3);
}

#[test]
fn test_paint_carries_parsed_color() {
    let color: Rgba = "#1a1a2e".parse().unwrap();
    let bounds = Rect::try_new(0.0, 0.0, 120.0, 40.0).unwrap();
    let mut canvas = DisplayList::new();
    renderer().draw(&mut canvas, "ink", &font(), bounds, color.with_alpha(0.5), TextFormatFlags::DEFAULT);

    let DrawCommand::Glyphs { paint, .. } = &canvas.commands()[0] else {
        panic!("expected a glyph run");
    };
    assert_eq!(paint.color.to_rgba_u8(), (0x1a, 0x1a, 0x2e, 128));

    assert!("#12".parse::<Rgba>().is_err());
    assert!(Rect::try_new(0.0, 0.0, -1.0, 40.0).is_err());
}
