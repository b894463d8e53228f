//! Point to cursor index mapping.

use crate::geometry::{Point, Rect};
use crate::unicode::NEW_LINE;

use super::record::CharacterRecord;
use super::state::LayoutState;

/// Character index for a click at `point` on text drawn into `bounds`.
///
/// Total over the plane: the result is always in `0..=text_len`. Points
/// above or below the block use the first or last line. Within a line, a
/// glyph owns the pen interval `[pen_x, pen_x + advance)`; clicking inside
/// it puts the cursor before that glyph. Clicking left of the line gives the
/// line start, right of it the position after the line's last glyph (the end
/// of the text on the last line). Placeholders are never returned as a
/// glyph of their own.
#[must_use]
pub fn hit_test(state: &LayoutState, bounds: Rect, point: Point) -> usize {
    let records = state.records();
    let line_count = state.line_count();
    if records.is_empty() || line_count == 0 {
        return 0;
    }

    let offsets = state.alignment(bounds);
    let top = state.line_origin(&offsets, 0, bounds).y;
    let line = line_at(point.y - top, state.line_height(), line_count);
    let rel_x = point.x - state.line_origin(&offsets, line, bounds).x;

    // Line indices never decrease along the text. A newline is the first
    // record of the line it opens; the cursor goes after it.
    let mut start = records.partition_point(|r| r.line_index < line);
    if line > 0 && records
        .get(start)
        .is_some_and(|r| r.line_index == line && r.character == NEW_LINE) {
        start += 1;
    }
    let end = records.partition_point(|r| r.line_index <= line);
    let placed: Vec<usize> = (start..end).filter(|&i| records[i].placed).collect();
    let line_end = if line + 1 == line_count {
        records.len()
    } else {
        placed.last().map_or(start, |&i| i + 1)
    };

    cursor_in_line(records, &placed, start, line_end, rel_x)
}

fn line_at(dy: f32, line_height: f32, line_count: usize) -> usize {
    if dy.is_nan() || dy <= 0.0 || line_height <= 0.0 {
        return 0;
    }
    ((dy / line_height).floor() as usize).min(line_count - 1)
}

fn cursor_in_line(
    records: &[CharacterRecord],
    placed: &[usize],
    start: usize,
    line_end: usize,
    rel_x: f32,
) -> usize {
    let first_pen = placed.first().map_or(0.0, |&i| records[i].pen_x);
    if rel_x.is_nan() || rel_x < first_pen {
        return start;
    }

    let after = placed.partition_point(|&i| records[i].pen_x <= rel_x);
    let Some(k) = after.checked_sub(1) else {
        return line_end;
    };
    if rel_x < records[placed[k]].pen_right() {
        placed[k]
    } else {
        placed.get(k + 1).copied().unwrap_or(line_end)
    }
}
