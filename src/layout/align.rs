//! Alignment of laid-out lines within target bounds.

use crate::flags::TextFormatFlags;
use crate::geometry::Rect;

/// Horizontal offset per line and one vertical offset for the block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlignmentOffsets {
    pub line_offsets_x: Vec<f32>,
    pub offset_y: f32,
}

impl AlignmentOffsets {
    /// Horizontal offset of `line`, 0 for lines that don't exist.
    #[must_use]
    pub fn line_offset(&self, line: usize) -> f32 {
        self.line_offsets_x.get(line).copied().unwrap_or(0.0)
    }
}

/// Compute alignment offsets for lines of the given widths.
///
/// Cheap enough to run on every draw, independent of whether the layout
/// itself was reused.
#[must_use]
pub fn resolve(
    line_widths: &[f32],
    content_height: f32,
    bounds: Rect,
    flags: TextFormatFlags,
) -> AlignmentOffsets {
    let line_offsets_x = if flags.contains(TextFormatFlags::HORIZONTAL_CENTER) {
        line_widths
            .iter()
            .map(|width| (bounds.width - width) / 2.0)
            .collect()
    } else if flags.contains(TextFormatFlags::RIGHT) {
        line_widths.iter().map(|width| bounds.width - width).collect()
    } else {
        vec![0.0; line_widths.len()]
    };

    let offset_y = if flags.contains(TextFormatFlags::VERTICAL_CENTER) {
        (bounds.height - content_height) / 2.0
    } else if flags.contains(TextFormatFlags::BOTTOM) {
        bounds.height - content_height
    } else {
        0.0
    };

    AlignmentOffsets {
        line_offsets_x,
        offset_y,
    }
}
