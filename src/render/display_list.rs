//! Recording canvas.

use super::{Canvas, Paint, PositionedGlyph};
use crate::geometry::Point;

/// A recorded canvas call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Glyphs {
        glyphs: Vec<PositionedGlyph>,
        paint: Paint,
    },
    Line {
        from: Point,
        to: Point,
        paint: Paint,
    },
}

/// Canvas that records every call in order instead of painting.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in call order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Every recorded glyph across all runs.
    pub fn glyphs(&self) -> impl Iterator<Item = &PositionedGlyph> {
        self.commands.iter().flat_map(|command| match command {
            DrawCommand::Glyphs { glyphs, .. } => glyphs.as_slice(),
            DrawCommand::Line { .. } => &[][..],
        })
    }

    /// Endpoints of every recorded line.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            DrawCommand::Glyphs { .. } => None,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DisplayList {
    fn draw_glyphs(&mut self, glyphs: &[PositionedGlyph], paint: &Paint) {
        self.commands.push(DrawCommand::Glyphs {
            glyphs: glyphs.to_vec(),
            paint: *paint,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            paint: *paint,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::font::TypefaceId;

    #[test]
    fn test_records_in_order() {
        let paint = Paint {
            color: Rgba::BLACK,
            size: 12.0,
            skew_x: 0.0,
            typeface: TypefaceId(1),
        };
        let glyph = PositionedGlyph {
            index: 0,
            character: 'q',
            position: Point::new(1.0, 2.0),
        };
        let mut list = DisplayList::new();
        list.draw_line(Point::new(0.0, 0.0), Point::new(5.0, 0.0), &paint);
        list.draw_glyphs(&[glyph], &paint);

        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::Line { .. }));
        assert_eq!(list.glyphs().copied().collect::<Vec<_>>(), vec![glyph]);
        assert_eq!(list.lines().count(), 1);

        list.clear();
        assert!(list.is_empty());
    }
}
