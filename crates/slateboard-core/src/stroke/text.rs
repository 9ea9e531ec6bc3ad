//! Text stamp strokes.

use super::{StrokeId, StrokeStyle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A piece of text committed onto the board.
///
/// Lives in the stroke store like any path stroke: erasing removes the
/// whole stamp, and undo/redo restores it as one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStamp {
    pub(crate) id: StrokeId,
    /// Baseline anchor where the text was placed.
    pub anchor: Point,
    pub content: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Style captured at commit time.
    pub style: StrokeStyle,
}

impl TextStamp {
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;

    pub fn new(anchor: Point, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            anchor,
            content,
            font_size: Self::DEFAULT_FONT_SIZE,
            style: StrokeStyle::default(),
        }
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// Approximate bounding box around the rendered text.
    ///
    /// The anchor is the baseline start, so the box extends above it by
    /// the ascent and below it by the descent.
    pub fn bounds(&self) -> Rect {
        let ascent = self.font_size * 0.8;
        let width = self.content.chars().count() as f64 * self.font_size * 0.52;
        let height = self.font_size * 1.2;
        Rect::new(
            self.anchor.x,
            self.anchor.y - ascent,
            self.anchor.x + width,
            self.anchor.y - ascent + height,
        )
    }

    /// Check if the eraser circle reaches the anchor point (inclusive boundary).
    pub fn anchor_hit(&self, center: Point, radius: f64) -> bool {
        let dx = self.anchor.x - center.x;
        let dy = self.anchor.y - center.y;
        dx * dx + dy * dy <= radius * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_font_size() {
        let stamp = TextStamp::new(Point::new(10.0, 20.0), "hello".to_string());
        assert!((stamp.font_size - TextStamp::DEFAULT_FONT_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_font_size() {
        let stamp = TextStamp::new(Point::ZERO, "hi".to_string()).with_font_size(32.0);
        assert!((stamp.font_size - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_extends_above_anchor() {
        let stamp = TextStamp::new(Point::new(0.0, 100.0), "abc".to_string());
        let bounds = stamp.bounds();
        assert!(bounds.y0 < 100.0);
        assert!(bounds.x1 > bounds.x0);
        assert!(bounds.y1 > bounds.y0);
    }

    #[test]
    fn test_anchor_hit_boundary_is_inclusive() {
        let stamp = TextStamp::new(Point::new(10.0, 0.0), "x".to_string());
        assert!(stamp.anchor_hit(Point::new(0.0, 0.0), 10.0));
        assert!(!stamp.anchor_hit(Point::new(0.0, 0.0), 9.9));
    }
}
