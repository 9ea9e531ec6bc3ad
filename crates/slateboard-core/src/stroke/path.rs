//! Freehand path strokes.

use super::{StrokeId, StrokeStyle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a path stroke paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PathKind {
    /// Regular pen mark in the stroke color.
    #[default]
    Mark,
    /// Paint-over mark rendered in the background color.
    EraseMark,
}

/// A freehand path (ordered series of points).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathStroke {
    pub(crate) id: StrokeId,
    /// Points of the polyline, in draw order.
    pub points: Vec<Point>,
    /// Mark or erase-mark.
    pub kind: PathKind,
    /// Style captured at commit time.
    pub style: StrokeStyle,
}

impl PathStroke {
    /// Create from recorded points.
    pub fn from_points(points: Vec<Point>, kind: PathKind, style: StrokeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            kind,
            style,
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box of the points (ignores stroke width).
    pub fn bounds(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for point in &self.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        Rect::new(min_x, min_y, max_x, max_y)
    }

    /// Check if any point lies within `radius` of `center` (inclusive boundary).
    pub fn any_within(&self, center: Point, radius: f64) -> bool {
        let r2 = radius * radius;
        self.points.iter().any(|p| {
            let dx = p.x - center.x;
            let dy = p.y - center.y;
            dx * dx + dy * dy <= r2
        })
    }

    /// Maximal runs of consecutive points left after erasing around
    /// `center` (inclusive boundary). Every removed point severs the
    /// polyline, so surviving points on opposite sides of a removal
    /// never rejoin into one line.
    pub fn fragments(&self, center: Point, radius: f64) -> Vec<Vec<Point>> {
        let r2 = radius * radius;
        let mut runs = Vec::new();
        let mut current = Vec::new();

        for point in &self.points {
            let dx = point.x - center.x;
            let dy = point.y - center.y;
            if dx * dx + dy * dy <= r2 {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            } else {
                current.push(*point);
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(points: Vec<Point>) -> PathStroke {
        PathStroke::from_points(points, PathKind::Mark, StrokeStyle::default())
    }

    #[test]
    fn test_from_points() {
        let stroke = path(vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        assert_eq!(stroke.len(), 2);
        assert_eq!(stroke.kind, PathKind::Mark);
    }

    #[test]
    fn test_bounds() {
        let stroke = path(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 50.0),
            Point::new(50.0, 100.0),
        ]);

        let bounds = stroke.bounds();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fragments_sever_at_removed_points() {
        // Removing the midpoint leaves two runs of one point each.
        let stroke = path(vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
        ]);

        let runs = stroke.fragments(Point::new(5.0, 0.0), 1.0);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![Point::new(0.0, 0.0)]);
        assert_eq!(runs[1], vec![Point::new(10.0, 0.0)]);
    }

    #[test]
    fn test_fragments_boundary_is_inclusive() {
        // The second point sits at exactly distance 5 from the center.
        let stroke = path(vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 0.0),
        ]);

        let runs = stroke.fragments(Point::new(0.0, 0.0), 5.0);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0], vec![Point::new(20.0, 0.0), Point::new(30.0, 0.0)]);
    }

    #[test]
    fn test_fragments_miss_keeps_one_run() {
        let points = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let stroke = path(points.clone());

        let runs = stroke.fragments(Point::new(100.0, 100.0), 5.0);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0], points);
    }

    #[test]
    fn test_fragments_consecutive_removals_make_one_gap() {
        let stroke = path(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(21.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(40.0, 0.0),
        ]);

        let runs = stroke.fragments(Point::new(20.5, 0.0), 1.0);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1].len(), 2);
    }

    #[test]
    fn test_any_within() {
        let stroke = path(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        assert!(stroke.any_within(Point::new(12.0, 0.0), 2.0));
        assert!(!stroke.any_within(Point::new(12.0, 0.0), 1.9));
    }
}
