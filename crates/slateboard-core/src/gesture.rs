//! Pen gesture lifecycle.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// What happens to an in-progress stroke when the gesture is cancelled
/// (pointer leaves the surface, focus is lost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CancelPolicy {
    /// Throw the partial stroke away.
    #[default]
    Discard,
    /// Commit whatever was recorded so far.
    Commit,
}

/// Accumulates pointer samples for the stroke being drawn.
///
/// Points recorded here are not on the board yet; they only become a
/// stroke when the gesture ends.
#[derive(Debug, Clone, Default)]
pub struct PenGesture {
    points: Vec<Point>,
    active: bool,
}

impl PenGesture {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            active: false,
        }
    }

    /// Start recording at `point`. A begin while already active drops
    /// the previous partial stroke.
    pub fn begin(&mut self, point: Point) {
        if self.active {
            log::debug!("Pen gesture restarted while active, dropping partial stroke");
        }
        self.points.clear();
        self.points.push(point);
        self.active = true;
    }

    /// Record another sample. Ignored while no gesture is active.
    pub fn update(&mut self, point: Point) {
        if !self.active {
            return;
        }
        self.points.push(point);
    }

    /// Finish the gesture and take the recorded points.
    pub fn end(&mut self) -> Vec<Point> {
        self.active = false;
        std::mem::take(&mut self.points)
    }

    /// Abort the gesture, discarding the recorded points.
    pub fn cancel(&mut self) {
        self.active = false;
        self.points.clear();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Points recorded so far, for live preview while drawing.
    pub fn preview(&self) -> &[Point] {
        &self.points
    }
}
