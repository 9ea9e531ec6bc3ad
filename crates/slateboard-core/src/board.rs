//! Board state and the stroke store.

use crate::stroke::{PathKind, PathStroke, Stroke, StrokeStyle, TextStamp};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Immutable capture of the board at one point in time.
///
/// Snapshots share stroke data with the live board through `Arc`, so
/// taking one is cheap regardless of how much ink is on the board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    strokes: Vec<Arc<Stroke>>,
}

impl BoardSnapshot {
    pub fn strokes(&self) -> &[Arc<Stroke>] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

/// The live stroke store.
///
/// Strokes are kept in commit order; rendering replays them front to
/// back, so later strokes paint over earlier ones.
#[derive(Debug, Clone)]
pub struct Board {
    strokes: Vec<Arc<Stroke>>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    /// Append a finished stroke.
    ///
    /// Rejects degenerate input: paths with fewer than two points and
    /// text whose content trims to nothing. Returns true if the stroke
    /// was stored.
    pub fn append(&mut self, stroke: Stroke) -> bool {
        match &stroke {
            Stroke::Path(path) => {
                if path.len() < 2 {
                    log::debug!("Discarding path stroke with {} point(s)", path.len());
                    return false;
                }
            }
            Stroke::Text(stamp) => {
                if stamp.content.trim().is_empty() {
                    log::debug!("Discarding empty text stamp");
                    return false;
                }
            }
        }
        self.strokes.push(Arc::new(stroke));
        true
    }

    /// Append a freehand path built from recorded points.
    pub fn append_stroke(
        &mut self,
        points: Vec<Point>,
        kind: PathKind,
        style: StrokeStyle,
    ) -> bool {
        self.append(Stroke::Path(PathStroke::from_points(points, kind, style)))
    }

    /// Append a text stamp, trimming surrounding whitespace.
    pub fn append_text(&mut self, anchor: Point, content: &str, style: StrokeStyle) -> bool {
        let stamp = TextStamp::new(anchor, content.trim().to_string()).with_style(style);
        self.append(Stroke::Text(stamp))
    }

    /// Erase around `center` with the given radius (inclusive boundary).
    ///
    /// Path strokes lose every point inside the circle; each removed
    /// point severs the polyline, and the surviving fragments replace
    /// the stroke in place. Fragments with fewer than two points are
    /// discarded, so a fully severed stroke disappears. Text stamps are
    /// removed whole when the circle reaches their anchor. Survivor
    /// order is preserved. Returns true if anything changed.
    pub fn erase_at(&mut self, center: Point, radius: f64) -> bool {
        let radius = radius.max(0.0);
        let mut erased_any = false;

        let strokes = std::mem::take(&mut self.strokes);
        for stroke in strokes {
            let hit = match &*stroke {
                Stroke::Path(path) => path.any_within(center, radius),
                Stroke::Text(stamp) => stamp.anchor_hit(center, radius),
            };

            if !hit {
                self.strokes.push(stroke);
                continue;
            }

            erased_any = true;
            // Touched strokes are rebuilt rather than mutated so that
            // snapshots holding the old Arc stay intact.
            if let Stroke::Path(path) = &*stroke {
                for run in path.fragments(center, radius) {
                    if run.len() >= 2 {
                        let fragment = PathStroke::from_points(run, path.kind, path.style);
                        self.strokes.push(Arc::new(Stroke::Path(fragment)));
                    }
                }
            }
        }

        erased_any
    }

    /// Remove every stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Capture the current state.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            strokes: self.strokes.clone(),
        }
    }

    /// Replace the current state with a snapshot.
    pub fn restore(&mut self, snapshot: &BoardSnapshot) {
        self.strokes = snapshot.strokes.clone();
    }

    pub fn strokes(&self) -> &[Arc<Stroke>] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
