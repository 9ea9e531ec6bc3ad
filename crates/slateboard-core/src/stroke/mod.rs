//! Stroke definitions for the whiteboard.

mod path;
mod text;

pub use path::{PathKind, PathStroke};
pub use text::TextStamp;

use kurbo::Rect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for strokes.
pub type StrokeId = Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

/// Style properties for strokes.
///
/// Captured when a stroke is committed; changing the active pen afterwards
/// never touches strokes already on the board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color (glyph color for text stamps).
    pub color: Rgba8,
    /// Line width in pixels. Unused by text stamps.
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Rgba8::black(),
            width: 2.0,
        }
    }
}

/// One committed annotation on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Stroke {
    /// A freehand polyline.
    Path(PathStroke),
    /// A text stamp.
    Text(TextStamp),
}

impl Stroke {
    pub fn id(&self) -> StrokeId {
        match self {
            Stroke::Path(s) => s.id(),
            Stroke::Text(s) => s.id(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Stroke::Path(s) => s.bounds(),
            Stroke::Text(s) => s.bounds(),
        }
    }

    pub fn style(&self) -> &StrokeStyle {
        match self {
            Stroke::Path(s) => &s.style,
            Stroke::Text(s) => &s.style,
        }
    }

    /// Get the path stroke if this is one.
    pub fn as_path(&self) -> Option<&PathStroke> {
        match self {
            Stroke::Path(p) => Some(p),
            _ => None,
        }
    }

    /// Get the text stamp if this is one.
    pub fn as_text(&self) -> Option<&TextStamp> {
        match self {
            Stroke::Text(t) => Some(t),
            _ => None,
        }
    }
}
