//! Slateboard Core Library
//!
//! Board state, history, and interaction logic for the Slateboard whiteboard.

pub mod board;
pub mod gesture;
pub mod history;
pub mod notes;
pub mod stroke;
pub mod whiteboard;

pub use board::{Board, BoardSnapshot};
pub use gesture::{CancelPolicy, PenGesture};
pub use history::History;
pub use notes::{Note, NoteBoard, NoteId, Template};
pub use stroke::{PathKind, PathStroke, Rgba8, Stroke, StrokeId, StrokeStyle, TextStamp};
pub use whiteboard::{DEFAULT_ERASER_RADIUS, Whiteboard};
