//! Whiteboard session controller.

use crate::board::{Board, BoardSnapshot};
use crate::gesture::{CancelPolicy, PenGesture};
use crate::history::History;
use crate::notes::NoteBoard;
use crate::stroke::{PathKind, Stroke, StrokeStyle, TextStamp};
use kurbo::Point;

pub const DEFAULT_ERASER_RADIUS: f64 = 10.0;

/// Ties the board, history, and input gesture together into one session.
///
/// Every mutation that should be undoable goes through here so that a
/// snapshot is committed exactly once per user-visible change: one per
/// finished stroke, one per text stamp, one per erase event that
/// actually removed something, one per confirmed clear.
#[derive(Debug, Clone)]
pub struct Whiteboard {
    board: Board,
    history: History,
    gesture: PenGesture,
    notes: NoteBoard,
    style: StrokeStyle,
    path_kind: PathKind,
    /// Style and kind captured at `begin_stroke`; the committed stroke
    /// uses these even if the active pen changes mid-gesture.
    gesture_style: StrokeStyle,
    gesture_kind: PathKind,
    eraser_radius: f64,
    cancel_policy: CancelPolicy,
    pending_clear: bool,
    font_size: f64,
}

impl Whiteboard {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: History::new(),
            gesture: PenGesture::new(),
            notes: NoteBoard::new(),
            style: StrokeStyle::default(),
            path_kind: PathKind::Mark,
            gesture_style: StrokeStyle::default(),
            gesture_kind: PathKind::Mark,
            eraser_radius: DEFAULT_ERASER_RADIUS,
            cancel_policy: CancelPolicy::default(),
            pending_clear: false,
            font_size: TextStamp::DEFAULT_FONT_SIZE,
        }
    }

    // --- drawing ---

    /// Start a pen stroke at `point`, capturing the active style and
    /// path kind for the eventual commit.
    pub fn begin_stroke(&mut self, point: Point) {
        self.gesture_style = self.style;
        self.gesture_kind = self.path_kind;
        self.gesture.begin(point);
    }

    /// Extend the in-progress stroke.
    pub fn update_stroke(&mut self, point: Point) {
        self.gesture.update(point);
    }

    /// Finish the in-progress stroke and commit it to the board with
    /// the style and kind captured at `begin_stroke`.
    ///
    /// Strokes with fewer than two points are dropped. Returns true if
    /// a stroke landed on the board.
    pub fn end_stroke(&mut self) -> bool {
        let points = self.gesture.end();
        let committed = self
            .board
            .append_stroke(points, self.gesture_kind, self.gesture_style);
        if committed {
            self.checkpoint();
        }
        committed
    }

    /// Abort the in-progress stroke according to the cancel policy.
    /// Returns true if the partial stroke was committed.
    pub fn cancel_stroke(&mut self) -> bool {
        match self.cancel_policy {
            CancelPolicy::Discard => {
                self.gesture.cancel();
                false
            }
            CancelPolicy::Commit => self.end_stroke(),
        }
    }

    /// Points of the stroke being drawn, for live preview.
    pub fn preview_points(&self) -> &[Point] {
        self.gesture.preview()
    }

    // --- erasing ---

    /// Erase around `center` with the configured radius.
    ///
    /// Commits a history entry only when something was actually removed,
    /// so dragging the eraser through empty space never pollutes undo.
    pub fn erase_at(&mut self, center: Point) -> bool {
        let erased = self.board.erase_at(center, self.eraser_radius);
        if erased {
            self.checkpoint();
        }
        erased
    }

    // --- text ---

    /// Commit a text stamp at `anchor`. Whitespace-only content is
    /// dropped. Returns true if the stamp landed on the board.
    pub fn commit_text(&mut self, anchor: Point, content: &str) -> bool {
        let stamp = TextStamp::new(anchor, content.trim().to_string())
            .with_font_size(self.font_size)
            .with_style(self.style);
        let committed = self.board.append(Stroke::Text(stamp));
        if committed {
            self.checkpoint();
        }
        committed
    }

    // --- history ---

    fn checkpoint(&mut self) {
        self.history.commit(self.board.snapshot());
    }

    /// Step back one change. Returns true if the board changed.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.board.restore(&snapshot);
        true
    }

    /// Step forward one change. Returns true if the board changed.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.board.restore(&snapshot);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- clearing ---

    /// Ask to clear the board. Arms the confirmation latch; nothing is
    /// removed yet. Returns false if the board is already empty.
    pub fn request_clear(&mut self) -> bool {
        if self.board.is_empty() {
            return false;
        }
        self.pending_clear = true;
        true
    }

    /// Carry out a requested clear. The cleared stroke state is
    /// committed, so undo brings the ink back. Sticky notes are removed
    /// as well but live outside history, so undo does not revive them.
    /// Returns false if no clear was pending.
    pub fn confirm_clear(&mut self) -> bool {
        if !self.pending_clear {
            return false;
        }
        self.pending_clear = false;
        self.board.clear();
        self.notes.clear();
        self.checkpoint();
        log::info!("Board cleared");
        true
    }

    /// Back out of a requested clear.
    pub fn cancel_clear(&mut self) {
        self.pending_clear = false;
    }

    pub fn clear_pending(&self) -> bool {
        self.pending_clear
    }

    // --- settings ---

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Select how future strokes paint: regular marks or paint-over
    /// erase-marks in the background color.
    pub fn set_path_kind(&mut self, kind: PathKind) {
        self.path_kind = kind;
    }

    pub fn path_kind(&self) -> PathKind {
        self.path_kind
    }

    pub fn set_eraser_radius(&mut self, radius: f64) {
        self.eraser_radius = radius.max(0.0);
    }

    pub fn eraser_radius(&self) -> f64 {
        self.eraser_radius
    }

    pub fn set_cancel_policy(&mut self, policy: CancelPolicy) {
        self.cancel_policy = policy;
    }

    pub fn set_font_size(&mut self, font_size: f64) {
        self.font_size = font_size;
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    // --- access ---

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The sticky-note overlay. Notes never enter history or export.
    pub fn notes(&self) -> &NoteBoard {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut NoteBoard {
        &mut self.notes
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }
}

impl Default for Whiteboard {
    fn default() -> Self {
        Self::new()
    }
}
