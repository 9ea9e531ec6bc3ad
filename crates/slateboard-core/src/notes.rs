//! Sticky notes and the template gallery.
//!
//! Notes are an overlay: they float above the board, are not part of
//! the stroke store, and never appear in history or exported images.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type NoteId = Uuid;

const DEFAULT_NOTE_TEXT: &str = "Write here...";
const SPAWN_X: f64 = 50.0;
const SPAWN_Y: f64 = 50.0;
const SPAWN_STAGGER: f64 = 20.0;

/// A single sticky note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub(crate) id: NoteId,
    /// Top-left corner of the note.
    pub position: Point,
    pub content: String,
}

impl Note {
    pub fn new(position: Point, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            content,
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    id: NoteId,
    /// Pointer offset from the note's top-left corner at grab time.
    offset_x: f64,
    offset_y: f64,
}

/// The overlay of sticky notes, in render order (last is topmost).
#[derive(Debug, Clone, Default)]
pub struct NoteBoard {
    notes: Vec<Note>,
    drag: Option<DragState>,
}

impl NoteBoard {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            drag: None,
        }
    }

    /// Spawn a fresh note with placeholder text, staggered so stacked
    /// spawns stay visible.
    pub fn spawn(&mut self) -> NoteId {
        let offset = self.notes.len() as f64 * SPAWN_STAGGER;
        self.add(
            Point::new(SPAWN_X + offset, SPAWN_Y + offset),
            DEFAULT_NOTE_TEXT.to_string(),
        )
    }

    pub fn add(&mut self, position: Point, content: String) -> NoteId {
        let note = Note::new(position, content);
        let id = note.id;
        self.notes.push(note);
        id
    }

    pub fn set_content(&mut self, id: NoteId, content: String) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        note.content = content;
        true
    }

    pub fn remove(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() != before
    }

    /// Grab a note with the pointer at `pointer`. Moves the note to the
    /// top of the render order. Returns false if the id is unknown.
    pub fn begin_drag(&mut self, id: NoteId, pointer: Point) -> bool {
        let Some(index) = self.notes.iter().position(|n| n.id == id) else {
            return false;
        };
        let note = self.notes.remove(index);
        self.drag = Some(DragState {
            id,
            offset_x: pointer.x - note.position.x,
            offset_y: pointer.y - note.position.y,
        });
        self.notes.push(note);
        true
    }

    /// Move the grabbed note so it keeps its grab offset under the pointer.
    pub fn drag_to(&mut self, pointer: Point) {
        let Some(drag) = self.drag else {
            return;
        };
        let Some(note) = self.notes.iter_mut().find(|n| n.id == drag.id) else {
            return;
        };
        note.position = Point::new(pointer.x - drag.offset_x, pointer.y - drag.offset_y);
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn clear(&mut self) {
        self.notes.clear();
        self.drag = None;
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// A background template image selectable from the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    /// Path of the template image, relative to the asset root.
    pub src: &'static str,
}

impl Template {
    /// The built-in template gallery.
    pub fn gallery() -> &'static [Template] {
        &[
            Template {
                name: "Heart",
                src: "images/heart.png",
            },
            Template {
                name: "Nephron",
                src: "images/nephron.png",
            },
            Template {
                name: "Eye",
                src: "images/eye.png",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_uses_placeholder_and_stagger() {
        let mut notes = NoteBoard::new();
        let first = notes.spawn();
        let second = notes.spawn();

        let Some(a) = notes.get(first) else {
            panic!("missing first note");
        };
        assert_eq!(a.content, DEFAULT_NOTE_TEXT);
        assert_eq!(a.position, Point::new(50.0, 50.0));

        let Some(b) = notes.get(second) else {
            panic!("missing second note");
        };
        assert_eq!(b.position, Point::new(70.0, 70.0));
    }

    #[test]
    fn test_drag_keeps_grab_offset() {
        let mut notes = NoteBoard::new();
        let id = notes.add(Point::new(100.0, 100.0), "a".to_string());

        // Grab 10,5 inside the note, then move the pointer.
        assert!(notes.begin_drag(id, Point::new(110.0, 105.0)));
        notes.drag_to(Point::new(210.0, 155.0));
        notes.end_drag();

        let Some(note) = notes.get(id) else {
            panic!("missing note");
        };
        assert_eq!(note.position, Point::new(200.0, 150.0));
        assert!(!notes.is_dragging());
    }

    #[test]
    fn test_begin_drag_raises_note() {
        let mut notes = NoteBoard::new();
        let bottom = notes.add(Point::new(0.0, 0.0), "a".to_string());
        notes.add(Point::new(10.0, 10.0), "b".to_string());

        assert!(notes.begin_drag(bottom, Point::new(0.0, 0.0)));
        let Some(top) = notes.notes().last() else {
            panic!("expected notes");
        };
        assert_eq!(top.id(), bottom);
    }

    #[test]
    fn test_begin_drag_unknown_id() {
        let mut notes = NoteBoard::new();
        assert!(!notes.begin_drag(Uuid::new_v4(), Point::ZERO));
        assert!(!notes.is_dragging());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut notes = NoteBoard::new();
        let id = notes.add(Point::ZERO, "a".to_string());
        notes.add(Point::ZERO, "b".to_string());

        assert!(notes.remove(id));
        assert!(!notes.remove(id));
        assert_eq!(notes.len(), 1);

        notes.clear();
        assert!(notes.is_empty());
    }

    #[test]
    fn test_set_content() {
        let mut notes = NoteBoard::new();
        let id = notes.add(Point::ZERO, "draft".to_string());
        assert!(notes.set_content(id, "final".to_string()));

        let Some(note) = notes.get(id) else {
            panic!("missing note");
        };
        assert_eq!(note.content, "final");
    }

    #[test]
    fn test_gallery_entries() {
        let gallery = Template::gallery();
        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery[0].name, "Heart");
        assert!(gallery.iter().all(|t| t.src.ends_with(".png")));
    }
}
