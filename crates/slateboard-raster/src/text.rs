//! Text stamp rasterization.

use crate::renderer::RasterError;
use ab_glyph::{FontArc, FontVec};
use slateboard_core::{Rgba8, TextStamp};
use tiny_skia::Pixmap;

/// Holds the font used for text stamps.
///
/// A store without a font still renders boards; text stamps are skipped
/// with a warning so headless environments stay usable.
#[derive(Clone)]
pub struct FontStore {
    font: Option<FontArc>,
}

impl FontStore {
    /// A store with no font loaded.
    pub fn empty() -> Self {
        Self { font: None }
    }

    /// Load a font from raw TTF/OTF bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, RasterError> {
        let font = FontVec::try_from_vec(data).map_err(|_| RasterError::BadFontData)?;
        Ok(Self {
            font: Some(FontArc::from(font)),
        })
    }

    /// Load the default sans-serif font installed on the system.
    pub fn system() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        let query = fontdb::Query {
            families: &[fontdb::Family::SansSerif],
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        let Some(id) = db.query(&query) else {
            log::warn!("No system sans-serif font found, text stamps will not render");
            return Self::empty();
        };

        let font = db
            .with_face_data(id, |data, index| {
                FontVec::try_from_vec_and_index(data.to_vec(), index)
                    .map(FontArc::from)
                    .ok()
            })
            .flatten();

        if font.is_none() {
            log::warn!("System font could not be parsed, text stamps will not render");
        }
        Self { font }
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    pub(crate) fn font(&self) -> Option<&FontArc> {
        self.font.as_ref()
    }
}

impl std::fmt::Debug for FontStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontStore")
            .field("has_font", &self.has_font())
            .finish()
    }
}

/// Draw a text stamp onto the pixmap.
pub(crate) fn draw_stamp(pixmap: &mut Pixmap, stamp: &TextStamp, fonts: &FontStore) {
    let Some(font) = fonts.font() else {
        log::warn!("Skipping text stamp, no font loaded");
        return;
    };
    draw_text(
        pixmap,
        font,
        stamp.anchor,
        &stamp.content,
        stamp.style.color,
        stamp.font_size as f32,
    );
}

fn draw_text(
    pixmap: &mut Pixmap,
    font: &FontArc,
    anchor: kurbo::Point,
    text: &str,
    color: Rgba8,
    size: f32,
) {
    use ab_glyph::{Font, ScaleFont, point};

    if text.is_empty() {
        return;
    }

    let scaled = font.as_scaled(size);
    // The anchor is the baseline start, so no ascent offset here.
    let mut caret = point(anchor.x as f32, anchor.y as f32);
    for ch in text.chars() {
        let mut glyph = scaled.scaled_glyph(ch);
        glyph.position = caret;
        caret.x += scaled.h_advance(glyph.id);
        if let Some(outlined) = scaled.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            let width = pixmap.width() as i32;
            let height = pixmap.height() as i32;
            outlined.draw(|x, y, coverage| {
                let px = x as i32 + bounds.min.x as i32;
                let py = y as i32 + bounds.min.y as i32;
                if px >= 0 && py >= 0 && px < width && py < height {
                    let alpha = (color.a as f32 * coverage).round().clamp(0.0, 255.0) as u8;
                    blend_pixel(pixmap, px as u32, py as u32, color, alpha);
                }
            });
        }
    }
}

/// Source-over blend of one glyph pixel. Pixmap data is premultiplied RGBA.
fn blend_pixel(pixmap: &mut Pixmap, x: u32, y: u32, color: Rgba8, alpha: u8) {
    if alpha == 0 {
        return;
    }
    let width = pixmap.width();
    let idx = ((y * width + x) * 4) as usize;
    let data = pixmap.data_mut();

    let a = alpha as u16;
    let inv = 255 - a;
    let src = [
        (color.r as u16 * a) / 255,
        (color.g as u16 * a) / 255,
        (color.b as u16 * a) / 255,
        a,
    ];
    for (i, s) in src.into_iter().enumerate() {
        let d = data[idx + i] as u16;
        data[idx + i] = (s + (d * inv) / 255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{RenderOptions, render};
    use kurbo::Point;
    use slateboard_core::{Board, StrokeStyle};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn pixel_hash(pixmap: &Pixmap) -> u64 {
        let mut hasher = DefaultHasher::new();
        pixmap.data().hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_empty_store_has_no_font() {
        assert!(!FontStore::empty().has_font());
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let result = FontStore::from_bytes(vec![1, 2, 3, 4]);
        assert!(matches!(result, Err(RasterError::BadFontData)));
    }

    #[test]
    fn test_stamp_skipped_without_font() {
        let options = RenderOptions::new(64, 64);
        let blank = render(&[], &FontStore::empty(), &options).unwrap();

        let mut board = Board::new();
        board.append_text(Point::new(5.0, 40.0), "hello", StrokeStyle::default());
        let with_stamp = render(board.strokes(), &FontStore::empty(), &options).unwrap();

        assert_eq!(pixel_hash(&blank), pixel_hash(&with_stamp));
    }

    #[test]
    fn test_system_font_renders_text() {
        let store = FontStore::system();
        if !store.has_font() {
            // No fonts installed; nothing to assert here.
            return;
        }

        let options = RenderOptions::new(128, 64);
        let blank = render(&[], &store, &options).unwrap();

        let mut board = Board::new();
        board.append_text(Point::new(5.0, 40.0), "Hello", StrokeStyle::default());
        let with_text = render(board.strokes(), &store, &options).unwrap();

        assert_ne!(pixel_hash(&blank), pixel_hash(&with_text));
    }

    #[test]
    fn test_blend_pixel_full_alpha_replaces() {
        let mut pixmap = Pixmap::new(4, 4).unwrap();
        pixmap.fill(tiny_skia::Color::WHITE);

        blend_pixel(&mut pixmap, 1, 1, Rgba8::new(255, 0, 0, 255), 255);

        let px = pixmap.pixels()[5].demultiply();
        assert_eq!((px.red(), px.green(), px.blue()), (255, 0, 0));
    }

    #[test]
    fn test_blend_pixel_zero_alpha_is_noop() {
        let mut pixmap = Pixmap::new(4, 4).unwrap();
        pixmap.fill(tiny_skia::Color::WHITE);
        let before = pixel_hash(&pixmap);

        blend_pixel(&mut pixmap, 1, 1, Rgba8::new(255, 0, 0, 255), 0);
        assert_eq!(before, pixel_hash(&pixmap));
    }
}
