//! Pure replay rendering of board snapshots.
//!
//! Rendering never mutates board state: the same stroke list and
//! options always produce the same pixels.

use crate::text::FontStore;
use kurbo::Point;
use slateboard_core::{PathKind, PathStroke, Rgba8, Stroke, StrokeStyle};
use std::sync::Arc;
use thiserror::Error;
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Transform};

/// Raster errors.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Surface size {0}x{1} is invalid")]
    InvalidSize(u32, u32),
    #[error("Font data could not be parsed")]
    BadFontData,
}

/// Grid display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridStyle {
    /// No grid (plain background).
    #[default]
    None,
    /// Full grid lines.
    Lines,
    /// Only intersection dots.
    Dots,
}

impl GridStyle {
    /// Cycle to the next grid style.
    pub fn next(self) -> Self {
        match self {
            GridStyle::None => GridStyle::Lines,
            GridStyle::Lines => GridStyle::Dots,
            GridStyle::Dots => GridStyle::None,
        }
    }

    /// Get display name for this grid style.
    pub fn name(self) -> &'static str {
        match self {
            GridStyle::None => "None",
            GridStyle::Lines => "Lines",
            GridStyle::Dots => "Dots",
        }
    }
}

/// Options for a single render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Background color, also used for erase marks.
    pub background: Rgba8,
    /// Grid display style.
    pub grid: GridStyle,
}

impl RenderOptions {
    /// Create options for a surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Rgba8) -> Self {
        self.background = background;
        self
    }

    /// Set the grid style.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = grid;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            background: Rgba8::white(),
            grid: GridStyle::None,
        }
    }
}

/// An in-progress stroke drawn on top of the committed board.
#[derive(Debug, Clone, Copy)]
pub struct StrokePreview<'a> {
    /// Points recorded so far.
    pub points: &'a [Point],
    /// Style the stroke will be committed with.
    pub style: StrokeStyle,
}

const GRID_SPACING: f32 = 25.0;
const GRID_COLOR: Rgba8 = Rgba8 {
    r: 224,
    g: 224,
    b: 224,
    a: 255,
};

/// Replay a stroke list onto a fresh surface.
pub fn render(
    strokes: &[Arc<Stroke>],
    fonts: &FontStore,
    options: &RenderOptions,
) -> Result<Pixmap, RasterError> {
    render_with_preview(strokes, None, fonts, options)
}

/// Replay a stroke list, then draw the in-progress stroke on top.
pub fn render_with_preview(
    strokes: &[Arc<Stroke>],
    preview: Option<StrokePreview<'_>>,
    fonts: &FontStore,
    options: &RenderOptions,
) -> Result<Pixmap, RasterError> {
    let mut pixmap = Pixmap::new(options.width, options.height)
        .ok_or(RasterError::InvalidSize(options.width, options.height))?;
    pixmap.fill(to_color(options.background));

    draw_grid(&mut pixmap, options.grid);

    for stroke in strokes {
        match &**stroke {
            Stroke::Path(path) => draw_path(&mut pixmap, path, options),
            Stroke::Text(stamp) => crate::text::draw_stamp(&mut pixmap, stamp, fonts),
        }
    }

    if let Some(preview) = preview {
        stroke_polyline(
            &mut pixmap,
            preview.points,
            preview.style.color,
            preview.style.width,
        );
    }

    Ok(pixmap)
}

fn draw_path(pixmap: &mut Pixmap, path: &PathStroke, options: &RenderOptions) {
    // Erase marks paint over in the background color.
    let color = match path.kind {
        PathKind::Mark => path.style.color,
        PathKind::EraseMark => options.background,
    };
    stroke_polyline(pixmap, &path.points, color, path.style.width);
}

fn stroke_polyline(pixmap: &mut Pixmap, points: &[Point], color: Rgba8, width: f64) {
    let Some(path) = build_polyline(points) else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;

    let stroke = tiny_skia::Stroke {
        width: width as f32,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

fn build_polyline(points: &[Point]) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for point in rest {
        pb.line_to(point.x as f32, point.y as f32);
    }
    pb.finish()
}

fn draw_grid(pixmap: &mut Pixmap, grid: GridStyle) {
    match grid {
        GridStyle::None => {}
        GridStyle::Lines => draw_grid_lines(pixmap),
        GridStyle::Dots => draw_grid_dots(pixmap),
    }
}

fn draw_grid_lines(pixmap: &mut Pixmap) {
    let width = pixmap.width() as f32;
    let height = pixmap.height() as f32;

    let mut pb = PathBuilder::new();
    let mut x = GRID_SPACING;
    while x < width {
        pb.move_to(x, 0.0);
        pb.line_to(x, height);
        x += GRID_SPACING;
    }
    let mut y = GRID_SPACING;
    while y < height {
        pb.move_to(0.0, y);
        pb.line_to(width, y);
        y += GRID_SPACING;
    }
    let Some(path) = pb.finish() else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color_rgba8(GRID_COLOR.r, GRID_COLOR.g, GRID_COLOR.b, GRID_COLOR.a);

    let stroke = tiny_skia::Stroke {
        width: 1.0,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

fn draw_grid_dots(pixmap: &mut Pixmap) {
    let width = pixmap.width() as f32;
    let height = pixmap.height() as f32;

    let mut paint = Paint::default();
    paint.set_color_rgba8(GRID_COLOR.r, GRID_COLOR.g, GRID_COLOR.b, GRID_COLOR.a);

    let mut y = GRID_SPACING;
    while y < height {
        let mut x = GRID_SPACING;
        while x < width {
            if let Some(rect) = tiny_skia::Rect::from_xywh(x - 1.0, y - 1.0, 2.0, 2.0) {
                pixmap.fill_rect(rect, &paint, Transform::identity(), None);
            }
            x += GRID_SPACING;
        }
        y += GRID_SPACING;
    }
}

fn to_color(color: Rgba8) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}
