//! Board image export.

use crate::renderer::{GridStyle, RasterError, RenderOptions, render};
use crate::text::FontStore;
use slateboard_core::Stroke;
use std::sync::Arc;
use thiserror::Error;
use tiny_skia::Pixmap;

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Encode a rendered surface as PNG bytes.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, ExportError> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&demultiply(pixmap))?;
    }
    Ok(png_data)
}

// Surface data is premultiplied; PNG wants straight RGBA.
fn demultiply(pixmap: &Pixmap) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let px = px.demultiply();
        rgba.extend_from_slice(&[px.red(), px.green(), px.blue(), px.alpha()]);
    }
    rgba
}

/// Render a stroke list and encode it as PNG bytes.
///
/// The grid is never exported: it is a viewing aid, not ink.
pub fn export_png(
    strokes: &[Arc<Stroke>],
    fonts: &FontStore,
    options: &RenderOptions,
) -> Result<Vec<u8>, ExportError> {
    let options = options.with_grid(GridStyle::None);
    let pixmap = render(strokes, fonts, &options)?;
    encode_png(&pixmap)
}

/// Encode a rendered surface as a PNG data URL.
pub fn to_data_url(pixmap: &Pixmap) -> Result<String, ExportError> {
    use base64::{Engine, engine::general_purpose::STANDARD};

    let png_data = encode_png(pixmap)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png_data)))
}
