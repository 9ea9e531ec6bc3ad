//! Slateboard Raster Library
//!
//! Pure CPU replay rendering and image export for Slateboard boards.

pub mod export;
pub mod renderer;
pub mod text;

pub use export::{ExportError, encode_png, export_png, to_data_url};
pub use renderer::{
    GridStyle, RasterError, RenderOptions, StrokePreview, render, render_with_preview,
};
pub use text::FontStore;
