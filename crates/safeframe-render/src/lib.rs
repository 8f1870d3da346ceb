//! SafeFrame Render Library
//!
//! Renderer abstraction for SafeFrame editor snapshots. The default
//! implementation rasterizes on the CPU into an RGBA image.

mod raster;
mod renderer;

pub use raster::RasterRenderer;
pub use renderer::{OverlayStyle, RenderContext, RenderResult, Renderer, RendererError, StrokeStyle};
