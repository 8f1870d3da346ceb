//! Renderer trait abstraction.

use image::RgbaImage;
use peniko::Color;
use safeframe_core::{HANDLE_SIZE, Snapshot};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Nothing to render: no image loaded")]
    NoCanvas,
    #[error("Canvas too large to rasterize: {width}x{height}")]
    CanvasTooLarge { width: f64, height: f64 },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Fill and outline of one kind of overlay element.
#[derive(Debug, Clone, Copy)]
pub struct StrokeStyle {
    pub fill: Color,
    pub stroke: Color,
    /// Outline width in canvas pixels.
    pub stroke_width: f64,
}

/// Colors used to draw the overlay on top of the image.
#[derive(Debug, Clone, Copy)]
pub struct OverlayStyle {
    /// Dimming layer drawn over the whole image.
    pub dim: Color,
    /// Unselected areas.
    pub area: StrokeStyle,
    /// The selected area.
    pub selected_area: StrokeStyle,
    /// Handle markers of the selected area.
    pub handle: StrokeStyle,
    /// Radius of a handle marker.
    pub handle_radius: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            dim: Color::from_rgba8(0, 0, 0, 77),
            area: StrokeStyle {
                fill: Color::from_rgba8(100, 170, 255, 51),
                stroke: Color::from_rgba8(0, 125, 255, 204),
                stroke_width: 2.0,
            },
            selected_area: StrokeStyle {
                fill: Color::from_rgba8(255, 220, 100, 51),
                stroke: Color::from_rgba8(255, 180, 0, 230),
                stroke_width: 3.0,
            },
            handle: StrokeStyle {
                fill: Color::from_rgba8(255, 255, 255, 255),
                stroke: Color::from_rgba8(255, 200, 0, 230),
                stroke_width: 1.0,
            },
            handle_radius: HANDLE_SIZE / 2.0,
        }
    }
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Editor state to draw.
    pub snapshot: &'a Snapshot,
    /// Source image, scaled to the canvas when drawn.
    pub image: Option<&'a RgbaImage>,
    /// Overlay colors.
    pub style: OverlayStyle,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context with the default style and no image.
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            snapshot,
            image: None,
            style: OverlayStyle::default(),
        }
    }

    /// Set the source image.
    pub fn with_image(mut self, image: &'a RgbaImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Set the overlay style.
    pub fn with_style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the frame for the given context.
    fn build_frame(&mut self, ctx: &RenderContext) -> RenderResult<()>;
}
