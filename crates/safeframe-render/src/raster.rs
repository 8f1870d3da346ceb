//! CPU raster renderer.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError, StrokeStyle};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use kurbo::{Point, Rect};
use peniko::Color;

/// Largest canvas edge the raster renderer accepts, in pixels.
const MAX_CANVAS_EDGE: f64 = 16384.0;

/// Renders snapshots into an RGBA frame buffer.
///
/// Pixels are sampled at their centers and composited source-over.
#[derive(Debug, Default)]
pub struct RasterRenderer {
    frame: RgbaImage,
}

impl RasterRenderer {
    /// Create a new raster renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last rendered frame.
    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    /// Take ownership of the last rendered frame.
    pub fn take_frame(&mut self) -> RgbaImage {
        std::mem::take(&mut self.frame)
    }

    fn render_area(&mut self, rect: Rect, style: &StrokeStyle) {
        self.fill_rect(rect, style.fill);
        let half = style.stroke_width / 2.0;
        let outer = rect.inflate(half, half);
        let inner = rect.inflate(-half, -half);
        self.fill_where(outer, style.stroke, |p| !inner.contains(p));
    }

    fn render_handle(&mut self, center: Point, radius: f64, style: &StrokeStyle) {
        let half = style.stroke_width / 2.0;
        let reach = radius + half;
        let bounds = Rect::new(center.x - reach, center.y - reach, center.x + reach, center.y + reach);
        self.fill_where(bounds, style.fill, |p| p.distance(center) <= radius);
        self.fill_where(bounds, style.stroke, |p| (p.distance(center) - radius).abs() <= half);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_where(rect, color, |_| true);
    }

    /// Blend `color` into every pixel whose center lies in `bounds` and
    /// passes `covers`.
    fn fill_where(&mut self, bounds: Rect, color: Color, covers: impl Fn(Point) -> bool) {
        let (width, height) = self.frame.dimensions();
        let x0 = bounds.x0.floor().max(0.0) as u32;
        let y0 = bounds.y0.floor().max(0.0) as u32;
        let x1 = (bounds.x1.ceil().max(0.0) as u32).min(width);
        let y1 = (bounds.y1.ceil().max(0.0) as u32).min(height);
        let src = color.to_rgba8();
        let src = Rgba([src.r, src.g, src.b, src.a]);

        for y in y0..y1 {
            for x in x0..x1 {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if inside(bounds, center) && covers(center) {
                    blend(self.frame.get_pixel_mut(x, y), src);
                }
            }
        }
    }
}

/// Half-open containment, so adjacent rectangles never double-blend a pixel.
fn inside(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x < rect.x1 && p.y >= rect.y0 && p.y < rect.y1
}

/// Source-over compositing with straight (non-premultiplied) alpha.
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    let channel = |s: u8, d: u8| {
        let value = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };
    *dst = Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ]);
}

impl Renderer for RasterRenderer {
    fn build_frame(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        let canvas = ctx.snapshot.canvas.ok_or(RendererError::NoCanvas)?;
        if canvas.width > MAX_CANVAS_EDGE || canvas.height > MAX_CANVAS_EDGE {
            return Err(RendererError::CanvasTooLarge {
                width: canvas.width,
                height: canvas.height,
            });
        }
        let width = canvas.width.max(1.0) as u32;
        let height = canvas.height.max(1.0) as u32;

        self.frame = match ctx.image {
            Some(image) => imageops::resize(image, width, height, FilterType::Triangle),
            None => RgbaImage::new(width, height),
        };
        log::debug!("Rendering {} areas on {}x{} frame", ctx.snapshot.areas.len(), width, height);

        let style = ctx.style;
        self.fill_rect(Rect::new(0.0, 0.0, width as f64, height as f64), style.dim);

        for view in &ctx.snapshot.areas {
            if view.is_selected {
                self.render_area(view.rect, &style.selected_area);
                for handle in &ctx.snapshot.handles {
                    self.render_handle(handle.position, style.handle_radius, &style.handle);
                }
            } else {
                self.render_area(view.rect, &style.area);
            }
        }
        Ok(())
    }
}
