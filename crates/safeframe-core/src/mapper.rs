//! Mapping between device pointer coordinates and canvas space.

use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// The rendered bounding box of the display surface, in device pixels.
///
/// The surface may be scaled or letterboxed relative to the logical canvas,
/// so every pointer position goes through [`SurfaceBounds::to_canvas`]
/// before hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceBounds {
    /// Create surface bounds from its top-left corner and rendered size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Surface rendered at the origin with exactly the canvas size (identity mapping).
    pub fn identity(canvas: Size) -> Self {
        Self::new(0.0, 0.0, canvas.width, canvas.height)
    }

    /// Per-axis scale from device pixels to canvas units.
    ///
    /// A collapsed surface axis maps 1:1.
    fn scale(&self, canvas: Size) -> Vec2 {
        let axis = |canvas_len: f64, rendered_len: f64| {
            if rendered_len > 0.0 && rendered_len.is_finite() {
                canvas_len / rendered_len
            } else {
                1.0
            }
        };
        Vec2::new(axis(canvas.width, self.width), axis(canvas.height, self.height))
    }

    /// Transform converting device coordinates to canvas coordinates.
    pub fn device_to_canvas(&self, canvas: Size) -> Affine {
        let scale = self.scale(canvas);
        Affine::scale_non_uniform(scale.x, scale.y) * Affine::translate(Vec2::new(-self.left, -self.top))
    }

    /// Convert a device point to canvas coordinates.
    pub fn to_canvas(&self, device: Point, canvas: Size) -> Point {
        self.device_to_canvas(canvas) * device
    }

    /// Convert a canvas point back to device coordinates.
    pub fn to_device(&self, canvas_point: Point, canvas: Size) -> Point {
        self.device_to_canvas(canvas).inverse() * canvas_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_mapping() {
        let canvas = Size::new(400.0, 300.0);
        let surface = SurfaceBounds::identity(canvas);
        let p = surface.to_canvas(Point::new(123.0, 45.0), canvas);
        assert!((p.x - 123.0).abs() < 1e-10);
        assert!((p.y - 45.0).abs() < 1e-10);
    }

    #[test]
    fn test_offset_and_scale() {
        // Canvas of 800x600 shown at half size, 10px from the left and 20px from the top.
        let canvas = Size::new(800.0, 600.0);
        let surface = SurfaceBounds::new(10.0, 20.0, 400.0, 300.0);
        let p = surface.to_canvas(Point::new(110.0, 70.0), canvas);
        assert!((p.x - 200.0).abs() < 1e-10);
        assert!((p.y - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_non_uniform_scale() {
        let canvas = Size::new(400.0, 400.0);
        let surface = SurfaceBounds::new(0.0, 0.0, 800.0, 200.0);
        let p = surface.to_canvas(Point::new(400.0, 100.0), canvas);
        assert!((p.x - 200.0).abs() < 1e-10);
        assert!((p.y - 200.0).abs() < 1e-10);
    }

    #[test]
    fn test_collapsed_surface_maps_one_to_one() {
        let canvas = Size::new(400.0, 300.0);
        let surface = SurfaceBounds::new(5.0, 5.0, 0.0, 0.0);
        let p = surface.to_canvas(Point::new(15.0, 25.0), canvas);
        assert!((p.x - 10.0).abs() < 1e-10);
        assert!((p.y - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let canvas = Size::new(640.0, 480.0);
        let surface = SurfaceBounds::new(32.0, -12.0, 320.0, 360.0);
        let original = Point::new(99.0, 211.0);
        let back = surface.to_device(surface.to_canvas(original, canvas), canvas);
        assert!((back.x - original.x).abs() < 1e-9);
        assert!((back.y - original.y).abs() < 1e-9);
    }
}
