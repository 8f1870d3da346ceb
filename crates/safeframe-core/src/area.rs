//! Safe-area rectangle.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Minimum width and height of a safe area, in canvas units.
pub const MIN_AREA_SIZE: f64 = 20.0;

/// Upper bound for the default size of a newly added area.
const DEFAULT_AREA_SIZE: f64 = 200.0;

/// A rectangular region of interest on the canvas.
///
/// Areas have no identity beyond their position in the editor's list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafeArea {
    /// Top-left corner position.
    pub position: Point,
    /// Width of the area.
    pub width: f64,
    /// Height of the area.
    pub height: f64,
}

impl SafeArea {
    /// Create a new area. No constraint is applied.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// The area a fresh "add" produces: `min(200, dimension / 2)` on each
    /// axis, centered on the canvas, then constrained.
    pub fn default_for(canvas: Size) -> Self {
        let width = DEFAULT_AREA_SIZE.min(canvas.width / 2.0);
        let height = DEFAULT_AREA_SIZE.min(canvas.height / 2.0);
        Self::new(
            Point::new((canvas.width - width) / 2.0, (canvas.height - height) / 2.0),
            width,
            height,
        )
        .constrained(canvas)
    }

    /// Get the area as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Whether the point lies inside the area, edges included.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.position.x
            && point.x <= self.position.x + self.width
            && point.y >= self.position.y
            && point.y <= self.position.y + self.height
    }

    /// Normalize the area against the canvas bounds.
    ///
    /// Steps run in a fixed order: origin clamped to zero, overflow on each
    /// axis either shrinks an oversized extent to the canvas (pinning the
    /// origin at zero) or shifts the origin back inside, then the minimum
    /// size floor. Applying it twice gives the same result as once.
    ///
    /// The floor is also taken before the overflow step, so growing a tiny
    /// area can never push its far edge off the canvas. Only a canvas
    /// narrower than [`MIN_AREA_SIZE`] lets the floor win over the bounds.
    pub fn constrained(mut self, canvas: Size) -> Self {
        self.position.x = self.position.x.max(0.0);
        self.position.y = self.position.y.max(0.0);

        let (x, width) = fit_axis(self.position.x, self.width.max(MIN_AREA_SIZE), canvas.width);
        let (y, height) = fit_axis(self.position.y, self.height.max(MIN_AREA_SIZE), canvas.height);
        self.position = Point::new(x, y);

        self.width = width.max(MIN_AREA_SIZE);
        self.height = height.max(MIN_AREA_SIZE);
        self
    }

    /// Move the area so its origin is at `origin`, keeping its size and
    /// keeping it fully inside the canvas. On an axis narrower than the area
    /// the origin stays pinned at zero.
    pub fn dragged_to(mut self, origin: Point, canvas: Size) -> Self {
        let x = origin.x.min(canvas.width - self.width).max(0.0);
        let y = origin.y.min(canvas.height - self.height).max(0.0);
        self.position = Point::new(x, y);
        self
    }
}

fn fit_axis(origin: f64, extent: f64, limit: f64) -> (f64, f64) {
    if origin + extent <= limit {
        (origin, extent)
    } else if extent > limit {
        (0.0, limit)
    } else {
        (limit - extent, extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn canvas() -> Size {
        Size::new(400.0, 300.0)
    }

    fn assert_within(area: &SafeArea, canvas: Size) {
        assert!(area.position.x >= 0.0, "{:?}", area);
        assert!(area.position.y >= 0.0, "{:?}", area);
        // The size floor wins on a canvas narrower than it.
        let max_x = canvas.width.max(MIN_AREA_SIZE);
        let max_y = canvas.height.max(MIN_AREA_SIZE);
        assert!(area.position.x + area.width <= max_x + 1e-9, "{:?}", area);
        assert!(area.position.y + area.height <= max_y + 1e-9, "{:?}", area);
        assert!(area.width >= MIN_AREA_SIZE);
        assert!(area.height >= MIN_AREA_SIZE);
    }

    #[test]
    fn test_default_area_is_centered() {
        let area = SafeArea::default_for(canvas());
        assert!((area.width - 200.0).abs() < f64::EPSILON);
        assert!((area.height - 150.0).abs() < f64::EPSILON);
        assert!((area.position.x - 100.0).abs() < f64::EPSILON);
        assert!((area.position.y - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_area_caps_at_200() {
        let area = SafeArea::default_for(Size::new(1000.0, 800.0));
        assert!((area.width - 200.0).abs() < f64::EPSILON);
        assert!((area.height - 200.0).abs() < f64::EPSILON);
        assert!((area.position.x - 400.0).abs() < f64::EPSILON);
        assert!((area.position.y - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_area_on_tiny_canvas_hits_floor() {
        let area = SafeArea::default_for(Size::new(30.0, 30.0));
        assert!((area.width - MIN_AREA_SIZE).abs() < f64::EPSILON);
        assert!((area.height - MIN_AREA_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let area = SafeArea::new(Point::new(10.0, 10.0), 50.0, 40.0);
        assert!(area.contains(Point::new(10.0, 10.0)));
        assert!(area.contains(Point::new(60.0, 50.0)));
        assert!(area.contains(Point::new(35.0, 30.0)));
        assert!(!area.contains(Point::new(60.1, 30.0)));
        assert!(!area.contains(Point::new(35.0, 9.9)));
    }

    #[test]
    fn test_constrain_negative_origin() {
        let area = SafeArea::new(Point::new(-15.0, -5.0), 100.0, 100.0).constrained(canvas());
        assert_eq!(area.position, Point::ZERO);
        assert!((area.width - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_constrain_shifts_overflowing_origin() {
        let area = SafeArea::new(Point::new(350.0, 250.0), 100.0, 100.0).constrained(canvas());
        assert!((area.position.x - 300.0).abs() < f64::EPSILON);
        assert!((area.position.y - 200.0).abs() < f64::EPSILON);
        assert!((area.width - 100.0).abs() < f64::EPSILON);
        assert!((area.height - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_constrain_shrinks_oversized_area() {
        let area = SafeArea::new(Point::new(50.0, 50.0), 500.0, 400.0).constrained(canvas());
        assert_eq!(area.position, Point::ZERO);
        assert!((area.width - 400.0).abs() < f64::EPSILON);
        assert!((area.height - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_constrain_applies_size_floor() {
        let area = SafeArea::new(Point::new(10.0, 10.0), 5.0, 12.0).constrained(canvas());
        assert!((area.width - MIN_AREA_SIZE).abs() < f64::EPSILON);
        assert!((area.height - MIN_AREA_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_constrain_floor_near_far_edge_stays_inside() {
        let area = SafeArea::new(Point::new(390.0, 290.0), 15.0, 15.0).constrained(canvas());
        assert_eq!(area.position, Point::new(380.0, 280.0));
        assert!((area.width - MIN_AREA_SIZE).abs() < f64::EPSILON);
        assert!((area.height - MIN_AREA_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drag_preserves_size() {
        let area = SafeArea::new(Point::new(100.0, 100.0), 80.0, 60.0);
        let moved = area.dragged_to(Point::new(150.0, 20.0), canvas());
        assert_eq!(moved.position, Point::new(150.0, 20.0));
        assert!((moved.width - 80.0).abs() < f64::EPSILON);
        assert!((moved.height - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drag_clamps_to_canvas() {
        let area = SafeArea::new(Point::new(100.0, 100.0), 80.0, 60.0);
        let moved = area.dragged_to(Point::new(-40.0, 900.0), canvas());
        assert_eq!(moved.position, Point::new(0.0, 240.0));
        assert_within(&moved, canvas());
    }

    #[test]
    fn test_drag_on_narrow_canvas_pins_origin() {
        let narrow = Size::new(15.0, 100.0);
        let area = SafeArea::new(Point::new(0.0, 25.0), MIN_AREA_SIZE, 50.0);
        let moved = area.dragged_to(Point::new(1.0, 30.0), narrow);
        assert_eq!(moved.position, Point::new(0.0, 30.0));
        let moved = area.dragged_to(Point::new(-8.0, 80.0), narrow);
        assert_eq!(moved.position, Point::new(0.0, 50.0));
    }

    #[test]
    fn test_as_rect() {
        let area = SafeArea::new(Point::new(10.0, 20.0), 100.0, 50.0);
        assert_eq!(area.as_rect(), Rect::new(10.0, 20.0, 110.0, 70.0));
    }

    fn arb_area() -> impl Strategy<Value = SafeArea> {
        (-1000.0f64..1000.0, -1000.0f64..1000.0, 0.0f64..1000.0, 0.0f64..1000.0)
            .prop_map(|(x, y, width, height)| SafeArea::new(Point::new(x, y), width, height))
    }

    fn arb_canvas() -> impl Strategy<Value = Size> {
        (1.0f64..800.0, 1.0f64..800.0).prop_map(|(width, height)| Size::new(width, height))
    }

    proptest! {
        #[test]
        fn prop_constrain_is_idempotent(area in arb_area(), canvas in arb_canvas()) {
            let once = area.constrained(canvas);
            let twice = once.constrained(canvas);
            prop_assert_eq!(once, twice);
            assert_within(&once, canvas);
        }

        #[test]
        fn prop_drag_stays_inside(
            area in arb_area(),
            canvas in arb_canvas(),
            x in -2000.0f64..2000.0,
            y in -2000.0f64..2000.0
        ) {
            let area = area.constrained(canvas);
            let moved = area.dragged_to(Point::new(x, y), canvas);
            prop_assert_eq!(moved.width, area.width);
            prop_assert_eq!(moved.height, area.height);
            assert_within(&moved, canvas);
        }
    }
}
