//! Selection handles and the per-handle resize rule.

use crate::area::{MIN_AREA_SIZE, SafeArea};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Half-width of the square hit region around each handle, in canvas units.
/// Also the diameter of the rendered handle marker.
pub const HANDLE_SIZE: f64 = 8.0;

/// Type of selection handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    /// Corner handle, resizes two axes.
    Corner(Corner),
    /// Edge midpoint handle, resizes one axis.
    Edge(Edge),
}

/// Corner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Edge positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Which edge of an axis follows the pointer during a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// The left or top edge moves; the far edge is anchored.
    Start,
    /// The right or bottom edge moves; the origin is anchored.
    End,
}

/// The axes a handle resizes. `None` leaves that axis untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeRule {
    pub horizontal: Option<Side>,
    pub vertical: Option<Side>,
}

/// Advisory cursor for a canvas point. Never part of editor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorHint {
    #[default]
    Default,
    Move,
    NwseResize,
    NeswResize,
    NsResize,
    EwResize,
}

impl CursorHint {
    /// CSS cursor keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            CursorHint::Default => "default",
            CursorHint::Move => "move",
            CursorHint::NwseResize => "nwse-resize",
            CursorHint::NeswResize => "nesw-resize",
            CursorHint::NsResize => "ns-resize",
            CursorHint::EwResize => "ew-resize",
        }
    }
}

impl HandleKind {
    /// All handles in hit-test order: corners first, then edge midpoints.
    pub const ALL: [HandleKind; 8] = [
        HandleKind::Corner(Corner::TopLeft),
        HandleKind::Corner(Corner::TopRight),
        HandleKind::Corner(Corner::BottomLeft),
        HandleKind::Corner(Corner::BottomRight),
        HandleKind::Edge(Edge::Top),
        HandleKind::Edge(Edge::Bottom),
        HandleKind::Edge(Edge::Left),
        HandleKind::Edge(Edge::Right),
    ];

    /// The edges this handle moves. The opposite edges stay anchored.
    pub fn resize_rule(self) -> ResizeRule {
        let (horizontal, vertical) = match self {
            HandleKind::Corner(Corner::TopLeft) => (Some(Side::Start), Some(Side::Start)),
            HandleKind::Corner(Corner::TopRight) => (Some(Side::End), Some(Side::Start)),
            HandleKind::Corner(Corner::BottomLeft) => (Some(Side::Start), Some(Side::End)),
            HandleKind::Corner(Corner::BottomRight) => (Some(Side::End), Some(Side::End)),
            HandleKind::Edge(Edge::Top) => (None, Some(Side::Start)),
            HandleKind::Edge(Edge::Bottom) => (None, Some(Side::End)),
            HandleKind::Edge(Edge::Left) => (Some(Side::Start), None),
            HandleKind::Edge(Edge::Right) => (Some(Side::End), None),
        };
        ResizeRule {
            horizontal,
            vertical,
        }
    }

    /// Position of this handle on the area's boundary.
    pub fn position_on(self, area: &SafeArea) -> Point {
        let rect = area.as_rect();
        let center = rect.center();
        match self {
            HandleKind::Corner(Corner::TopLeft) => Point::new(rect.x0, rect.y0),
            HandleKind::Corner(Corner::TopRight) => Point::new(rect.x1, rect.y0),
            HandleKind::Corner(Corner::BottomLeft) => Point::new(rect.x0, rect.y1),
            HandleKind::Corner(Corner::BottomRight) => Point::new(rect.x1, rect.y1),
            HandleKind::Edge(Edge::Top) => Point::new(center.x, rect.y0),
            HandleKind::Edge(Edge::Bottom) => Point::new(center.x, rect.y1),
            HandleKind::Edge(Edge::Left) => Point::new(rect.x0, center.y),
            HandleKind::Edge(Edge::Right) => Point::new(rect.x1, center.y),
        }
    }

    /// Cursor shown while hovering or dragging this handle.
    pub fn cursor(self) -> CursorHint {
        match self {
            HandleKind::Corner(Corner::TopLeft | Corner::BottomRight) => CursorHint::NwseResize,
            HandleKind::Corner(Corner::TopRight | Corner::BottomLeft) => CursorHint::NeswResize,
            HandleKind::Edge(Edge::Top | Edge::Bottom) => CursorHint::NsResize,
            HandleKind::Edge(Edge::Left | Edge::Right) => CursorHint::EwResize,
        }
    }
}

/// A selection handle with its position and type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    /// Position in canvas coordinates.
    pub position: Point,
    /// Handle type.
    pub kind: HandleKind,
}

impl Handle {
    /// Create a new handle.
    pub fn new(position: Point, kind: HandleKind) -> Self {
        Self { position, kind }
    }

    /// Check if a point falls in the square tolerance box around this handle.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        (point.x - self.position.x).abs() <= tolerance && (point.y - self.position.y).abs() <= tolerance
    }
}

/// Get the 8 selection handles of an area, in hit-test order.
pub fn get_handles(area: &SafeArea) -> Vec<Handle> {
    HandleKind::ALL
        .iter()
        .map(|&kind| Handle::new(kind.position_on(area), kind))
        .collect()
}

/// Find which handle (if any) is hit at the given point. First match wins.
pub fn hit_test_handles(area: &SafeArea, point: Point) -> Option<HandleKind> {
    get_handles(area)
        .into_iter()
        .find(|handle| handle.hit_test(point, HANDLE_SIZE))
        .map(|handle| handle.kind)
}

/// Resize one axis. Returns the new `(origin, extent)`, or `None` when the
/// result would not exceed the minimum size.
fn resize_axis(origin: f64, extent: f64, pointer: f64, side: Side) -> Option<(f64, f64)> {
    let (origin, extent) = match side {
        Side::Start => (pointer, extent + (origin - pointer)),
        Side::End => (origin, pointer - origin),
    };
    (extent > MIN_AREA_SIZE).then_some((origin, extent))
}

/// Apply a handle drag to an area and return the constrained result.
///
/// The pointer is clamped to the canvas first, so a moving edge pins at the
/// canvas boundary. An axis whose new extent would not exceed
/// [`MIN_AREA_SIZE`] keeps its previous value for this move; the other axis
/// still updates.
pub fn apply_resize(area: &SafeArea, handle: HandleKind, pointer: Point, canvas: Size) -> SafeArea {
    let rule = handle.resize_rule();
    let pointer = Point::new(
        pointer.x.clamp(0.0, canvas.width),
        pointer.y.clamp(0.0, canvas.height),
    );
    let mut resized = *area;

    if let Some(side) = rule.horizontal {
        if let Some((x, width)) = resize_axis(area.position.x, area.width, pointer.x, side) {
            resized.position.x = x;
            resized.width = width;
        }
    }
    if let Some(side) = rule.vertical {
        if let Some((y, height)) = resize_axis(area.position.y, area.height, pointer.y, side) {
            resized.position.y = y;
            resized.height = height;
        }
    }

    resized.constrained(canvas)
}
