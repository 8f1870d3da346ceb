//! Scripted input sessions.
//!
//! A session is a JSON document describing pointer, key and command steps,
//! in canvas-relative device coordinates:
//!
//! ```json
//! {
//!   "surface": { "left": 0, "top": 0, "width": 400, "height": 300 },
//!   "steps": [
//!     { "type": "down", "x": 300, "y": 225 },
//!     { "type": "move", "x": 350, "y": 255 },
//!     { "type": "up", "x": 350, "y": 255 },
//!     { "type": "add" },
//!     { "type": "key", "key": "Delete" }
//!   ]
//! }
//! ```

use kurbo::{Point, Size};
use safeframe_core::{KeyEvent, PointerEvent, SurfaceBounds};
use serde::{Deserialize, Serialize};

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionStep {
    /// Pointer pressed at a device position.
    Down { x: f64, y: f64 },
    /// Pointer moved to a device position.
    Move { x: f64, y: f64 },
    /// Pointer released at a device position.
    Up { x: f64, y: f64 },
    /// Key pressed.
    Key { key: String },
    /// "Add area" command.
    Add,
    /// "Delete area" command.
    Delete,
    /// A new image of the given size finished loading.
    Load { width: f64, height: f64 },
}

impl SessionStep {
    /// The pointer event for this step, if it is a pointer step.
    pub fn pointer_event(&self, surface: SurfaceBounds) -> Option<PointerEvent> {
        match *self {
            SessionStep::Down { x, y } => Some(PointerEvent::Down {
                position: Point::new(x, y),
                surface,
            }),
            SessionStep::Move { x, y } => Some(PointerEvent::Move {
                position: Point::new(x, y),
                surface,
            }),
            SessionStep::Up { x, y } => Some(PointerEvent::Up {
                position: Point::new(x, y),
                surface,
            }),
            _ => None,
        }
    }

    /// The key event for this step, if it is a key step.
    pub fn key_event(&self) -> Option<KeyEvent> {
        match self {
            SessionStep::Key { key } => Some(KeyEvent::Pressed(key.clone())),
            _ => None,
        }
    }
}

/// A scripted input session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Rendered surface bounds. Defaults to the canvas at the origin.
    #[serde(default)]
    pub surface: Option<SurfaceBounds>,
    /// Steps to replay, in order.
    #[serde(default)]
    pub steps: Vec<SessionStep>,
}

impl Session {
    /// Parse a session from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Surface bounds to map pointer steps with, for the current canvas.
    pub fn surface_for(&self, canvas: Size) -> SurfaceBounds {
        self.surface.unwrap_or_else(|| SurfaceBounds::identity(canvas))
    }
}
