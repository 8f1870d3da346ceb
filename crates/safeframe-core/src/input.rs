//! Pointer and keyboard events delivered by the host.

use crate::mapper::SurfaceBounds;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event in device coordinates, paired with the rendered surface
/// bounds needed to map it into canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down {
        position: Point,
        surface: SurfaceBounds,
    },
    Move {
        position: Point,
        surface: SurfaceBounds,
    },
    Up {
        position: Point,
        surface: SurfaceBounds,
    },
}

impl PointerEvent {
    /// Device position carried by the event.
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position, .. }
            | PointerEvent::Up { position, .. } => *position,
        }
    }

    /// Surface bounds carried by the event.
    pub fn surface(&self) -> SurfaceBounds {
        match self {
            PointerEvent::Down { surface, .. }
            | PointerEvent::Move { surface, .. }
            | PointerEvent::Up { surface, .. } => *surface,
        }
    }
}

/// Keyboard event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

impl KeyEvent {
    /// Whether this is a press of one of the keys that delete the selection.
    pub fn is_delete(&self) -> bool {
        matches!(self, KeyEvent::Pressed(key) if key == "Delete" || key == "Backspace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accessors() {
        let surface = SurfaceBounds::new(1.0, 2.0, 3.0, 4.0);
        let event = PointerEvent::Move {
            position: Point::new(5.0, 6.0),
            surface,
        };
        assert_eq!(event.position(), Point::new(5.0, 6.0));
        assert_eq!(event.surface(), surface);
    }

    #[test]
    fn test_delete_keys() {
        assert!(KeyEvent::Pressed("Delete".to_string()).is_delete());
        assert!(KeyEvent::Pressed("Backspace".to_string()).is_delete());
        assert!(!KeyEvent::Released("Delete".to_string()).is_delete());
        assert!(!KeyEvent::Pressed("a".to_string()).is_delete());
    }

    #[test]
    fn test_pointer_event_json_shape() {
        let json = r#"{"type":"down","position":{"x":10.0,"y":20.0},"surface":{"left":0.0,"top":0.0,"width":400.0,"height":300.0}}"#;
        let event: PointerEvent = serde_json::from_str(json).unwrap();
        assert!(matches!(event, PointerEvent::Down { .. }));
        assert_eq!(event.position(), Point::new(10.0, 20.0));
    }
}
