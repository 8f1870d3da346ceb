//! Render-ready view of the editor state.

use crate::selection::Handle;
use kurbo::{Rect, Size};
use serde::{Deserialize, Serialize};

/// One area as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaView {
    pub rect: Rect,
    pub is_selected: bool,
}

/// Everything a renderer needs to draw one frame, bottom to top.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Canvas size, or `None` before an image is loaded.
    pub canvas: Option<Size>,
    /// Areas in z-order; the last one is topmost.
    pub areas: Vec<AreaView>,
    /// Handles of the selected area, empty without a selection.
    pub handles: Vec<Handle>,
}

impl Snapshot {
    /// The selected area, if any.
    pub fn selected(&self) -> Option<&AreaView> {
        self.areas.iter().find(|view| view.is_selected)
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
