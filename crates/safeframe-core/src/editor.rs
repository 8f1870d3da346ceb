//! The safe-area editor: area list, selection and pointer interaction.

use crate::area::SafeArea;
use crate::canvas::{EditorError, fit_to_viewport};
use crate::input::{KeyEvent, PointerEvent};
use crate::selection::{CursorHint, HandleKind, apply_resize, get_handles, hit_test_handles};
use crate::snapshot::{AreaView, Snapshot};
use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Transient pointer interaction, scoped to the selected area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    /// No button held, or the press did not start a manipulation.
    #[default]
    Idle,
    /// Moving the selected area. `offset` is the grab point relative to the
    /// area's origin.
    Dragging { offset: Vec2 },
    /// Resizing the selected area by one of its handles.
    Resizing { handle: HandleKind },
}

impl Interaction {
    /// Check if a drag or resize is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, Interaction::Idle)
    }
}

/// What a host should do after feeding a pointer event to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditorResponse {
    /// Areas or selection changed; the frame needs to be redrawn.
    pub changed: bool,
    /// Cursor to show at the pointer position.
    pub cursor: CursorHint,
}

impl EditorResponse {
    fn new(changed: bool, cursor: CursorHint) -> Self {
        Self { changed, cursor }
    }
}

/// Owns the safe areas of one loaded image and all interaction state.
///
/// Every operation runs to completion synchronously. Before an image is
/// loaded, pointer input and commands are ignored.
#[derive(Debug, Clone, Default)]
pub struct SafeAreaEditor {
    /// Canvas size, set once an image is loaded.
    canvas: Option<Size>,
    /// Areas in z-order (back to front).
    areas: Vec<SafeArea>,
    /// Index into `areas` of the selected area.
    selected: Option<usize>,
    /// Current pointer interaction.
    interaction: Interaction,
}

impl SafeAreaEditor {
    /// Create an editor with no image loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Size the canvas for a newly loaded image and reset the editor to a
    /// single, selected default area.
    pub fn load_image(&mut self, image: Size, viewport: Size) -> Result<Size, EditorError> {
        let canvas = fit_to_viewport(image, viewport)?;
        log::info!(
            "Loaded image {}x{}, canvas {}x{}",
            image.width,
            image.height,
            canvas.width,
            canvas.height
        );

        self.canvas = Some(canvas);
        self.areas.clear();
        self.selected = None;
        self.interaction = Interaction::Idle;
        self.add_area();
        Ok(canvas)
    }

    /// Canvas size, or `None` before an image is loaded.
    pub fn canvas_size(&self) -> Option<Size> {
        self.canvas
    }

    /// Whether an image has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.canvas.is_some()
    }

    /// Areas in z-order; the last one is topmost.
    pub fn areas(&self) -> &[SafeArea] {
        &self.areas
    }

    /// Index of the selected area.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected area.
    pub fn selected_area(&self) -> Option<&SafeArea> {
        self.selected.and_then(|index| self.areas.get(index))
    }

    /// Current pointer interaction.
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Whether "add area" is available.
    pub fn can_add(&self) -> bool {
        self.is_loaded()
    }

    /// Whether "delete area" is available.
    pub fn can_delete(&self) -> bool {
        self.selected.is_some()
    }

    /// Add a default area on top and select it.
    /// Returns false (and does nothing) before an image is loaded.
    pub fn add_area(&mut self) -> bool {
        let Some(canvas) = self.canvas else {
            log::debug!("Ignoring add: no image loaded");
            return false;
        };

        self.areas.push(SafeArea::default_for(canvas));
        let index = self.areas.len() - 1;
        self.selected = Some(index);
        self.interaction = Interaction::Idle;
        log::debug!("Added area {}", index);
        true
    }

    /// Delete the selected area.
    ///
    /// The selection stays at the same index (now the next area up), or
    /// moves to the new last area when the topmost one was deleted.
    /// Returns false (and does nothing) without a selection.
    pub fn delete_selected(&mut self) -> bool {
        let Some(index) = self.selected else {
            log::debug!("Ignoring delete: no selection");
            return false;
        };

        self.areas.remove(index);
        self.interaction = Interaction::Idle;
        self.selected = match self.areas.len() {
            0 => None,
            len => Some(index.min(len - 1)),
        };
        log::debug!("Deleted area {}, selection now {:?}", index, self.selected);
        true
    }

    /// Index of the topmost area containing the point.
    pub fn hit_test_area(&self, point: Point) -> Option<usize> {
        self.areas.iter().rposition(|area| area.contains(point))
    }

    /// Handle on the selected area at the point. Areas that are not
    /// selected never expose handles.
    pub fn hit_test_handle(&self, point: Point) -> Option<HandleKind> {
        self.selected_area()
            .and_then(|area| hit_test_handles(area, point))
    }

    /// Pointer pressed at a canvas point.
    ///
    /// Priority: a handle of the selection starts a resize; a press inside an
    /// unselected area only selects it; a press inside the selected area
    /// starts a drag; anything else clears the selection.
    pub fn pointer_down(&mut self, point: Point) -> EditorResponse {
        if !self.is_loaded() {
            return EditorResponse::default();
        }

        if let Some(handle) = self.hit_test_handle(point) {
            self.interaction = Interaction::Resizing { handle };
            log::debug!("Resizing by {:?}", handle);
            return EditorResponse::new(false, handle.cursor());
        }

        match self.hit_test_area(point) {
            Some(index) if self.selected != Some(index) => {
                self.selected = Some(index);
                self.interaction = Interaction::Idle;
                log::debug!("Selected area {}", index);
                EditorResponse::new(true, CursorHint::Move)
            }
            Some(index) => {
                let offset = point - self.areas[index].position;
                self.interaction = Interaction::Dragging { offset };
                log::debug!("Dragging area {}", index);
                EditorResponse::new(false, CursorHint::Move)
            }
            None => {
                let changed = self.selected.take().is_some();
                self.interaction = Interaction::Idle;
                EditorResponse::new(changed, CursorHint::Default)
            }
        }
    }

    /// Pointer moved to a canvas point.
    ///
    /// Drags and resizes update the selected area; otherwise only the cursor
    /// hint is computed.
    pub fn pointer_move(&mut self, point: Point) -> EditorResponse {
        if !self.interaction.is_active() {
            return EditorResponse::new(false, self.cursor_at(point));
        }
        let (Some(canvas), Some(index)) = (self.canvas, self.selected) else {
            return EditorResponse::default();
        };
        let interaction = self.interaction;
        let Some(area) = self.areas.get_mut(index) else {
            return EditorResponse::default();
        };

        match interaction {
            Interaction::Dragging { offset } => {
                *area = area.dragged_to(point - offset, canvas);
                EditorResponse::new(true, CursorHint::Move)
            }
            Interaction::Resizing { handle } => {
                *area = apply_resize(area, handle, point, canvas);
                EditorResponse::new(true, handle.cursor())
            }
            Interaction::Idle => EditorResponse::default(),
        }
    }

    /// Pointer released, anywhere. Always ends the current interaction.
    pub fn pointer_up(&mut self, point: Point) -> EditorResponse {
        if self.interaction.is_active() {
            log::debug!("Interaction finished: {:?}", self.interaction);
        }
        self.interaction = Interaction::Idle;
        EditorResponse::new(false, self.cursor_at(point))
    }

    /// Map a device-space pointer event into canvas space and dispatch it.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> EditorResponse {
        let Some(canvas) = self.canvas else {
            return EditorResponse::default();
        };
        let point = event.surface().to_canvas(event.position(), canvas);

        match event {
            PointerEvent::Down { .. } => self.pointer_down(point),
            PointerEvent::Move { .. } => self.pointer_move(point),
            PointerEvent::Up { .. } => self.pointer_up(point),
        }
    }

    /// Handle a key event. Delete and Backspace remove the selection.
    /// Returns true if the editor changed.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        event.is_delete() && self.delete_selected()
    }

    /// Advisory cursor for a canvas point given the current selection.
    pub fn cursor_at(&self, point: Point) -> CursorHint {
        if !self.is_loaded() {
            return CursorHint::Default;
        }
        match self.interaction {
            Interaction::Dragging { .. } => CursorHint::Move,
            Interaction::Resizing { handle } => handle.cursor(),
            Interaction::Idle => {
                if let Some(handle) = self.hit_test_handle(point) {
                    handle.cursor()
                } else if self.hit_test_area(point).is_some() {
                    CursorHint::Move
                } else {
                    CursorHint::Default
                }
            }
        }
    }

    /// Render-ready view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            canvas: self.canvas,
            areas: self
                .areas
                .iter()
                .enumerate()
                .map(|(index, area)| AreaView {
                    rect: area.as_rect(),
                    is_selected: self.selected == Some(index),
                })
                .collect(),
            handles: self.selected_area().map(get_handles).unwrap_or_default(),
        }
    }
}
