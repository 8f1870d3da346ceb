//! SafeFrame Core Library
//!
//! Platform-agnostic geometry and interaction logic for the SafeFrame
//! safe-area editor: canvas sizing, device-to-canvas mapping, hit testing,
//! drag/resize state and bounds enforcement.

pub mod area;
pub mod canvas;
pub mod editor;
pub mod input;
pub mod mapper;
pub mod selection;
pub mod snapshot;

pub use area::{MIN_AREA_SIZE, SafeArea};
pub use canvas::{EditorError, fit_to_viewport};
pub use editor::{EditorResponse, Interaction, SafeAreaEditor};
pub use input::{KeyEvent, PointerEvent};
pub use mapper::SurfaceBounds;
pub use selection::{
    Corner, CursorHint, Edge, HANDLE_SIZE, Handle, HandleKind, ResizeRule, Side, apply_resize,
    get_handles, hit_test_handles,
};
pub use snapshot::{AreaView, Snapshot};
