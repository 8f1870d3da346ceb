//! Application state: the image provider, input replay and command surface
//! wired around one editor.

use crate::export::encode_png;
use crate::session::{Session, SessionStep};
use image::RgbaImage;
use kurbo::Size;
use safeframe_core::{EditorError, SafeAreaEditor, Snapshot};
use safeframe_render::{OverlayStyle, RasterRenderer, RenderContext, Renderer, RendererError};
use std::path::Path;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Session error: {0}")]
    Session(#[from] serde_json::Error),
    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),
    #[error(transparent)]
    Editor(#[from] EditorError),
    #[error(transparent)]
    Render(#[from] RendererError),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Space available to the canvas, in pixels.
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Overlay colors for previews.
    pub style: OverlayStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            viewport_height: 800,
            pretty: true,
            style: OverlayStyle::default(),
        }
    }
}

impl AppConfig {
    /// The viewport as a size.
    pub fn viewport(&self) -> Size {
        Size::new(self.viewport_width as f64, self.viewport_height as f64)
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    editor: SafeAreaEditor,
    /// Decoded source image, kept for previews.
    image: Option<RgbaImage>,
    renderer: RasterRenderer,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            editor: SafeAreaEditor::new(),
            image: None,
            renderer: RasterRenderer::new(),
        }
    }

    pub fn editor(&self) -> &SafeAreaEditor {
        &self.editor
    }

    /// Decode an image file and reset the editor for it.
    /// Returns the canvas size.
    pub fn load_image(&mut self, path: &Path) -> Result<Size, AppError> {
        let image = image::open(path)?.to_rgba8();
        let (width, height) = image.dimensions();
        let canvas = self
            .editor
            .load_image(Size::new(width as f64, height as f64), self.config.viewport())?;
        log::info!("Opened {:?} ({}x{})", path, width, height);
        self.image = Some(image);
        Ok(canvas)
    }

    /// Reset the editor for an image known only by its size. Previews of
    /// such an image show the overlay on a transparent background.
    pub fn load_dimensions(&mut self, width: f64, height: f64) -> Result<Size, AppError> {
        let canvas = self
            .editor
            .load_image(Size::new(width, height), self.config.viewport())?;
        self.image = None;
        Ok(canvas)
    }

    /// Read and replay a session file.
    pub fn run_session_file(&mut self, path: &Path) -> Result<usize, AppError> {
        let json = std::fs::read_to_string(path)?;
        let session = Session::from_json(&json)?;
        log::info!("Replaying {} steps from {:?}", session.steps.len(), path);
        self.run_session(&session)
    }

    /// Replay every step of a session against the editor.
    /// Returns how many steps changed the editor.
    pub fn run_session(&mut self, session: &Session) -> Result<usize, AppError> {
        let mut changed = 0;
        for (index, step) in session.steps.iter().enumerate() {
            if self.apply_step(session, step)? {
                changed += 1;
            } else {
                log::trace!("Step {} had no effect: {:?}", index, step);
            }
        }
        Ok(changed)
    }

    fn apply_step(&mut self, session: &Session, step: &SessionStep) -> Result<bool, AppError> {
        if let SessionStep::Load { width, height } = *step {
            self.load_dimensions(width, height)?;
            return Ok(true);
        }

        let Some(canvas) = self.editor.canvas_size() else {
            log::warn!("Ignoring {:?}: no image loaded", step);
            return Ok(false);
        };

        let changed = match step {
            SessionStep::Add => self.editor.add_area(),
            SessionStep::Delete => self.editor.delete_selected(),
            SessionStep::Key { .. } => step
                .key_event()
                .is_some_and(|event| self.editor.handle_key(&event)),
            SessionStep::Down { .. } | SessionStep::Move { .. } | SessionStep::Up { .. } => step
                .pointer_event(session.surface_for(canvas))
                .is_some_and(|event| self.editor.handle_pointer_event(&event).changed),
            SessionStep::Load { .. } => false,
        };
        Ok(changed)
    }

    /// Current render-ready state.
    pub fn snapshot(&self) -> Snapshot {
        self.editor.snapshot()
    }

    /// Current state as JSON.
    pub fn snapshot_json(&self) -> Result<String, AppError> {
        Ok(self.snapshot().to_json(self.config.pretty)?)
    }

    /// Render the image with its overlay at canvas size.
    pub fn render_preview(&mut self) -> Result<RgbaImage, AppError> {
        let snapshot = self.editor.snapshot();
        let mut ctx = RenderContext::new(&snapshot).with_style(self.config.style);
        if let Some(image) = &self.image {
            ctx = ctx.with_image(image);
        }
        self.renderer.build_frame(&ctx)?;
        Ok(self.renderer.take_frame())
    }

    /// Render a preview and write it as a PNG file.
    pub fn export_preview(&mut self, path: &Path) -> Result<(), AppError> {
        let frame = self.render_preview()?;
        let png_data = encode_png(&frame)?;
        std::fs::write(path, &png_data)?;
        log::info!("Exported preview to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use kurbo::Point;
    use safeframe_core::{Interaction, SurfaceBounds};

    fn app_with_canvas() -> App {
        let mut app = App::new();
        app.load_dimensions(400.0, 300.0).unwrap();
        app
    }

    #[test]
    fn test_steps_before_load_are_ignored() {
        let mut app = App::new();
        let session = Session {
            surface: None,
            steps: vec![
                SessionStep::Add,
                SessionStep::Down { x: 10.0, y: 10.0 },
                SessionStep::Delete,
            ],
        };
        assert_eq!(app.run_session(&session).unwrap(), 0);
        assert!(app.editor().areas().is_empty());
    }

    #[test]
    fn test_resize_session() {
        let mut app = app_with_canvas();
        let session = Session::from_json(
            r#"{ "steps": [
                { "type": "down", "x": 300, "y": 225 },
                { "type": "move", "x": 350, "y": 255 },
                { "type": "up", "x": 350, "y": 255 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(app.run_session(&session).unwrap(), 1);

        let area = app.editor().areas()[0];
        assert!((area.width - 250.0).abs() < f64::EPSILON);
        assert!((area.height - 180.0).abs() < f64::EPSILON);
        assert_eq!(app.editor().interaction(), Interaction::Idle);
    }

    #[test]
    fn test_scaled_surface_session() {
        let mut app = app_with_canvas();
        let session = Session {
            surface: Some(SurfaceBounds::new(0.0, 0.0, 800.0, 600.0)),
            steps: vec![
                SessionStep::Down { x: 400.0, y: 300.0 },
                SessionStep::Move { x: 440.0, y: 300.0 },
                SessionStep::Up { x: 440.0, y: 300.0 },
            ],
        };
        app.run_session(&session).unwrap();
        assert_eq!(app.editor().areas()[0].position, Point::new(120.0, 75.0));
    }

    #[test]
    fn test_commands_and_keys() {
        let mut app = app_with_canvas();
        let session = Session {
            surface: None,
            steps: vec![
                SessionStep::Add,
                SessionStep::Add,
                SessionStep::Key {
                    key: "Delete".to_string(),
                },
                SessionStep::Delete,
            ],
        };
        assert_eq!(app.run_session(&session).unwrap(), 4);
        assert_eq!(app.editor().areas().len(), 1);
        assert_eq!(app.editor().selected_index(), Some(0));
    }

    #[test]
    fn test_load_step_resets() {
        let mut app = app_with_canvas();
        let session = Session {
            surface: None,
            steps: vec![
                SessionStep::Add,
                SessionStep::Load {
                    width: 3000.0,
                    height: 1000.0,
                },
            ],
        };
        app.run_session(&session).unwrap();
        assert_eq!(app.editor().canvas_size(), Some(Size::new(1280.0, 426.0)));
        assert_eq!(app.editor().areas().len(), 1);
    }

    #[test]
    fn test_invalid_load_step_is_an_error() {
        let mut app = app_with_canvas();
        let session = Session {
            surface: None,
            steps: vec![SessionStep::Load {
                width: 0.0,
                height: 10.0,
            }],
        };
        assert!(matches!(app.run_session(&session), Err(AppError::Editor(_))));
    }

    #[test]
    fn test_snapshot_json() {
        let mut app = app_with_canvas();
        app.config.pretty = false;
        let json = app.snapshot_json().unwrap();
        let snapshot: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.areas.len(), 1);
        assert!(snapshot.areas[0].is_selected);
    }

    #[test]
    fn test_load_and_export_image() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.png");
        RgbaImage::from_pixel(64, 48, Rgba([90, 90, 90, 255]))
            .save(&source)
            .unwrap();

        let mut app = App::new();
        let canvas = app.load_image(&source).unwrap();
        assert_eq!(canvas, Size::new(64.0, 48.0));

        let preview = dir.path().join("preview.png");
        app.export_preview(&preview).unwrap();
        let exported = image::open(&preview).unwrap().to_rgba8();
        assert_eq!(exported.dimensions(), (64, 48));
    }

    #[test]
    fn test_preview_without_image_fails() {
        let mut app = App::new();
        assert!(matches!(
            app.render_preview(),
            Err(AppError::Render(RendererError::NoCanvas))
        ));
    }
}
