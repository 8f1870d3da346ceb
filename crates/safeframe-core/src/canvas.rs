//! Canvas sizing for a loaded image.

use kurbo::Size;
use thiserror::Error;

/// Editor errors.
///
/// Only the image provider boundary can fail; pointer input and commands are
/// clamped or ignored instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error("Invalid image size: {width}x{height}")]
    InvalidImageSize { width: f64, height: f64 },
    #[error("Invalid viewport size: {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
}

fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// Compute the canvas size for an image shown inside a viewport.
///
/// The image keeps its aspect ratio and is never upscaled. The result is
/// truncated to whole pixels, with a floor of one pixel per axis.
pub fn fit_to_viewport(image: Size, viewport: Size) -> Result<Size, EditorError> {
    if !is_usable(image) {
        return Err(EditorError::InvalidImageSize {
            width: image.width,
            height: image.height,
        });
    }
    if !is_usable(viewport) {
        return Err(EditorError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let (width, height) = if image.width <= viewport.width && image.height <= viewport.height {
        (image.width, image.height)
    } else {
        let image_aspect = image.width / image.height;
        let viewport_aspect = viewport.width / viewport.height;
        if image_aspect > viewport_aspect {
            (viewport.width, viewport.width / image_aspect)
        } else {
            (viewport.height * image_aspect, viewport.height)
        }
    };

    Ok(Size::new(width.trunc().max(1.0), height.trunc().max(1.0)))
}
