//! Image host adapter - derives canvas bounds and scale from an image's size.

use crate::error::{SelectorError, SelectorResult};
use crate::geometry::CanvasBounds;
use serde::{Deserialize, Serialize};

/// Natural (unscaled) pixel size of the uploaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Fit the image to a fixed-width container.
    ///
    /// Returns the canvas bounds and the scale factor (canvas pixels per image
    /// pixel). The canvas height follows the image's aspect ratio.
    pub fn fit_to_width(&self, container_width: f32) -> SelectorResult<(CanvasBounds, f32)> {
        if self.width == 0 || self.height == 0 {
            return Err(SelectorError::InvalidImage {
                width: self.width,
                height: self.height,
            });
        }
        let scale = container_width / self.width as f32;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(SelectorError::InvalidScale(scale));
        }
        let bounds = CanvasBounds::new(container_width, self.height as f32 * scale);
        Ok((bounds, scale))
    }
}
