use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Upper bound applied to the device pixel ratio handed to the renderer.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Drawable surface size in CSS/logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

impl Viewport {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    #[inline]
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Pixel ratio actually used for the backing surface.
    #[inline]
    #[must_use]
    pub fn pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio.min(MAX_PIXEL_RATIO)
    }

    /// Maps normalized device coordinates to a pixel offset from the viewport
    /// center. Screen Y grows downward, so NDC Y is flipped.
    #[inline]
    #[must_use]
    pub fn ndc_to_pixel_offset(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(ndc.x * self.width * 0.5, -ndc.y * self.height * 0.5)
    }
}
