//! Render Settings and Backend Seam
//!
//! The viewer core never draws. It hands the scene and camera to a
//! [`RenderBackend`] once per tick, together with the output settings that
//! the debug panel can change at runtime.
//!
//! [`HeadlessBackend`] counts frames and remembers what it was told; it is
//! what the demo binary and the tests drive.

use serde::{Deserialize, Serialize};
use showroom_scene::{Camera, Scene};

/// Tone mapping algorithm selection.
///
/// - [`None`](ToneMapping::None): no tone mapping
/// - [`Linear`](ToneMapping::Linear): exposure scale only
/// - [`Reinhard`](ToneMapping::Reinhard): classic operator, soft highlight rolloff
/// - [`Cineon`](ToneMapping::Cineon): film emulation with extended range
/// - [`AcesFilmic`](ToneMapping::AcesFilmic): industry standard filmic curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToneMapping {
    None,
    Linear,
    #[default]
    Reinhard,
    Cineon,
    AcesFilmic,
}

impl ToneMapping {
    /// Returns a human-readable name for the mode.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Linear => "Linear",
            Self::Reinhard => "Reinhard",
            Self::Cineon => "Cineon",
            Self::AcesFilmic => "ACES Filmic",
        }
    }

    /// Returns all available tone mapping modes.
    #[must_use]
    pub fn all() -> &'static [ToneMapping] {
        &[Self::None, Self::Linear, Self::Reinhard, Self::Cineon, Self::AcesFilmic]
    }
}

/// Output configuration handed to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    pub antialias: bool,
    pub physically_correct_lights: bool,
    /// Encode the final image as sRGB.
    pub output_srgb: bool,
    pub tone_mapping: ToneMapping,
    pub exposure: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            antialias: true,
            physically_correct_lights: true,
            output_srgb: true,
            tone_mapping: ToneMapping::Reinhard,
            exposure: 3.0,
        }
    }
}

/// Whatever actually produces pixels.
pub trait RenderBackend {
    /// Resizes the drawable surface. `pixel_ratio` is already clamped.
    fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32);

    fn apply_settings(&mut self, settings: &RenderSettings);

    fn render(&mut self, scene: &Scene, camera: &Camera);
}

/// Backend without a surface.
#[derive(Debug, Clone, Default)]
pub struct HeadlessBackend {
    pub frames: u64,
    pub size: (f32, f32),
    pub pixel_ratio: f32,
    pub settings: RenderSettings,
    /// Number of times settings were (re)applied.
    pub settings_applied: u32,
    /// Visible mesh nodes in the last rendered frame.
    pub last_mesh_count: usize,
}

impl RenderBackend for HeadlessBackend {
    fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.size = (width, height);
        self.pixel_ratio = pixel_ratio;
    }

    fn apply_settings(&mut self, settings: &RenderSettings) {
        self.settings = *settings;
        self.settings_applied += 1;
    }

    fn render(&mut self, scene: &Scene, _camera: &Camera) {
        self.frames += 1;
        self.last_mesh_count = scene
            .nodes
            .values()
            .filter(|node| node.visible && node.mesh.is_some())
            .count();
    }
}
