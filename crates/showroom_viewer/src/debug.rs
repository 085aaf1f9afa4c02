//! Runtime-tweakable lighting and output values behind the debug panel.

use glam::Vec3;

use crate::render::ToneMapping;

/// Slider granularity shared by every numeric control.
pub const DEBUG_STEP: f32 = 0.001;

pub const LIGHT_INTENSITY_RANGE: (f32, f32) = (0.0, 10.0);
pub const LIGHT_POSITION_RANGE: (f32, f32) = (-5.0, 5.0);
pub const EXPOSURE_RANGE: (f32, f32) = (0.0, 10.0);

/// Clamps `value` into `range` and snaps it to [`DEBUG_STEP`].
#[must_use]
pub fn snap(value: f32, (min, max): (f32, f32)) -> f32 {
    let snapped = (value.clamp(min, max) / DEBUG_STEP).round() * DEBUG_STEP;
    snapped.clamp(min, max)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugSettings {
    pub light_intensity: f32,
    pub light_position: Vec3,
    pub exposure: f32,
    pub tone_mapping: ToneMapping,
    pub env_map_intensity: f32,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            light_intensity: 3.0,
            light_position: Vec3::new(0.25, 3.0, -2.25),
            exposure: 3.0,
            tone_mapping: ToneMapping::Reinhard,
            env_map_intensity: 5.0,
        }
    }
}

impl DebugSettings {
    pub fn set_light_intensity(&mut self, value: f32) -> f32 {
        self.light_intensity = snap(value, LIGHT_INTENSITY_RANGE);
        self.light_intensity
    }

    pub fn set_light_position(&mut self, position: Vec3) -> Vec3 {
        self.light_position = Vec3::new(
            snap(position.x, LIGHT_POSITION_RANGE),
            snap(position.y, LIGHT_POSITION_RANGE),
            snap(position.z, LIGHT_POSITION_RANGE),
        );
        self.light_position
    }

    pub fn set_exposure(&mut self, value: f32) -> f32 {
        self.exposure = snap(value, EXPOSURE_RANGE);
        self.exposure
    }

    /// Returns whether the mode actually changed.
    pub fn set_tone_mapping(&mut self, mode: ToneMapping) -> bool {
        let changed = self.tone_mapping != mode;
        self.tone_mapping = mode;
        changed
    }

    pub fn set_env_map_intensity(&mut self, value: f32) -> f32 {
        self.env_map_intensity = value.max(0.0);
        self.env_map_intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_clamps_and_rounds() {
        assert!((snap(12.0, EXPOSURE_RANGE) - 10.0).abs() < 1e-6);
        assert!((snap(-1.0, EXPOSURE_RANGE)).abs() < 1e-6);
        assert!((snap(1.234_56, EXPOSURE_RANGE) - 1.235).abs() < 1e-4);
    }
}
