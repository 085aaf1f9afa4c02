use glam::Vec3;

/// A directional key light. Shines from `position` toward the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 3.0,
            position: Vec3::new(0.25, 3.0, -2.25),
        }
    }
}

impl DirectionalLight {
    /// Unit vector the light travels along.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}
