use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::camera::Camera;

const EPS: f32 = 0.0001;

/// Pointer input gathered since the previous frame, in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitInput {
    /// Drag delta with the rotate button held.
    pub rotate: Vec2,
    /// Drag delta with the pan button held.
    pub pan: Vec2,
    /// Scroll steps; positive zooms in.
    pub zoom: f32,
}

impl OrbitInput {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Orbit camera controller around `target`.
///
/// Each [`OrbitControls::update`] reads the camera's current offset from the
/// target in spherical coordinates, applies pending input (with optional
/// damping), clamps the polar angle and distance, and writes the camera back.
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,

    pub min_distance: f32,
    pub max_distance: f32,
    /// Upper bound on the polar angle from +Y, in radians.
    pub max_polar_angle: f32,

    pub target: Vec3,

    rotate_delta: Vec2,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl OrbitControls {
    #[must_use]
    pub fn new(target: Vec3) -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            pan_speed: 1.0,
            damping_factor: 0.05,
            enable_damping: true,

            min_distance: 0.0,
            max_distance: f32::INFINITY,
            max_polar_angle: PI,

            target,

            rotate_delta: Vec2::ZERO,
        }
    }

    /// Pending rotation still being eased in by damping.
    #[must_use]
    pub fn pending_rotation(&self) -> Vec2 {
        self.rotate_delta
    }

    pub fn update(&mut self, camera: &mut Camera, input: &OrbitInput, screen_height: f32, dt: f32) {
        let screen_height = screen_height.max(1.0);

        let offset = camera.position - self.target;
        let mut radius = offset.length();
        let (mut theta, mut phi) = if radius > 0.0 {
            (offset.x.atan2(offset.z), (offset.y / radius).clamp(-1.0, 1.0).acos())
        } else {
            (0.0, PI * 0.5)
        };

        let rotate_per_pixel = 2.0 * PI / screen_height;
        self.rotate_delta -= input.rotate * rotate_per_pixel * self.rotate_speed;

        if self.enable_damping {
            let target_fps = 60.0;
            let retention = (1.0 - self.damping_factor).powf(dt * target_fps);
            let applied = self.rotate_delta * (1.0 - retention);
            theta += applied.x;
            phi += applied.y;
            self.rotate_delta *= retention;
        } else {
            theta += self.rotate_delta.x;
            phi += self.rotate_delta.y;
            self.rotate_delta = Vec2::ZERO;
        }

        phi = phi.clamp(EPS, self.max_polar_angle.min(PI - EPS).max(EPS));

        if input.zoom != 0.0 {
            let scale = (1.0 - self.zoom_speed).powf(input.zoom.abs());
            if input.zoom > 0.0 {
                radius *= scale;
            } else {
                radius /= scale;
            }
        }
        radius = radius.clamp(self.min_distance, self.max_distance.max(self.min_distance));

        let direction = Vec3::new(phi.sin() * theta.sin(), phi.cos(), phi.sin() * theta.cos());

        if input.pan != Vec2::ZERO {
            let half_fov = camera.fov.to_radians() / 2.0;
            let world_per_pixel = 2.0 * radius * half_fov.tan() / screen_height;

            let forward = -direction;
            let right = forward.cross(Vec3::Y).normalize_or_zero();
            let up = right.cross(forward).normalize_or_zero();

            self.target += (right * -input.pan.x + up * input.pan.y) * world_per_pixel * self.pan_speed;
        }

        camera.position = self.target + direction * radius;
        camera.look_at(self.target);
    }
}
