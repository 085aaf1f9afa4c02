use glam::{Mat4, Quat, Vec2, Vec3};
use showroom_core::Ray;

use crate::transform::look_rotation;

/// Perspective camera.
///
/// `fov` is the vertical field of view in degrees. After changing `fov`,
/// `aspect`, `near` or `far`, call [`Camera::update_projection_matrix`];
/// after moving the camera, call [`Camera::update_view_matrix`].
#[derive(Debug, Clone)]
pub struct Camera {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    pub position: Vec3,
    pub rotation: Quat,

    projection_matrix: Mat4,
    view_matrix: Mat4,
    view_projection_matrix: Mat4,
    inverse_view_projection: Mat4,
}

impl Camera {
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            fov,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            view_matrix: Mat4::IDENTITY,
            view_projection_matrix: Mat4::IDENTITY,
            inverse_view_projection: Mat4::IDENTITY,
        };

        cam.update_projection_matrix();
        cam
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far);
        self.refresh_view_projection();
    }

    pub fn update_view_matrix(&mut self) {
        let world = Mat4::from_rotation_translation(self.rotation, self.position);
        self.view_matrix = world.inverse();
        self.refresh_view_projection();
    }

    fn refresh_view_projection(&mut self) {
        self.view_projection_matrix = self.projection_matrix * self.view_matrix;
        self.inverse_view_projection = self.view_projection_matrix.inverse();
    }

    /// Points the camera at `target` (world up = +Y) and refreshes the view matrix.
    pub fn look_at(&mut self, target: Vec3) {
        if let Some(rotation) = look_rotation(self.position, target, Vec3::Y) {
            self.rotation = rotation;
        }
        self.update_view_matrix();
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    #[inline]
    #[must_use]
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    #[inline]
    #[must_use]
    pub fn view_projection_matrix(&self) -> &Mat4 {
        &self.view_projection_matrix
    }

    /// Projects a world-space point to normalized device coordinates.
    /// X and Y are in `[-1, 1]` when on screen; Z is depth in `[0, 1]`.
    #[must_use]
    pub fn project(&self, point: Vec3) -> Vec3 {
        self.view_projection_matrix.project_point3(point)
    }

    /// Inverse of [`Camera::project`].
    #[must_use]
    pub fn unproject(&self, ndc: Vec3) -> Vec3 {
        self.inverse_view_projection.project_point3(ndc)
    }

    /// Picking ray from the camera position through the given NDC point.
    #[must_use]
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let through = self.unproject(ndc.extend(0.5));
        Ray::new(self.position, through - self.position)
    }
}
