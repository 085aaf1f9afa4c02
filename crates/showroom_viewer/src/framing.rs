use std::f32::consts::PI;

use glam::Vec3;
use showroom_core::BoundingBox;
use showroom_scene::{Camera, OrbitControls, OrbitInput};

/// Extra room left around the model when framing.
pub const FRAMING_OFFSET: f32 = 1.25;

/// Distance needed to fit `bounds` in view, before applying the offset.
#[must_use]
pub fn fit_distance(camera: &Camera, bounds: &BoundingBox) -> f32 {
    let size = bounds.size();
    let max_size = size.x.max(size.y).max(size.z);
    let fit_height = max_size / (2.0 * (PI * camera.fov / 360.0).atan());
    let fit_width = fit_height / camera.aspect;
    fit_height.max(fit_width)
}

/// Moves the camera so `bounds` fills the view, keeping the current viewing
/// direction, and retargets the controls on the bounds center.
///
/// Returns the new camera distance, or `None` for empty bounds (nothing
/// changes then).
pub fn frame_bounds(
    camera: &mut Camera,
    controls: &mut OrbitControls,
    bounds: &BoundingBox,
    screen_height: f32,
) -> Option<f32> {
    if bounds.is_empty() {
        log::warn!("Cannot frame an empty bounding box");
        return None;
    }

    let center = bounds.center();
    let distance = FRAMING_OFFSET * fit_distance(camera, bounds);

    let direction = (controls.target - camera.position)
        .try_normalize()
        .unwrap_or(Vec3::NEG_Z)
        * distance;

    controls.min_distance = distance - distance / 2.1;
    controls.target = center;
    controls.max_polar_angle = PI / 2.0;

    camera.near = distance / 100.0;
    camera.far = distance * 100_000.0;
    camera.position = controls.target - direction;

    controls.update(camera, &OrbitInput::default(), screen_height, 0.0);
    camera.update_projection_matrix();

    log::debug!("Framed model: center {center}, distance {distance:.3}");
    Some(distance)
}
