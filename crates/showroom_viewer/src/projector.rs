//! Screen-space hotspot projection with occlusion testing.

use glam::{Vec2, Vec3};
use showroom_core::Viewport;
use showroom_scene::{Camera, Scene};

/// A fixed world-space location carrying a screen-space hotspot marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPoint {
    pub position: Vec3,
    /// Derived every frame by the projector.
    pub visible: bool,
    /// Pixel offset from the viewport center, derived every frame.
    pub offset: Vec2,
}

impl AnchorPoint {
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            visible: false,
            offset: Vec2::ZERO,
        }
    }
}

/// Receives per-frame hotspot marker updates. The marker at `index` belongs
/// to the anchor at the same index.
pub trait HotspotSink {
    fn update_hotspot(&mut self, index: usize, visible: bool, offset: Vec2);
}

/// Occlusion rule: an anchor is hidden only when the nearest hit along the
/// camera ray is strictly closer than the anchor itself.
#[inline]
#[must_use]
pub fn is_anchor_visible(nearest_hit: Option<f32>, anchor_distance: f32) -> bool {
    nearest_hit.is_none_or(|hit| hit >= anchor_distance)
}

/// Projects `anchor` and decides its visibility against `scene`.
///
/// Returns `(visible, pixel_offset)`. World matrices must be current.
#[must_use]
pub fn project_anchor(anchor: Vec3, camera: &Camera, scene: &Scene, viewport: &Viewport) -> (bool, Vec2) {
    let ndc = camera.project(anchor).truncate();

    let ray = camera.ray_from_ndc(ndc);
    let nearest = scene.raycast(&ray).first().map(|hit| hit.distance);
    let visible = is_anchor_visible(nearest, anchor.distance(camera.position));

    (visible, viewport.ndc_to_pixel_offset(ndc))
}

/// Updates every anchor and pushes the results to `sink`.
pub fn update_hotspots(
    anchors: &mut [AnchorPoint],
    camera: &Camera,
    scene: &Scene,
    viewport: &Viewport,
    sink: &mut impl HotspotSink,
) {
    for (index, anchor) in anchors.iter_mut().enumerate() {
        let (visible, offset) = project_anchor(anchor.position, camera, scene, viewport);
        anchor.visible = visible;
        anchor.offset = offset;
        sink.update_hotspot(index, visible, offset);
    }
}
