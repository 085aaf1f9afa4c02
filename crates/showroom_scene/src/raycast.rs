//! Ray casting against scene meshes.
//!
//! Cost is linear in the number of triangles; each mesh is first rejected
//! by its world-space bounding box.

use glam::Vec3;
use showroom_core::Ray;

use crate::NodeKey;
use crate::mesh::Side;
use crate::scene::Scene;

/// One ray/triangle hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Distance from the ray origin to `point`.
    pub distance: f32,
    pub point: Vec3,
    pub node: NodeKey,
    pub triangle_index: usize,
}

impl Scene {
    /// Intersects `ray` with every visible mesh, nearest hit first.
    ///
    /// Requires up-to-date world matrices.
    #[must_use]
    pub fn raycast(&self, ray: &Ray) -> Vec<Intersection> {
        let mut hits = Vec::new();

        let mut stack: Vec<NodeKey> = self.root_nodes.iter().rev().copied().collect();
        while let Some(key) = stack.pop() {
            let Some(node) = self.nodes.get(key) else {
                continue;
            };
            if !node.visible {
                continue;
            }
            stack.extend(node.children().iter().rev().copied());

            let Some(mesh) = node.mesh else {
                continue;
            };
            let (Some(geometry), Some(material)) =
                (self.geometries.get(mesh.geometry), self.materials.get(mesh.material))
            else {
                continue;
            };

            let world = node.world_matrix();
            if ray.intersect_box(&geometry.bounding_box().transform(world)).is_none() {
                continue;
            }

            for (triangle_index, [a, b, c]) in geometry.triangles().enumerate() {
                let (a, b, c) = (
                    world.transform_point3(a),
                    world.transform_point3(b),
                    world.transform_point3(c),
                );

                let hit = match material.side {
                    Side::Front => ray.intersect_triangle(a, b, c, true),
                    Side::Back => ray.intersect_triangle(c, b, a, true),
                    Side::Double => ray.intersect_triangle(a, b, c, false),
                };

                if let Some(distance) = hit {
                    hits.push(Intersection {
                        distance,
                        point: ray.at(distance),
                        node: key,
                        triangle_index,
                    });
                }
            }
        }

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
