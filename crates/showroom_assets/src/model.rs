//! Imported model data, detached from any scene.
//!
//! Import produces plain data so it can be built off the frame thread; the
//! frame thread then instantiates it into the live [`Scene`].

use std::sync::Arc;

use showroom_animation::AnimationClip;
use showroom_scene::{Geometry, Material, Mesh, Node, NodeKey, Scene, Transform};

#[derive(Debug, Clone)]
pub struct ModelNode {
    pub name: String,
    pub transform: Transform,
    /// `(geometry, material)` indices into [`ModelData`], one per primitive.
    pub primitives: Vec<(usize, usize)>,
    pub children: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct ModelData {
    /// Source path or URI the model came from.
    pub source: String,
    pub nodes: Vec<ModelNode>,
    pub roots: Vec<usize>,
    pub geometries: Vec<Geometry>,
    pub materials: Vec<Material>,
    pub clips: Vec<Arc<AnimationClip>>,
}

impl ModelData {
    /// Adds the model under a new root node named `root_name` and returns
    /// that root. Resources are moved into the scene's pools.
    ///
    /// A node with one primitive carries the mesh itself; with several, each
    /// primitive becomes a child node `<name>_<i>`.
    pub fn instantiate(self, scene: &mut Scene, root_name: &str) -> NodeKey {
        let geometry_keys: Vec<_> = self.geometries.into_iter().map(|g| scene.add_geometry(g)).collect();
        let material_keys: Vec<_> = self.materials.into_iter().map(|m| scene.add_material(m)).collect();

        let mesh_for = |(geometry, material): (usize, usize)| {
            Some(Mesh {
                geometry: *geometry_keys.get(geometry)?,
                material: *material_keys.get(material)?,
            })
        };

        let root = scene.add_node(Node::new(root_name));

        let mut stack: Vec<(usize, NodeKey)> = self.roots.iter().rev().map(|&i| (i, root)).collect();
        while let Some((index, parent)) = stack.pop() {
            let Some(model_node) = self.nodes.get(index) else {
                continue;
            };

            let mut node = Node::new(model_node.name.clone()).with_transform(model_node.transform.clone());
            if let [single] = model_node.primitives.as_slice()
                && let Some(mesh) = mesh_for(*single)
            {
                node = node.with_mesh(mesh);
            }
            let key = scene.add_to_parent(node, parent);

            if model_node.primitives.len() > 1 {
                for (i, primitive) in model_node.primitives.iter().enumerate() {
                    if let Some(mesh) = mesh_for(*primitive) {
                        let child = Node::new(format!("{}_{i}", model_node.name)).with_mesh(mesh);
                        scene.add_to_parent(child, key);
                    }
                }
            }

            stack.extend(model_node.children.iter().rev().map(|&c| (c, key)));
        }

        root
    }
}
