use glam::{Affine3A, Vec4};
use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use showroom_core::BoundingBox;

use crate::environment::Environment;
use crate::light::DirectionalLight;
use crate::mesh::{Geometry, Material};
use crate::node::Node;
use crate::{GeometryKey, MaterialKey, NodeKey};

/// Counts of what [`Scene::remove_subtree`] released.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReleaseStats {
    pub nodes: usize,
    pub geometries: usize,
    pub materials: usize,
}

/// Scene graph container.
///
/// Nodes live in a slot map and reference geometries and materials by key, so
/// a whole model subtree can be dropped and its resources released
/// explicitly in one pass.
pub struct Scene {
    pub nodes: SlotMap<NodeKey, Node>,
    pub root_nodes: Vec<NodeKey>,

    pub geometries: SlotMap<GeometryKey, Geometry>,
    pub materials: SlotMap<MaterialKey, Material>,

    pub key_light: DirectionalLight,
    pub environment: Environment,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            geometries: SlotMap::with_key(),
            materials: SlotMap::with_key(),
            key_light: DirectionalLight::default(),
            environment: Environment::default(),
        }
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    /// Adds a node at the root level.
    pub fn add_node(&mut self, node: Node) -> NodeKey {
        let key = self.nodes.insert(node);
        self.root_nodes.push(key);
        key
    }

    /// Adds a node as the last child of `parent`. A stale parent key makes
    /// the node a root instead.
    pub fn add_to_parent(&mut self, node: Node, parent: NodeKey) -> NodeKey {
        if !self.nodes.contains_key(parent) {
            log::warn!("add_to_parent: parent node no longer exists, adding '{}' at root", node.name);
            return self.add_node(node);
        }

        let key = self.nodes.insert(node);
        self.link(key, parent);
        key
    }

    /// Moves `child` under `parent`, detaching it from its current parent.
    pub fn attach(&mut self, child: NodeKey, parent: NodeKey) {
        if child == parent || !self.nodes.contains_key(child) || !self.nodes.contains_key(parent) {
            return;
        }
        self.detach(child);
        self.link(child, parent);
    }

    fn link(&mut self, child: NodeKey, parent: NodeKey) {
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
            c.transform.mark_dirty();
        }
    }

    /// Unlinks `node` from its parent (or from the root list) without removing it.
    fn detach(&mut self, node: NodeKey) {
        let parent = self.nodes.get(node).and_then(Node::parent);
        match parent {
            Some(parent) => {
                if let Some(p) = self.nodes.get_mut(parent) {
                    p.children.retain(|c| *c != node);
                }
            }
            None => self.root_nodes.retain(|r| *r != node),
        }
        if let Some(n) = self.nodes.get_mut(node) {
            n.parent = None;
        }
    }

    #[inline]
    #[must_use]
    pub fn get_node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    #[inline]
    pub fn get_node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// `root` and all of its descendants in depth-first pre-order.
    #[must_use]
    pub fn descendants(&self, root: NodeKey) -> Vec<NodeKey> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(key) = stack.pop() {
            let Some(node) = self.nodes.get(key) else {
                continue;
            };
            out.push(key);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// First node named `name` in the subtree under `root` (pre-order).
    #[must_use]
    pub fn find_node_by_name(&self, root: NodeKey, name: &str) -> Option<NodeKey> {
        self.descendants(root)
            .into_iter()
            .find(|&key| self.nodes.get(key).is_some_and(|n| n.name == name))
    }

    // ========================================================================
    // Resources
    // ========================================================================

    pub fn add_geometry(&mut self, geometry: Geometry) -> GeometryKey {
        self.geometries.insert(geometry)
    }

    pub fn add_material(&mut self, material: Material) -> MaterialKey {
        self.materials.insert(material)
    }

    /// Removes `root` with its whole subtree and releases every geometry and
    /// material the subtree references.
    pub fn remove_subtree(&mut self, root: NodeKey) -> ReleaseStats {
        if !self.nodes.contains_key(root) {
            return ReleaseStats::default();
        }

        self.detach(root);

        let mut geometries = FxHashSet::default();
        let mut materials = FxHashSet::default();
        let mut stats = ReleaseStats::default();

        for key in self.descendants(root) {
            if let Some(node) = self.nodes.remove(key) {
                stats.nodes += 1;
                if let Some(mesh) = node.mesh {
                    geometries.insert(mesh.geometry);
                    materials.insert(mesh.material);
                }
            }
        }

        stats.geometries = geometries
            .into_iter()
            .filter(|key| self.geometries.remove(*key).is_some())
            .count();
        stats.materials = materials
            .into_iter()
            .filter(|key| self.materials.remove(*key).is_some())
            .count();

        stats
    }

    // ========================================================================
    // Materials
    // ========================================================================

    /// Sets the base color of every colorable material reachable from a mesh
    /// in the scene. Returns how many materials changed.
    pub fn set_colorable_color(&mut self, color: Vec4) -> usize {
        let keys: FxHashSet<MaterialKey> = self
            .nodes
            .values()
            .filter_map(|n| n.mesh.map(|m| m.material))
            .collect();

        let mut changed = 0;
        for key in keys {
            if let Some(material) = self.materials.get_mut(key)
                && material.is_colorable()
            {
                material.set_color(color);
                changed += 1;
            }
        }
        changed
    }

    /// Flags every material for a rebuild (after tone-mapping changes).
    pub fn mark_all_materials_dirty(&mut self) {
        for material in self.materials.values_mut() {
            material.mark_needs_update();
        }
    }

    // ========================================================================
    // Transforms & bounds
    // ========================================================================

    /// Propagates local transforms down the hierarchy into world matrices.
    ///
    /// Uses an explicit stack; a node is recomputed when its own TRS changed
    /// or any ancestor's world matrix did.
    pub fn update_world_matrices(&mut self) {
        let mut stack: Vec<(NodeKey, Affine3A, bool)> = Vec::with_capacity(64);
        for &root in self.root_nodes.iter().rev() {
            stack.push((root, Affine3A::IDENTITY, false));
        }

        while let Some((key, parent_world, parent_changed)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(key) else {
                continue;
            };

            let local_changed = node.transform.update_local_matrix();
            let changed = local_changed || parent_changed;
            if changed {
                let world = parent_world * node.transform.local_matrix;
                node.transform.set_world_matrix(world);
            }

            let world = node.transform.world_matrix;
            for &child in node.children.iter().rev() {
                stack.push((child, world, changed));
            }
        }
    }

    /// World-space bounds of every mesh under `root`. Requires up-to-date
    /// world matrices.
    #[must_use]
    pub fn world_bounding_box(&self, root: NodeKey) -> BoundingBox {
        self.descendants(root)
            .into_iter()
            .filter_map(|key| {
                let node = self.nodes.get(key)?;
                let mesh = node.mesh?;
                let geometry = self.geometries.get(mesh.geometry)?;
                Some(geometry.bounding_box().transform(node.world_matrix()))
            })
            .fold(BoundingBox::EMPTY, |acc, b| acc.union(&b))
    }
}
