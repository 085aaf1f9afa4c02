//! Showroom Scene
//!
//! Scene graph and the collaborators the viewer core drives every frame:
//!
//! - [`Scene`]: slot-map node hierarchy, geometries and materials
//! - [`Camera`]: perspective projection, NDC projection and picking rays
//! - [`Scene::raycast`]: nearest-first ray/mesh intersections
//! - [`OrbitControls`]: damped orbit camera around a target
//! - [`AnimationMixer`]: writes animation actions onto nodes

pub mod camera;
pub mod environment;
pub mod light;
pub mod mesh;
pub mod mixer;
pub mod node;
pub mod orbit_control;
pub mod raycast;
pub mod scene;
pub mod transform;

pub use camera::Camera;
pub use environment::{CubeMap, Environment};
pub use light::DirectionalLight;
pub use mesh::{Geometry, Material, MaterialFlags, Mesh, Side};
pub use mixer::{AnimationMixer, Binder, PropertyBinding};
pub use node::Node;
pub use orbit_control::{OrbitControls, OrbitInput};
pub use raycast::Intersection;
pub use scene::{ReleaseStats, Scene};
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeKey;
    pub struct GeometryKey;
    pub struct MaterialKey;
}
