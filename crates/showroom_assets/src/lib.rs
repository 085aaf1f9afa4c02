//! Showroom Assets
//!
//! Everything that turns files into viewer data:
//!
//! - [`GltfLoader`]: glTF/GLB import into detached [`ModelData`]
//! - [`AssetLoader`] / [`PendingLoad`]: background import with a progress stream
//! - [`slice_cross_image`]: horizontal-cross panorama → environment cube map
//! - [`ViewerConfig`]: palette, model catalog, anchors and camera defaults

pub mod config;
pub mod environment;
pub mod loader;
pub mod loaders;
pub mod model;

pub use config::{CameraConfig, ModelCatalog, ModelEntry, Palette, Swatch, ViewerConfig};
pub use environment::{CROSS_FACE_TILES, load_cross_environment, slice_cross_image};
pub use loader::{AssetLoader, LoadEvent, PendingLoad, import_model};
pub use loaders::GltfLoader;
pub use model::{ModelData, ModelNode};
