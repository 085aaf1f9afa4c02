//! # Showroom
//!
//! Interactive 3D product viewer core. A glTF model is loaded into a scene
//! graph, its animated parts (doors) are opened and closed from
//! screen-anchored hotspots, and a swatch picker recolors it.
//!
//! This umbrella crate re-exports the member crates:
//!
//! - [`core`]: errors, timer, rays and bounds, viewport
//! - [`animation`]: keyframe tracks, clips, segments, actions
//! - [`scene`]: scene graph, camera, ray casting, orbit controls, mixer
//! - [`assets`]: glTF import, background loading, configuration
//! - [`viewer`]: the [`Viewer`](viewer::Viewer) session and its components
//!
//! ```rust,ignore
//! use showroom::prelude::*;
//!
//! let mut viewer = Viewer::new(ViewerConfig::default(), Viewport::default(), HeadlessBackend::default(), ui)?;
//! viewer.select_model(0)?;
//! let mut timer = Timer::new();
//! loop {
//!     viewer.tick(timer.tick());
//! }
//! ```

pub use showroom_animation as animation;
pub use showroom_assets as assets;
pub use showroom_core as core;
pub use showroom_scene as scene;
pub use showroom_viewer as viewer;

pub use showroom_core::errors::{Result, ShowroomError};

pub mod prelude {
    pub use glam::{Quat, Vec2, Vec3, Vec4};

    pub use showroom_animation::{AnimationAction, AnimationClip, LoopMode, PlayDirection};
    pub use showroom_assets::{AssetLoader, ModelData, PendingLoad, ViewerConfig};
    pub use showroom_core::{BoundingBox, Ray, Result, ShowroomError, Timer, Viewport};
    pub use showroom_scene::{Camera, NodeKey, OrbitControls, OrbitInput, Scene};
    pub use showroom_viewer::{
        AnchorPoint, Door, DoorStates, HeadlessBackend, HotspotSink, LoadingSink, LoadingView, RenderBackend,
        ToneMapping, Viewer,
    };
}
