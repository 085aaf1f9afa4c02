//! Showroom Viewer
//!
//! The interactive session on top of the scene and asset crates:
//!
//! - [`Door`] / [`DoorStates`]: open/closed state per movable part
//! - [`update_hotspots`]: anchor projection with ray-cast occlusion
//! - [`AnimationDriver`]: forward/reverse segment playback, clamped on finish
//! - [`ReadinessGate`] and [`LoadingScreen`]: post-load settle and fade-out
//! - [`Viewer`]: owns all of the above and runs them from [`Viewer::tick`]
//!
//! Drawing and DOM updates go through the [`RenderBackend`], [`HotspotSink`]
//! and [`LoadingSink`] traits.

pub mod debug;
pub mod door;
pub mod driver;
pub mod framing;
pub mod loading_screen;
pub mod projector;
pub mod readiness;
pub mod render;
pub mod viewer;

pub use debug::DebugSettings;
pub use door::{Door, DoorStates};
pub use driver::{AnimationDriver, SEGMENT_COUNT};
pub use framing::{FRAMING_OFFSET, fit_distance, frame_bounds};
pub use loading_screen::{LoadingScreen, LoadingSink, LoadingView};
pub use projector::{AnchorPoint, HotspotSink, is_anchor_visible, project_anchor, update_hotspots};
pub use readiness::{DEFAULT_READY_DELAY, ReadinessGate, ReadinessState};
pub use render::{HeadlessBackend, RenderBackend, RenderSettings, ToneMapping};
pub use viewer::{MODEL_ROOT_NAME, Viewer};
