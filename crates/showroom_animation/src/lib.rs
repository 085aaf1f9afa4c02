//! Showroom Animation
//!
//! Keyframe animation data and playback state:
//!
//! - [`KeyframeTrack`]: linear / step / cubic-spline sampled tracks with an O(1) cursor
//! - [`AnimationClip`]: named set of tracks with a duration
//! - [`extract_segments`]: per-part single-track slices of a source clip
//! - [`AnimationAction`]: local time, time scale, loop mode and clamp-on-finish
//!
//! Writing sampled values onto scene nodes is the job of the scene crate's mixer.

pub mod action;
pub mod clip;
pub mod segment;
pub mod tracks;
pub mod values;

pub use action::{AnimationAction, LoopMode, PlayDirection};
pub use clip::{AnimationClip, TargetPath, Track, TrackData, TrackMeta, TrackValue};
pub use segment::{AnimationSegment, extract_segments};
pub use tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
pub use values::Interpolatable;
