//! Per-part animation segments.
//!
//! A product asset ships one clip that moves every door at once. Each door
//! gets its own segment: a single-track slice of that clip which keeps the
//! full source duration, so all segments share one timeline.

use std::sync::Arc;

use showroom_core::errors::{Result, ShowroomError};

use crate::clip::AnimationClip;

/// A named, time-bounded slice of a source clip driving one movable part.
pub type AnimationSegment = AnimationClip;

/// Extracts `count` segments from `source`; segment `i` carries track `i`.
///
/// Fails with [`ShowroomError::MissingAnimationTrack`] when the source has
/// fewer tracks than requested.
pub fn extract_segments(source: &AnimationClip, count: usize) -> Result<Vec<Arc<AnimationSegment>>> {
    (0..count)
        .map(|index| {
            let track = source
                .tracks
                .get(index)
                .ok_or_else(|| ShowroomError::MissingAnimationTrack {
                    clip: source.name.clone(),
                    index,
                })?;

            Ok(Arc::new(AnimationClip::with_duration(
                track.meta.track_name(),
                source.duration,
                vec![track.clone()],
            )))
        })
        .collect()
}
