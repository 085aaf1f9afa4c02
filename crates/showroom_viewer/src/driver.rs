//! Segment playback for the door animations.

use std::sync::Arc;

use showroom_animation::{AnimationAction, AnimationClip, AnimationSegment, PlayDirection, extract_segments};
use showroom_core::errors::Result;
use showroom_scene::{AnimationMixer, NodeKey, Scene};

/// Number of door segments cut from the first source clip.
pub const SEGMENT_COUNT: usize = 3;

/// Owns the per-door segments of the current model and the single active
/// playback.
///
/// Every play request builds a fresh mixer bound to the model root, so a new
/// request replaces whatever was running without blending.
#[derive(Default)]
pub struct AnimationDriver {
    root: Option<NodeKey>,
    segments: Vec<Arc<AnimationSegment>>,
    clip_count: usize,
    mixer: Option<AnimationMixer>,
}

impl AnimationDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the current model's segments and playback.
    pub fn clear(&mut self) {
        self.root = None;
        self.segments.clear();
        self.clip_count = 0;
        self.mixer = None;
    }

    /// Prepares playback for a freshly attached model rooted at `root`.
    ///
    /// With no clips this is a no-op. Otherwise the door segments are cut from
    /// the first clip and every clip is played once in reverse, settling the
    /// model into its starting pose.
    pub fn load(&mut self, scene: &Scene, root: NodeKey, clips: &[Arc<AnimationClip>]) -> Result<()> {
        self.clear();

        let Some(source) = clips.first() else {
            log::debug!("Model has no animation clips");
            return Ok(());
        };

        self.segments = extract_segments(source, SEGMENT_COUNT)?;
        self.clip_count = clips.len();
        self.root = Some(root);

        let mut mixer = AnimationMixer::new(root);
        for clip in clips {
            mixer
                .clip_action(scene, Arc::clone(clip))
                .restart(PlayDirection::Reverse);
        }
        self.mixer = Some(mixer);

        log::info!(
            "Animation ready: {} clip(s), {} segment(s) from '{}'",
            self.clip_count,
            self.segments.len(),
            source.name
        );
        Ok(())
    }

    #[must_use]
    pub fn has_animation(&self) -> bool {
        self.clip_count > 0
    }

    #[must_use]
    pub fn clip_count(&self) -> usize {
        self.clip_count
    }

    #[must_use]
    pub fn segments(&self) -> &[Arc<AnimationSegment>] {
        &self.segments
    }

    /// Replaces the active playback with `segment_index` played in
    /// `direction`, once, clamped on its final frame.
    ///
    /// Returns `false` when there is no such segment.
    pub fn play(&mut self, scene: &Scene, segment_index: usize, direction: PlayDirection) -> bool {
        let (Some(root), Some(segment)) = (self.root, self.segments.get(segment_index)) else {
            return false;
        };

        let mut mixer = AnimationMixer::new(root);
        mixer
            .clip_action(scene, Arc::clone(segment))
            .restart(direction);
        self.mixer = Some(mixer);

        log::debug!("Playing segment {segment_index} {direction:?}");
        true
    }

    /// Advances the active playback and writes its pose. Skipped entirely
    /// when the model has no clips.
    pub fn update(&mut self, dt: f32, scene: &mut Scene) {
        if !self.has_animation() {
            return;
        }
        if let Some(mixer) = &mut self.mixer {
            mixer.update(dt, scene);
        }
    }

    /// The first action of the active playback.
    #[must_use]
    pub fn active_action(&self) -> Option<&AnimationAction> {
        self.mixer.as_ref()?.action(0)
    }

    #[must_use]
    pub fn mixer(&self) -> Option<&AnimationMixer> {
        self.mixer.as_ref()
    }
}
