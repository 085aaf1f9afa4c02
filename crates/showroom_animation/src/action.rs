use std::sync::Arc;

use crate::clip::{AnimationClip, TrackValue};
use crate::tracks::KeyframeCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    Once,
    Loop,
    PingPong,
}

/// Direction a segment is played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayDirection {
    Forward,
    Reverse,
}

/// Playback state of one clip: local time, speed, loop behavior and the
/// per-track keyframe cursors.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub time_scale: f32,
    pub weight: f32,
    pub loop_mode: LoopMode,
    pub paused: bool,
    pub enabled: bool,
    /// With `LoopMode::Once`, freeze on the final frame instead of disabling.
    pub clamp_when_finished: bool,

    finished: bool,
    track_cursors: Vec<KeyframeCursor>,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        let track_count = clip.tracks.len();
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            weight: 1.0,
            loop_mode: LoopMode::Loop,
            paused: false,
            enabled: true,
            clamp_when_finished: false,
            finished: false,
            track_cursors: vec![KeyframeCursor::default(); track_count],
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        self.clip.duration
    }

    /// True once a play-once run has reached its end.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the action still contributes a pose.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.enabled && self.weight > 0.0
    }

    /// Rewinds to the start: time zero, unpaused, enabled, cursors cleared.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.paused = false;
        self.enabled = true;
        self.finished = false;
        for cursor in &mut self.track_cursors {
            cursor.reset();
        }
    }

    /// Configures a single forward run that freezes on the last frame.
    pub fn play_forward(&mut self) {
        self.paused = false;
        self.enabled = true;
        self.finished = false;
        self.time_scale = 1.0;
        self.loop_mode = LoopMode::Once;
        self.clamp_when_finished = true;
    }

    /// Configures a single reverse run that freezes on the first frame.
    ///
    /// The start is pinned to the clip end only when the local time is exactly
    /// zero; an action parked somewhere mid-clip reverses from where it is.
    #[allow(clippy::float_cmp)]
    pub fn play_reverse(&mut self) {
        self.paused = false;
        self.enabled = true;
        self.finished = false;
        if self.time == 0.0 {
            self.time = self.clip.duration;
        }
        self.time_scale = -1.0;
        self.loop_mode = LoopMode::Once;
        self.clamp_when_finished = true;
    }

    /// Resets and plays in the given direction.
    pub fn restart(&mut self, direction: PlayDirection) {
        self.reset();
        match direction {
            PlayDirection::Forward => self.play_forward(),
            PlayDirection::Reverse => self.play_reverse(),
        }
    }

    /// Advances local time by `dt` seconds scaled by `time_scale`.
    pub fn update(&mut self, dt: f32) {
        if self.paused || !self.enabled {
            return;
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            return;
        }

        self.time += dt * self.time_scale;

        match self.loop_mode {
            LoopMode::Once => {
                if self.time >= duration {
                    self.time = duration;
                    self.finish();
                } else if self.time < 0.0 || (self.time_scale < 0.0 && self.time <= 0.0) {
                    self.time = 0.0;
                    self.finish();
                }
            }
            LoopMode::Loop => {
                self.time = self.time.rem_euclid(duration);
            }
            LoopMode::PingPong => {
                let double_duration = duration * 2.0;
                let t = self.time.rem_euclid(double_duration);
                self.time = if t > duration { double_duration - t } else { t };
            }
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        if self.clamp_when_finished {
            self.paused = true;
        } else {
            self.enabled = false;
        }
    }

    /// Samples track `track_index` at the current time.
    pub fn sample_track(&mut self, track_index: usize) -> Option<TrackValue> {
        let track = self.clip.tracks.get(track_index)?;
        let cursor = self.track_cursors.get_mut(track_index)?;
        track.data.sample_with_cursor(self.time, cursor)
    }
}
