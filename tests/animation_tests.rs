//! Animation System Tests
//!
//! Tests for:
//! - KeyframeTrack linear/step/cubic interpolation
//! - KeyframeCursor O(1) scanning, binary search fallback and reverse playback
//! - AnimationAction loop modes, forward/reverse play and clamp-on-finish
//! - AnimationClip duration and segment extraction

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use glam::{Quat, Vec3};

use showroom::animation::{
    AnimationAction, AnimationClip, Interpolatable, InterpolationMode, KeyframeCursor, KeyframeTrack, LoopMode,
    PlayDirection, TargetPath, Track, TrackData, TrackMeta, TrackValue, extract_segments,
};
use showroom::core::ShowroomError;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Same orientation, either quaternion sign.
fn quat_approx(a: Quat, b: Quat) -> bool {
    a.dot(b).abs() > 1.0 - 1e-6
}

fn sample(track: &KeyframeTrack<f32>, time: f32, cursor: &mut KeyframeCursor) -> f32 {
    track.sample_with_cursor(time, cursor).expect("non-empty track")
}

// ============================================================================
// KeyframeTrack: Linear / Step Interpolation
// ============================================================================

#[test]
fn track_linear_f32_midpoint() {
    let track = KeyframeTrack::new(vec![0.0, 1.0], vec![0.0_f32, 10.0], InterpolationMode::Linear);

    let mut cursor = KeyframeCursor::default();
    let val = sample(&track, 0.5, &mut cursor);
    assert!(approx(val, 5.0), "Expected 5.0, got {val}");
}

#[test]
fn track_linear_f32_clamps_outside_range() {
    let track = KeyframeTrack::new(vec![1.0, 2.0], vec![10.0_f32, 20.0], InterpolationMode::Linear);

    let mut cursor = KeyframeCursor::default();
    assert!(approx(sample(&track, 0.0, &mut cursor), 10.0));
    assert!(approx(sample(&track, 5.0, &mut cursor), 20.0));
}

#[test]
fn track_step_holds_value() {
    let track = KeyframeTrack::new(vec![0.0, 1.0], vec![0.0_f32, 100.0], InterpolationMode::Step);

    let mut cursor = KeyframeCursor::default();
    assert!(approx(sample(&track, 0.5, &mut cursor), 0.0));
    assert!(approx(sample(&track, 0.99, &mut cursor), 0.0));
    assert!(approx(sample(&track, 1.0, &mut cursor), 100.0));
}

#[test]
fn track_empty_samples_none() {
    let track: KeyframeTrack<f32> = KeyframeTrack::new(vec![], vec![], InterpolationMode::Linear);
    assert!(track.is_empty());
    assert!(track.sample(0.5).is_none());
    assert!(approx(track.end_time(), 0.0));
}

#[test]
fn track_linear_vec3() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![Vec3::ZERO, Vec3::new(10.0, 20.0, 30.0)],
        InterpolationMode::Linear,
    );

    let val = track.sample(0.5).unwrap();
    assert!(approx(val.x, 5.0));
    assert!(approx(val.y, 10.0));
    assert!(approx(val.z, 15.0));
}

#[test]
fn track_linear_quat_slerp() {
    let q0 = Quat::IDENTITY;
    let q1 = Quat::from_rotation_y(FRAC_PI_2);
    let track = KeyframeTrack::new(vec![0.0, 1.0], vec![q0, q1], InterpolationMode::Linear);

    let val = track.sample(0.5).unwrap();
    let expected = Quat::from_rotation_y(FRAC_PI_2 / 2.0);
    assert!(quat_approx(val, expected), "Quaternion slerp mismatch: {val} vs {expected}");
}

// ============================================================================
// KeyframeTrack: Cubic Spline Interpolation
// ============================================================================

#[test]
fn track_cubic_f32_endpoints() {
    // [in_tangent, value, out_tangent] per keyframe
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![0.0_f32, 0.0, 1.0, 1.0, 10.0, 0.0],
        InterpolationMode::CubicSpline,
    );

    let mut cursor = KeyframeCursor::default();
    assert!(approx(sample(&track, 0.0, &mut cursor), 0.0));
    assert!(approx(sample(&track, 1.0, &mut cursor), 10.0));
}

#[test]
fn track_cubic_f32_zero_tangents_midpoint() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![0.0_f32, 0.0, 0.0, 0.0, 10.0, 0.0],
        InterpolationMode::CubicSpline,
    );

    let val = track.sample(0.5).unwrap();
    assert!((val - 5.0).abs() < 1e-3, "Cubic midpoint expected 5.0, got {val}");
}

// ============================================================================
// KeyframeCursor
// ============================================================================

#[test]
fn cursor_sequential_forward() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        vec![0.0_f32, 10.0, 20.0, 30.0, 40.0],
        InterpolationMode::Linear,
    );

    let mut cursor = KeyframeCursor::default();
    for i in 0..=20 {
        let t = i as f32 * 0.2;
        let val = sample(&track, t, &mut cursor);
        assert!(approx(val, t * 10.0), "t={t}: got {val}");
    }
}

#[test]
fn cursor_sequential_backward() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        vec![0.0_f32, 10.0, 20.0, 30.0, 40.0],
        InterpolationMode::Linear,
    );

    let mut cursor = KeyframeCursor::default();
    for i in (0..=20).rev() {
        let t = i as f32 * 0.2;
        let val = sample(&track, t, &mut cursor);
        assert!(approx(val, t * 10.0), "t={t}: got {val}");
    }
}

#[test]
fn cursor_large_jumps_match_stateless_sampling() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
        vec![0.0_f32, 10.0, 5.0, 20.0, 15.0, 0.0, 3.0, 9.0, 1.0],
        InterpolationMode::Linear,
    );

    let mut cursor = KeyframeCursor::default();
    for t in [7.5_f32, 0.5, 6.2, 1.1, 8.0, 0.0, 4.4] {
        let with_cursor = sample(&track, t, &mut cursor);
        let stateless = track.sample(t).unwrap();
        assert!(approx(with_cursor, stateless), "t={t}: {with_cursor} != {stateless}");
    }
}

#[test]
fn cursor_single_keyframe() {
    let track = KeyframeTrack::new(vec![0.0], vec![42.0_f32], InterpolationMode::Linear);

    let mut cursor = KeyframeCursor::default();
    assert!(approx(sample(&track, 5.0, &mut cursor), 42.0));
}

#[test]
fn interpolatable_linear_impls() {
    assert!(approx(f32::interpolate_linear(0.0, 10.0, 0.25), 2.5));
    let v = Vec3::interpolate_linear(Vec3::ZERO, Vec3::new(10.0, 20.0, 30.0), 0.5);
    assert!(approx(v.y, 10.0));
}

// ============================================================================
// AnimationClip
// ============================================================================

fn vec3_track(node: &str, duration: f32, to: Vec3) -> Track {
    Track {
        meta: TrackMeta {
            node_name: node.to_string(),
            target: TargetPath::Translation,
        },
        data: TrackData::Vector3(KeyframeTrack::new(
            vec![0.0, duration],
            vec![Vec3::ZERO, to],
            InterpolationMode::Linear,
        )),
    }
}

fn rotation_track(node: &str, duration: f32) -> Track {
    Track {
        meta: TrackMeta {
            node_name: node.to_string(),
            target: TargetPath::Rotation,
        },
        data: TrackData::Quaternion(KeyframeTrack::new(
            vec![0.0, duration],
            vec![Quat::IDENTITY, Quat::from_rotation_y(-FRAC_PI_2)],
            InterpolationMode::Linear,
        )),
    }
}

fn make_simple_clip(duration: f32) -> Arc<AnimationClip> {
    Arc::new(AnimationClip::new("test", vec![vec3_track("node", duration, Vec3::X)]))
}

#[test]
fn clip_auto_duration() {
    let clip = AnimationClip::new("test", vec![vec3_track("a", 1.5, Vec3::X), rotation_track("b", 3.0)]);
    assert!(approx(clip.duration, 3.0), "got {}", clip.duration);
}

#[test]
fn clip_empty_tracks_zero_duration() {
    let clip = AnimationClip::new("empty", vec![]);
    assert!(approx(clip.duration, 0.0));
}

#[test]
fn track_name_follows_node_and_property() {
    let track = rotation_track("door_left", 1.0);
    assert_eq!(track.meta.track_name(), "door_left.quaternion");
    let track = vec3_track("door_left", 1.0, Vec3::X);
    assert_eq!(track.meta.track_name(), "door_left.position");
}

// ============================================================================
// Segment Extraction
// ============================================================================

#[test]
fn segments_carry_one_track_and_full_duration() {
    let source = AnimationClip::with_duration(
        "Doors",
        4.0,
        vec![
            rotation_track("door_bottom", 1.0),
            rotation_track("door_right", 2.0),
            rotation_track("door_left", 3.0),
            vec3_track("handle", 4.0, Vec3::Y),
        ],
    );

    let segments = extract_segments(&source, 3).unwrap();
    assert_eq!(segments.len(), 3);

    for (index, segment) in segments.iter().enumerate() {
        assert_eq!(segment.tracks.len(), 1);
        assert_eq!(segment.tracks[0].meta, source.tracks[index].meta);
        assert!(approx(segment.duration, 4.0), "segment {index}: {}", segment.duration);
    }
    assert_eq!(segments[1].name, "door_right.quaternion");
}

#[test]
fn segments_require_enough_tracks() {
    let source = AnimationClip::new("Doors", vec![rotation_track("a", 1.0), rotation_track("b", 1.0)]);

    let err = extract_segments(&source, 3).unwrap_err();
    match err {
        ShowroomError::MissingAnimationTrack { clip, index } => {
            assert_eq!(clip, "Doors");
            assert_eq!(index, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// AnimationAction Loop Modes
// ============================================================================

#[test]
fn action_defaults_to_looping() {
    let action = AnimationAction::new(make_simple_clip(2.0));
    assert_eq!(action.loop_mode, LoopMode::Loop);
    assert!(action.enabled);
    assert!(!action.paused);
    assert!(!action.clamp_when_finished);
}

#[test]
fn action_once_without_clamp_disables() {
    let mut action = AnimationAction::new(make_simple_clip(2.0));
    action.loop_mode = LoopMode::Once;

    action.update(3.0);
    assert!(approx(action.time, 2.0), "got {}", action.time);
    assert!(action.is_finished());
    assert!(!action.enabled, "Once without clamp should disable");
    assert!(!action.is_active());
}

#[test]
fn action_once_with_clamp_pauses() {
    let mut action = AnimationAction::new(make_simple_clip(2.0));
    action.loop_mode = LoopMode::Once;
    action.clamp_when_finished = true;

    action.update(3.0);
    assert!(approx(action.time, 2.0));
    assert!(action.paused, "Once with clamp should pause at end");
    assert!(action.enabled);
    assert!(action.is_active());
}

#[test]
fn action_loop_mode_loop() {
    let mut action = AnimationAction::new(make_simple_clip(2.0));
    action.update(2.5);
    assert!(approx(action.time, 0.5), "got {}", action.time);
    assert!(!action.paused);
}

#[test]
fn action_loop_reverse_wraps() {
    let mut action = AnimationAction::new(make_simple_clip(2.0));
    action.time_scale = -1.0;
    action.time = 0.5;

    action.update(1.0);
    assert!(approx(action.time, 1.5), "got {}", action.time);
}

#[test]
fn action_ping_pong_bounces() {
    let mut action = AnimationAction::new(make_simple_clip(2.0));
    action.loop_mode = LoopMode::PingPong;

    action.update(2.5);
    assert!(approx(action.time, 1.5), "got {}", action.time);
}

#[test]
fn action_paused_or_disabled_does_not_advance() {
    let mut action = AnimationAction::new(make_simple_clip(2.0));
    action.paused = true;
    action.time = 0.5;
    action.update(1.0);
    assert!(approx(action.time, 0.5));

    action.paused = false;
    action.enabled = false;
    action.update(1.0);
    assert!(approx(action.time, 0.5));
}

#[test]
fn action_time_scale() {
    let mut action = AnimationAction::new(make_simple_clip(4.0));
    action.loop_mode = LoopMode::Once;
    action.time_scale = 2.0;

    action.update(1.0);
    assert!(approx(action.time, 2.0), "got {}", action.time);
}

// ============================================================================
// Forward / Reverse Play
// ============================================================================

#[test]
fn reset_rewinds_everything() {
    let mut action = AnimationAction::new(make_simple_clip(2.0));
    action.restart(PlayDirection::Forward);
    action.update(5.0);
    assert!(action.paused && action.is_finished());

    action.reset();
    assert!(approx(action.time, 0.0));
    assert!(!action.paused);
    assert!(action.enabled);
    assert!(!action.is_finished());
}

#[test]
fn play_forward_configures_clamped_once() {
    let mut action = AnimationAction::new(make_simple_clip(2.0));
    action.restart(PlayDirection::Forward);

    assert!(approx(action.time, 0.0));
    assert!(approx(action.time_scale, 1.0));
    assert_eq!(action.loop_mode, LoopMode::Once);
    assert!(action.clamp_when_finished);
}

#[test]
fn reverse_from_zero_pins_to_duration() {
    let mut action = AnimationAction::new(make_simple_clip(2.5));
    assert!(approx(action.time, 0.0));

    action.play_reverse();
    assert!(approx(action.time, 2.5), "got {}", action.time);
    assert!(approx(action.time_scale, -1.0));
    assert_eq!(action.loop_mode, LoopMode::Once);
    assert!(action.clamp_when_finished);
}

#[test]
fn reverse_from_nonzero_time_keeps_time() {
    let mut action = AnimationAction::new(make_simple_clip(2.5));
    action.time = 1.2;

    action.play_reverse();
    assert!(approx(action.time, 1.2), "pinning must not touch a nonzero time, got {}", action.time);
    assert!(approx(action.time_scale, -1.0));
}

#[test]
fn restart_reverse_always_starts_at_end() {
    let mut action = AnimationAction::new(make_simple_clip(2.0));
    action.time = 0.7;

    action.restart(PlayDirection::Reverse);
    assert!(approx(action.time, 2.0));
}

#[test]
fn forward_play_clamps_and_freezes_at_end() {
    let mut action = AnimationAction::new(make_simple_clip(1.0));
    action.restart(PlayDirection::Forward);

    action.update(0.4);
    assert!(approx(action.time, 0.4));
    action.update(0.8);
    assert!(approx(action.time, 1.0));
    assert!(action.paused);

    let frozen = action.sample_track(0);
    for _ in 0..10 {
        action.update(0.25);
        assert!(approx(action.time, 1.0), "clamped action must not loop, got {}", action.time);
        assert_eq!(action.sample_track(0), frozen);
    }
}

#[test]
fn reverse_play_clamps_and_freezes_at_zero() {
    let mut action = AnimationAction::new(make_simple_clip(1.0));
    action.restart(PlayDirection::Reverse);

    action.update(0.25);
    assert!(approx(action.time, 0.75));
    action.update(1.0);
    assert!(approx(action.time, 0.0));
    assert!(action.paused && action.is_finished());

    action.update(0.5);
    assert!(approx(action.time, 0.0));
    assert_eq!(action.sample_track(0), Some(TrackValue::Vector3(Vec3::ZERO)));
}

#[test]
fn sample_track_follows_time() {
    let mut action = AnimationAction::new(Arc::new(AnimationClip::new("spin", vec![rotation_track("door", 1.0)])));
    action.restart(PlayDirection::Forward);
    action.update(1.0);

    let Some(TrackValue::Quaternion(q)) = action.sample_track(0) else {
        panic!("expected a quaternion sample");
    };
    assert!(quat_approx(q, Quat::from_rotation_y(-FRAC_PI_2)));
    assert!(action.sample_track(1).is_none());
}
