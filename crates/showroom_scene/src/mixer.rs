//! Applies animation actions to scene nodes.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use showroom_animation::{AnimationAction, AnimationClip, TargetPath, TrackValue};

use crate::NodeKey;
use crate::scene::Scene;

/// Maps track `track_index` of a clip onto a property of `node`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyBinding {
    pub track_index: usize,
    pub node: NodeKey,
    pub target: TargetPath,
}

pub struct Binder;

impl Binder {
    /// Resolves each track's node name inside the subtree under `root`.
    /// Tracks whose node cannot be found are dropped.
    #[must_use]
    pub fn bind(scene: &Scene, root: NodeKey, clip: &AnimationClip) -> Vec<PropertyBinding> {
        let mut by_name: FxHashMap<&str, NodeKey> = FxHashMap::default();
        for key in scene.descendants(root) {
            if let Some(node) = scene.get_node(key) {
                by_name.entry(node.name.as_str()).or_insert(key);
            }
        }

        clip.tracks
            .iter()
            .enumerate()
            .filter_map(|(track_index, track)| {
                let Some(&node) = by_name.get(track.meta.node_name.as_str()) else {
                    log::warn!(
                        "Clip '{}': no node named '{}' under the animation root",
                        clip.name,
                        track.meta.node_name
                    );
                    return None;
                };
                Some(PropertyBinding {
                    track_index,
                    node,
                    target: track.meta.target,
                })
            })
            .collect()
    }
}

struct BoundAction {
    action: AnimationAction,
    bindings: Vec<PropertyBinding>,
}

/// Player for the actions bound to one object graph.
pub struct AnimationMixer {
    root: NodeKey,
    actions: Vec<BoundAction>,
}

impl AnimationMixer {
    #[must_use]
    pub fn new(root: NodeKey) -> Self {
        Self {
            root,
            actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Creates an action for `clip` bound to this mixer's root and returns it
    /// for configuration.
    pub fn clip_action(&mut self, scene: &Scene, clip: Arc<AnimationClip>) -> &mut AnimationAction {
        let bindings = Binder::bind(scene, self.root, &clip);
        self.actions.push(BoundAction {
            action: AnimationAction::new(clip),
            bindings,
        });
        let last = self.actions.len() - 1;
        &mut self.actions[last].action
    }

    pub fn actions(&self) -> impl Iterator<Item = &AnimationAction> {
        self.actions.iter().map(|b| &b.action)
    }

    #[must_use]
    pub fn action(&self, index: usize) -> Option<&AnimationAction> {
        self.actions.get(index).map(|b| &b.action)
    }

    /// True while any action is still advancing.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.actions.iter().any(|b| b.action.enabled && !b.action.paused)
    }

    /// Advances every action by `dt` seconds and writes the sampled values
    /// onto the bound nodes. Clamped actions keep writing their frozen pose.
    pub fn update(&mut self, dt: f32, scene: &mut Scene) {
        for bound in &mut self.actions {
            bound.action.update(dt);
            if !bound.action.is_active() {
                continue;
            }

            for binding in &bound.bindings {
                let Some(value) = bound.action.sample_track(binding.track_index) else {
                    continue;
                };
                let Some(node) = scene.get_node_mut(binding.node) else {
                    continue;
                };

                match (binding.target, value) {
                    (TargetPath::Translation, TrackValue::Vector3(v)) => node.transform.position = v,
                    (TargetPath::Scale, TrackValue::Vector3(v)) => node.transform.scale = v,
                    (TargetPath::Rotation, TrackValue::Quaternion(q)) => node.transform.rotation = q,
                    _ => {}
                }
            }
        }
    }
}
