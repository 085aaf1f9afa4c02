//! glTF 2.0 (`.gltf` / `.glb`) import into [`ModelData`].

use std::path::Path;
use std::sync::Arc;

use glam::{Quat, Vec3, Vec4};
use gltf::animation::util::ReadOutputs;
use gltf::animation::{Interpolation, Property};
use gltf::mesh::Mode;
use showroom_animation::{AnimationClip, InterpolationMode, KeyframeTrack, TargetPath, Track, TrackData, TrackMeta};
use showroom_core::errors::{Result, ShowroomError};
use showroom_scene::{Geometry, Material, MaterialFlags, Side, Transform};

use crate::model::{ModelData, ModelNode};

pub struct GltfLoader;

impl GltfLoader {
    /// Imports the model at `path`.
    ///
    /// `on_progress(loaded, total)` is called after each import stage: the
    /// file itself, each mesh, and the animation set.
    pub fn load(path: impl AsRef<Path>, mut on_progress: impl FnMut(usize, usize)) -> Result<ModelData> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ShowroomError::AssetNotFound(path.display().to_string()));
        }

        let (document, buffers, _images) = gltf::import(path)?;
        let buffer_data = |buffer: gltf::Buffer<'_>| buffers.get(buffer.index()).map(|d| d.0.as_slice());

        let total = document.meshes().len() + 2;
        let mut loaded = 1;
        on_progress(loaded, total);

        let mut model = ModelData {
            source: path.display().to_string(),
            ..ModelData::default()
        };

        // Materials: slot 0 is the glTF default material.
        model.materials.push(default_material());
        let material_base = model.materials.len();
        model.materials.extend(document.materials().map(|m| convert_material(&m)));

        // Meshes -> per-primitive geometry slots.
        let mut mesh_primitives: Vec<Vec<(usize, usize)>> = Vec::with_capacity(document.meshes().len());
        for mesh in document.meshes() {
            let mut primitives = Vec::new();
            for primitive in mesh.primitives() {
                if primitive.mode() != Mode::Triangles {
                    log::warn!("Mesh '{}': skipping non-triangle primitive {:?}", mesh.name().unwrap_or(""), primitive.mode());
                    continue;
                }

                let reader = primitive.reader(buffer_data);
                let Some(positions) = reader.read_positions() else {
                    continue;
                };
                let positions: Vec<Vec3> = positions.map(Vec3::from).collect();
                let indices = reader.read_indices().map(|i| i.into_u32().collect());

                let geometry_index = model.geometries.len();
                model.geometries.push(Geometry::new(positions, indices));

                let material_index = primitive.material().index().map_or(0, |i| material_base + i);
                primitives.push((geometry_index, material_index));
            }
            mesh_primitives.push(primitives);

            loaded += 1;
            on_progress(loaded, total);
        }

        // Nodes
        model.nodes = document
            .nodes()
            .map(|node| {
                let (t, r, s) = node.transform().decomposed();
                ModelNode {
                    name: node_name(&node),
                    transform: Transform::from_trs(Vec3::from(t), Quat::from_array(r), Vec3::from(s)),
                    primitives: node
                        .mesh()
                        .and_then(|m| mesh_primitives.get(m.index()).cloned())
                        .unwrap_or_default(),
                    children: node.children().map(|c| c.index()).collect(),
                }
            })
            .collect();

        model.roots = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .map(|scene| scene.nodes().map(|n| n.index()).collect())
            .unwrap_or_default();

        // Animations
        for animation in document.animations() {
            let name = animation.name().map_or_else(|| format!("animation_{}", animation.index()), str::to_string);
            let mut tracks = Vec::new();

            for channel in animation.channels() {
                let target_node = channel.target().node();
                let target = match channel.target().property() {
                    Property::Translation => TargetPath::Translation,
                    Property::Rotation => TargetPath::Rotation,
                    Property::Scale => TargetPath::Scale,
                    Property::MorphTargetWeights => {
                        log::warn!("Animation '{name}': morph target weights are not supported, channel skipped");
                        continue;
                    }
                };

                let interpolation = match channel.sampler().interpolation() {
                    Interpolation::Linear => InterpolationMode::Linear,
                    Interpolation::Step => InterpolationMode::Step,
                    Interpolation::CubicSpline => InterpolationMode::CubicSpline,
                };

                let reader = channel.reader(buffer_data);
                let (Some(inputs), Some(outputs)) = (reader.read_inputs(), reader.read_outputs()) else {
                    continue;
                };
                let times: Vec<f32> = inputs.collect();

                let data = match outputs {
                    ReadOutputs::Translations(v) | ReadOutputs::Scales(v) => {
                        TrackData::Vector3(KeyframeTrack::new(times, v.map(Vec3::from).collect(), interpolation))
                    }
                    ReadOutputs::Rotations(r) => TrackData::Quaternion(KeyframeTrack::new(
                        times,
                        r.into_f32().map(Quat::from_array).collect(),
                        interpolation,
                    )),
                    ReadOutputs::MorphTargetWeights(_) => continue,
                };

                tracks.push(Track {
                    meta: TrackMeta {
                        node_name: node_name(&target_node),
                        target,
                    },
                    data,
                });
            }

            model.clips.push(Arc::new(AnimationClip::new(name, tracks)));
        }

        loaded += 1;
        on_progress(loaded, total);

        log::info!(
            "Imported '{}': {} nodes, {} geometries, {} materials, {} clips",
            model.source,
            model.nodes.len(),
            model.geometries.len(),
            model.materials.len(),
            model.clips.len()
        );

        Ok(model)
    }
}

/// Unnamed nodes get a stable name derived from their index so that
/// animation tracks and scene nodes agree.
fn node_name(node: &gltf::Node<'_>) -> String {
    node.name().map_or_else(|| format!("node_{}", node.index()), str::to_string)
}

fn default_material() -> Material {
    Material::new("default", Vec4::ONE).with_flags(MaterialFlags::COLORABLE)
}

/// Every glTF material is a metallic-roughness (standard) material, so all
/// of them follow the swatch picker.
fn convert_material(material: &gltf::Material<'_>) -> Material {
    let name = material
        .name()
        .map_or_else(|| format!("material_{}", material.index().unwrap_or_default()), str::to_string);
    let color = Vec4::from(material.pbr_metallic_roughness().base_color_factor());
    let side = if material.double_sided() { Side::Double } else { Side::Front };

    Material::new(name, color)
        .with_side(side)
        .with_flags(MaterialFlags::COLORABLE)
}
