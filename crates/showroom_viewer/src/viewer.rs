//! The viewer session.
//!
//! [`Viewer`] owns every piece of per-session state (scene, camera, door
//! flags, anchors, active playback, readiness) and is driven by a single
//! [`Viewer::tick`] per frame plus the input handlers.

use std::f32::consts::PI;
use std::path::PathBuf;
use std::sync::Arc;

use glam::{Quat, Vec2, Vec3, Vec4};
use showroom_animation::PlayDirection;
use showroom_assets::{AssetLoader, ModelData, PendingLoad, ViewerConfig, load_cross_environment};
use showroom_core::errors::{Result, ShowroomError};
use showroom_core::{Viewport, parse_hex_color};
use showroom_scene::{Camera, NodeKey, OrbitControls, OrbitInput, Scene};

use crate::debug::DebugSettings;
use crate::door::{Door, DoorStates};
use crate::driver::AnimationDriver;
use crate::framing::frame_bounds;
use crate::loading_screen::{LoadingScreen, LoadingSink};
use crate::projector::{AnchorPoint, HotspotSink, update_hotspots};
use crate::readiness::ReadinessGate;
use crate::render::{RenderBackend, RenderSettings, ToneMapping};

/// Name of the node every loaded model is attached under.
pub const MODEL_ROOT_NAME: &str = "model";

pub struct Viewer<R: RenderBackend, U: HotspotSink + LoadingSink> {
    config: ViewerConfig,
    palette: Vec<Vec4>,

    viewport: Viewport,
    scene: Scene,
    camera: Camera,
    controls: OrbitControls,
    orbit_input: OrbitInput,

    backend: R,
    ui: U,
    render_settings: RenderSettings,
    debug: DebugSettings,

    doors: DoorStates,
    anchors: Vec<AnchorPoint>,
    driver: AnimationDriver,
    readiness: ReadinessGate,
    loading_screen: LoadingScreen,

    loader: Option<AssetLoader>,
    pending: Option<PendingLoad>,
    model_root: Option<NodeKey>,
}

impl<R: RenderBackend, U: HotspotSink + LoadingSink> Viewer<R, U> {
    /// Builds a session with an empty scene. Fails if the anchor count does
    /// not match the door count or a palette color is malformed.
    pub fn new(config: ViewerConfig, viewport: Viewport, mut backend: R, mut ui: U) -> Result<Self> {
        if config.anchors.len() != Door::ALL.len() {
            return Err(ShowroomError::InvalidConfig(format!(
                "expected {} anchors, got {}",
                Door::ALL.len(),
                config.anchors.len()
            )));
        }
        let palette = config
            .palette
            .swatches
            .iter()
            .map(|swatch| parse_hex_color(&swatch.color))
            .collect::<Result<Vec<_>>>()?;

        let camera_config = config.camera;
        let mut camera = Camera::new_perspective(
            camera_config.fov,
            viewport.aspect(),
            camera_config.near,
            camera_config.far,
        );
        camera.position = camera_config.position;
        let controls = OrbitControls::new(Vec3::ZERO);
        camera.look_at(controls.target);

        let debug = DebugSettings::default();
        let mut scene = Scene::new();
        scene.key_light.intensity = debug.light_intensity;
        scene.key_light.position = debug.light_position;
        scene.environment.intensity = debug.env_map_intensity;

        let render_settings = RenderSettings {
            tone_mapping: debug.tone_mapping,
            exposure: debug.exposure,
            ..RenderSettings::default()
        };
        backend.resize(viewport.width, viewport.height, viewport.pixel_ratio());
        backend.apply_settings(&render_settings);

        let loading_screen = LoadingScreen::new();
        ui.update_loading(loading_screen.view());

        let anchors = config.anchors.iter().copied().map(AnchorPoint::new).collect();
        let readiness = ReadinessGate::new(config.ready_delay);

        Ok(Self {
            config,
            palette,
            viewport,
            scene,
            camera,
            controls,
            orbit_input: OrbitInput::default(),
            backend,
            ui,
            render_settings,
            debug,
            doors: DoorStates::default(),
            anchors,
            driver: AnimationDriver::new(),
            readiness,
            loading_screen,
            loader: None,
            pending: None,
            model_root: None,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    #[must_use]
    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    /// Pointer input consumed by the next tick.
    pub fn orbit_input_mut(&mut self) -> &mut OrbitInput {
        &mut self.orbit_input
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn backend(&self) -> &R {
        &self.backend
    }

    #[must_use]
    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    #[must_use]
    pub fn doors(&self) -> &DoorStates {
        &self.doors
    }

    #[must_use]
    pub fn anchors(&self) -> &[AnchorPoint] {
        &self.anchors
    }

    #[must_use]
    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    #[must_use]
    pub fn readiness(&self) -> &ReadinessGate {
        &self.readiness
    }

    /// Skips the settle delay.
    pub fn mark_ready(&mut self) {
        self.readiness.mark_ready();
    }

    #[must_use]
    pub fn loading_screen(&self) -> &LoadingScreen {
        &self.loading_screen
    }

    #[must_use]
    pub fn render_settings(&self) -> &RenderSettings {
        &self.render_settings
    }

    #[must_use]
    pub fn debug_settings(&self) -> &DebugSettings {
        &self.debug
    }

    #[must_use]
    pub fn model_root(&self) -> Option<NodeKey> {
        self.model_root
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Starts loading `path` in the background. A load already in flight is
    /// replaced and its result dropped.
    pub fn load_model(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let loader = match self.loader.take() {
            Some(loader) => loader,
            None => AssetLoader::new()?,
        };
        let pending = loader.load(path);
        self.loader = Some(loader);
        self.track_load(pending);
        Ok(())
    }

    /// Loads catalog entry `index`. Returns `false` for an unknown index.
    pub fn select_model(&mut self, index: usize) -> Result<bool> {
        let Some(entry) = self.config.models.get(index) else {
            log::warn!("No model at catalog index {index}");
            return Ok(false);
        };
        let path = entry.path.clone();
        log::info!("Selected model '{}'", entry.name);
        self.load_model(path)?;
        Ok(true)
    }

    /// Adopts an externally started load.
    pub fn track_load(&mut self, pending: PendingLoad) {
        if let Some(previous) = self.pending.replace(pending) {
            log::debug!("Load of '{}' superseded", previous.source());
        }
    }

    /// Replaces the current model with `data`.
    ///
    /// The previous subtree and its resources are released first. The new
    /// model is rotated a quarter turn about Y, framed, and its animation
    /// prepared. A model whose clips cannot be segmented stays attached
    /// without animation.
    pub fn attach_model(&mut self, data: ModelData) -> NodeKey {
        if let Some(old) = self.model_root.take() {
            let stats = self.scene.remove_subtree(old);
            log::info!(
                "Released previous model: {} nodes, {} geometries, {} materials",
                stats.nodes,
                stats.geometries,
                stats.materials
            );
        }
        self.driver.clear();

        let source = data.source.clone();
        let clips: Vec<_> = data.clips.iter().map(Arc::clone).collect();
        let root = data.instantiate(&mut self.scene, MODEL_ROOT_NAME);

        if let Some(node) = self.scene.get_node_mut(root) {
            node.transform.scale = Vec3::ONE;
            node.transform.position = Vec3::ZERO;
            node.transform.rotation = Quat::from_rotation_y(PI / 2.0);
        }
        self.scene.update_world_matrices();

        let bounds = self.scene.world_bounding_box(root);
        frame_bounds(&mut self.camera, &mut self.controls, &bounds, self.viewport.height);

        if let Err(err) = self.driver.load(&self.scene, root, &clips) {
            log::error!("Model '{source}' attached without animation: {err}");
        }

        self.model_root = Some(root);
        log::info!("Attached model '{source}'");
        root
    }

    /// Slices the cross panorama at `path` into the scene environment.
    pub fn load_environment(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let cube = load_cross_environment(path.into(), None)?;
        self.scene.environment.set_map(Arc::new(cube));
        Ok(())
    }

    fn poll_pending_load(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };

        let outcome = pending.poll();
        for ratio in pending.progress_ratios() {
            self.loading_screen.set_progress(ratio);
        }

        let Some(outcome) = outcome else {
            return;
        };
        let source = pending.source().to_string();
        self.pending = None;

        match outcome {
            Ok(data) => {
                self.attach_model(data);
            }
            Err(err) => log::error!("Failed to load '{source}': {err}"),
        }
        self.readiness.on_loaded();
        self.loading_screen.complete();
    }

    // ========================================================================
    // Interaction
    // ========================================================================

    /// Toggles `door` and plays its segment in the matching direction.
    ///
    /// The flag flips right away. Without a segment for the door only the
    /// flag changes.
    pub fn handle_interaction(&mut self, door: Door) -> PlayDirection {
        let direction = self.doors.toggle(door);
        if !self.driver.play(&self.scene, door.segment_index(), direction) {
            log::warn!("No animation segment for the {} door", door.name());
        }
        log::debug!(
            "{} door is now {}",
            door.name(),
            if self.doors.is_open(door) { "open" } else { "closed" }
        );
        direction
    }

    /// Click on hotspot marker `index`.
    pub fn handle_hotspot_click(&mut self, index: usize) -> Option<PlayDirection> {
        let Some(door) = Door::from_hotspot(index) else {
            log::warn!("Ignoring click on unknown hotspot {index}");
            return None;
        };
        Some(self.handle_interaction(door))
    }

    /// Recolors every colorable material with palette entry `index`.
    /// Returns the number of materials changed.
    pub fn select_swatch(&mut self, index: usize) -> usize {
        let Some(&color) = self.palette.get(index) else {
            log::warn!("No swatch at index {index}");
            return 0;
        };
        let changed = self.scene.set_colorable_color(color);
        log::debug!("Swatch {index} applied to {changed} material(s)");
        changed
    }

    /// Applies a new surface size to the viewport, camera and backend.
    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        self.viewport = Viewport {
            width,
            height,
            device_pixel_ratio,
        };
        self.camera.aspect = self.viewport.aspect();
        self.camera.update_projection_matrix();
        self.backend
            .resize(width, height, self.viewport.pixel_ratio());
    }

    // ========================================================================
    // Debug controls
    // ========================================================================

    pub fn set_light_intensity(&mut self, value: f32) {
        self.scene.key_light.intensity = self.debug.set_light_intensity(value);
    }

    pub fn set_light_position(&mut self, position: Vec3) {
        self.scene.key_light.position = self.debug.set_light_position(position);
    }

    pub fn set_exposure(&mut self, value: f32) {
        self.render_settings.exposure = self.debug.set_exposure(value);
        self.backend.apply_settings(&self.render_settings);
    }

    /// Switches tone mapping; materials are flagged for rebuild.
    pub fn set_tone_mapping(&mut self, mode: ToneMapping) {
        if !self.debug.set_tone_mapping(mode) {
            return;
        }
        self.render_settings.tone_mapping = mode;
        self.backend.apply_settings(&self.render_settings);
        self.scene.mark_all_materials_dirty();
        log::debug!("Tone mapping set to {}", mode.name());
    }

    pub fn set_env_map_intensity(&mut self, value: f32) {
        self.scene.environment.intensity = self.debug.set_env_map_intensity(value);
    }

    // ========================================================================
    // Frame
    // ========================================================================

    /// Advances the session by `dt` seconds and renders one frame.
    pub fn tick(&mut self, dt: f32) {
        self.poll_pending_load();

        self.readiness.advance(dt);
        let view = self.loading_screen.advance(dt);
        self.ui.update_loading(view);

        self.driver.update(dt, &mut self.scene);
        self.scene.update_world_matrices();

        if self.readiness.is_ready() {
            update_hotspots(
                &mut self.anchors,
                &self.camera,
                &self.scene,
                &self.viewport,
                &mut self.ui,
            );
        }

        self.controls
            .update(&mut self.camera, &self.orbit_input, self.viewport.height, dt);
        self.orbit_input.clear();

        self.backend.render(&self.scene, &self.camera);
    }

    /// Pixel offset of every anchor from the viewport center as of the last
    /// projected frame.
    #[must_use]
    pub fn hotspot_offsets(&self) -> Vec<Vec2> {
        self.anchors.iter().map(|a| a.offset).collect()
    }
}
