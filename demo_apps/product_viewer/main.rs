use std::time::Duration;

use showroom::prelude::*;

const FRAME: Duration = Duration::from_millis(16);
/// Frames to let each door animation run after a click.
const FRAMES_PER_CLICK: usize = 120;

/// Logs hotspot visibility changes and loading milestones.
#[derive(Default)]
struct ConsoleUi {
    visible: Vec<bool>,
    overlay_gone: bool,
}

impl HotspotSink for ConsoleUi {
    fn update_hotspot(&mut self, index: usize, visible: bool, offset: Vec2) {
        if self.visible.len() <= index {
            self.visible.resize(index + 1, false);
        }
        if self.visible[index] != visible {
            self.visible[index] = visible;
            log::info!(
                "Hotspot {index} {} at ({:.0}, {:.0})",
                if visible { "shown" } else { "hidden" },
                offset.x,
                offset.y
            );
        }
    }
}

impl LoadingSink for ConsoleUi {
    fn update_loading(&mut self, view: LoadingView) {
        if !self.overlay_gone && view.overlay_alpha <= 0.0 {
            self.overlay_gone = true;
            log::info!("Loading overlay faded out");
        }
    }
}

fn run_frames(viewer: &mut Viewer<HeadlessBackend, ConsoleUi>, timer: &mut Timer, frames: usize) {
    for _ in 0..frames {
        std::thread::sleep(FRAME);
        viewer.tick(timer.tick());
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let model = args.next();
    let config = match args.next() {
        Some(path) => ViewerConfig::from_path(path)?,
        None => ViewerConfig::default(),
    };
    let environment = config.environment_image.clone();

    let mut viewer = Viewer::new(
        config,
        Viewport::default(),
        HeadlessBackend::default(),
        ConsoleUi::default(),
    )?;

    if let Some(path) = environment
        && let Err(err) = viewer.load_environment(&path)
    {
        log::warn!("Environment '{path}' not loaded: {err}");
    }

    match model {
        Some(path) => viewer.load_model(path)?,
        None => {
            viewer.select_model(0)?;
        }
    }

    let mut timer = Timer::new();
    while viewer.is_loading() {
        run_frames(&mut viewer, &mut timer, 1);
    }
    // Let the settle delay pass so hotspots are projected.
    while !viewer.readiness().is_ready() {
        run_frames(&mut viewer, &mut timer, 1);
    }

    for hotspot in 0..viewer.anchors().len() {
        for _ in 0..2 {
            if let Some(direction) = viewer.handle_hotspot_click(hotspot) {
                log::info!("Hotspot {hotspot} clicked: playing {direction:?}");
            }
            run_frames(&mut viewer, &mut timer, FRAMES_PER_CLICK);
        }
    }

    for swatch in 0..viewer.config().palette.len() {
        let changed = viewer.select_swatch(swatch);
        log::info!("Swatch {swatch} recolored {changed} material(s)");
    }

    log::info!("Rendered {} frames", viewer.backend().frames);
    Ok(())
}
