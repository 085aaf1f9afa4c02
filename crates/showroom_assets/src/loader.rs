//! Background model loading.
//!
//! [`AssetLoader::load`] starts an import on a worker thread and returns a
//! [`PendingLoad`] right away. The frame thread polls it: zero or more
//! progress events arrive, then exactly one completion.

use std::path::{Path, PathBuf};

use showroom_core::errors::{Result, ShowroomError};
use tokio::runtime::{Builder, Runtime};

use crate::loaders::GltfLoader;
use crate::model::ModelData;

/// Message sent from the import worker to the frame thread.
#[derive(Debug)]
pub enum LoadEvent {
    Progress { loaded: usize, total: usize },
    Completed(Result<ModelData>),
}

/// A load in flight: pending until the completion event has been polled.
pub struct PendingLoad {
    source: String,
    receiver: flume::Receiver<LoadEvent>,
    ratios: Vec<f32>,
    latest_ratio: f32,
}

impl PendingLoad {
    /// Wraps the receiving end of a load event channel.
    #[must_use]
    pub fn from_receiver(source: impl Into<String>, receiver: flume::Receiver<LoadEvent>) -> Self {
        Self {
            source: source.into(),
            receiver,
            ratios: Vec::new(),
            latest_ratio: 0.0,
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Most recent `loaded / total` seen by [`PendingLoad::poll`].
    #[must_use]
    pub fn latest_ratio(&self) -> f32 {
        self.latest_ratio
    }

    /// Drains queued events without blocking. Progress is buffered for
    /// [`PendingLoad::progress_ratios`]; returns the outcome once completion
    /// arrives. A worker that vanished without completing is an error.
    pub fn poll(&mut self) -> Option<Result<ModelData>> {
        loop {
            match self.receiver.try_recv() {
                Ok(LoadEvent::Progress { loaded, total }) => {
                    let ratio = if total == 0 { 1.0 } else { loaded as f32 / total as f32 };
                    self.latest_ratio = ratio;
                    self.ratios.push(ratio);
                }
                Ok(LoadEvent::Completed(result)) => return Some(result),
                Err(flume::TryRecvError::Empty) => return None,
                Err(flume::TryRecvError::Disconnected) => {
                    return Some(Err(ShowroomError::LoaderDisconnected(self.source.clone())));
                }
            }
        }
    }

    /// Progress ratios received since the last call, oldest first.
    pub fn progress_ratios(&mut self) -> impl Iterator<Item = f32> + '_ {
        self.ratios.drain(..)
    }

    /// Blocks until completion, collecting progress along the way.
    pub fn wait(mut self) -> Result<ModelData> {
        loop {
            match self.receiver.recv() {
                Ok(LoadEvent::Progress { loaded, total }) => {
                    self.latest_ratio = if total == 0 { 1.0 } else { loaded as f32 / total as f32 };
                }
                Ok(LoadEvent::Completed(result)) => return result,
                Err(flume::RecvError::Disconnected) => {
                    return Err(ShowroomError::LoaderDisconnected(self.source));
                }
            }
        }
    }
}

/// Imports `path` on the calling thread, discarding progress.
pub fn import_model(path: impl AsRef<Path>) -> Result<ModelData> {
    GltfLoader::load(path, |_, _| {})
}

/// Runs model imports on a dedicated worker runtime.
pub struct AssetLoader {
    runtime: Runtime,
}

impl AssetLoader {
    pub fn new() -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("showroom-assets")
            .build()?;
        Ok(Self { runtime })
    }

    /// Starts importing `path` in the background.
    pub fn load(&self, path: impl Into<PathBuf>) -> PendingLoad {
        let path = path.into();
        let source = path.display().to_string();
        let (sender, receiver) = flume::unbounded();

        log::info!("Loading model '{source}'");
        self.runtime.spawn_blocking(move || {
            let progress = sender.clone();
            let result = GltfLoader::load(&path, |loaded, total| {
                let _ = progress.send(LoadEvent::Progress { loaded, total });
            });
            // The receiver may be gone if a newer load replaced this one.
            let _ = sender.send(LoadEvent::Completed(result));
        });

        PendingLoad::from_receiver(source, receiver)
    }
}
