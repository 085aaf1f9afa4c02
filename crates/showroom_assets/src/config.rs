//! Viewer configuration: palette, model catalog, hotspot anchors and
//! initial camera. Every field has a default, so a partial JSON document
//! only overrides what it names.

use std::path::Path;

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};
use showroom_core::errors::Result;
use showroom_core::parse_hex_color;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    /// `RRGGBB` hex, no leading `#`.
    pub color: String,
}

/// Fixed set of colors offered by the swatch picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    pub swatches: Vec<Swatch>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            swatches: ["F4FF03", "0013FC", "FC000F", "00FC08", "FFFFFF"]
                .into_iter()
                .map(|c| Swatch { color: c.to_string() })
                .collect(),
        }
    }
}

impl Palette {
    #[must_use]
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// RGBA color of swatch `index`. `None` when out of range;
    /// a malformed hex string is an error.
    pub fn color(&self, index: usize) -> Option<Result<Vec4>> {
        self.swatches.get(index).map(|s| parse_hex_color(&s.color))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub name: String,
    pub path: String,
}

/// Assets selectable from the debug panel. The first entry loads at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelCatalog {
    pub entries: Vec<ModelEntry>,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        let entry = |name: &str, path: &str| ModelEntry {
            name: name.to_string(),
            path: path.to_string(),
        };
        Self {
            entries: vec![
                entry("filePathModel1", "/models/SamsungRFG_Anim.glb"),
                entry("filePathModel2", "/models/Ring-Smaple-jewelry.glb"),
                entry("filePathModel3", "/models/dim-ragingBull-shoe.glb"),
            ],
        }
    }
}

impl ModelCatalog {
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ModelEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ModelEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view, degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 100.0,
            position: Vec3::new(4.0, 1.0, -4.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub palette: Palette,
    pub models: ModelCatalog,
    /// Hotspot anchor positions in world space, one per door, in hotspot order.
    pub anchors: Vec<Vec3>,
    pub camera: CameraConfig,
    /// Settle time between load completion and hotspot display, seconds.
    pub ready_delay: f32,
    /// Horizontal-cross panorama sliced into the environment cube map.
    pub environment_image: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            models: ModelCatalog::default(),
            anchors: vec![
                Vec3::new(0.5, 1.4, 0.2),
                Vec3::new(0.5, 1.5, -0.2),
                Vec3::new(0.6, 0.5, 0.0),
            ],
            camera: CameraConfig::default(),
            ready_delay: 2.0,
            environment_image: Some("photo_studio_broadway_hall.jpg".to_string()),
        }
    }
}

impl ViewerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
