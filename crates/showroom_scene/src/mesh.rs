use bitflags::bitflags;
use glam::{Vec3, Vec4};
use showroom_core::BoundingBox;

use crate::{GeometryKey, MaterialKey};

/// Triangle geometry in local space. Positions are indexed in CCW triples.
#[derive(Debug, Clone)]
pub struct Geometry {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
    bounding_box: BoundingBox,
}

impl Geometry {
    /// Builds indexed geometry. Without indices the positions are read as a
    /// plain triangle list.
    #[must_use]
    pub fn new(positions: Vec<Vec3>, indices: Option<Vec<u32>>) -> Self {
        let indices = indices.unwrap_or_else(|| (0..positions.len() as u32).collect());
        let bounding_box = BoundingBox::from_points(positions.iter().copied());
        Self {
            positions,
            indices,
            bounding_box,
        }
    }

    #[inline]
    #[must_use]
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates triangles as vertex triples; triples with out-of-range indices
    /// are skipped.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).filter_map(|tri| {
            let a = *self.positions.get(tri[0] as usize)?;
            let b = *self.positions.get(tri[1] as usize)?;
            let c = *self.positions.get(tri[2] as usize)?;
            Some([a, b, c])
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

bitflags! {
    /// Capabilities assigned to a material once at import time.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct MaterialFlags: u32 {
        /// Base color follows the swatch picker.
        const COLORABLE = 1 << 0;
    }
}

#[derive(Debug, Clone)]
pub struct Material {
    pub name: String,
    pub color: Vec4,
    pub side: Side,
    pub flags: MaterialFlags,
    version: u64,
}

impl Material {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Vec4) -> Self {
        Self {
            name: name.into(),
            color,
            side: Side::Front,
            flags: MaterialFlags::empty(),
            version: 0,
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: MaterialFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    #[inline]
    #[must_use]
    pub fn is_colorable(&self) -> bool {
        self.flags.contains(MaterialFlags::COLORABLE)
    }

    pub fn set_color(&mut self, color: Vec4) {
        self.color = color;
        self.mark_needs_update();
    }

    /// Bumps the version so the renderer rebuilds anything derived from it.
    pub fn mark_needs_update(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }
}

/// Mesh component: geometry and material handles owned by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mesh {
    pub geometry: GeometryKey,
    pub material: MaterialKey,
}
