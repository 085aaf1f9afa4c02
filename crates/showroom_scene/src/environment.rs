use std::sync::Arc;

/// Cube map face order: +X, -X, +Y, -Y, +Z, -Z.
pub const CUBE_FACE_COUNT: usize = 6;

/// Six square RGBA8 faces of an environment cube map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeMap {
    pub face_size: u32,
    pub faces: [Vec<u8>; CUBE_FACE_COUNT],
}

impl CubeMap {
    /// RGBA8 pixel at `(x, y)` of `face`, if in range.
    #[must_use]
    pub fn pixel(&self, face: usize, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.face_size || y >= self.face_size {
            return None;
        }
        let offset = ((y * self.face_size + x) * 4) as usize;
        let data = self.faces.get(face)?;
        data.get(offset..offset + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Image-based lighting and backdrop settings of a scene.
#[derive(Debug, Clone)]
pub struct Environment {
    pub map: Option<Arc<CubeMap>>,
    /// Multiplier applied to the environment contribution on lit materials.
    pub intensity: f32,
    /// Draw the cube map behind the model as well as lighting with it.
    pub use_as_background: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            map: None,
            intensity: 5.0,
            use_as_background: true,
        }
    }
}

impl Environment {
    pub fn set_map(&mut self, map: Arc<CubeMap>) {
        self.map = Some(map);
    }
}
