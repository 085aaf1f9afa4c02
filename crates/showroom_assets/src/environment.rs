//! Environment cube maps from a single horizontal-cross panorama.
//!
//! Layout (face size `s`, image at least `4s × 3s`):
//!
//! ```text
//!         [+Y]
//!   [-X]  [+Z]  [+X]  [-Z]
//!         [-Y]
//! ```

use std::path::Path;

use image::RgbaImage;
use image::imageops;
use showroom_core::errors::{Result, ShowroomError};
use showroom_scene::CubeMap;

/// Grid `(column, row)` of each face, in +X, -X, +Y, -Y, +Z, -Z order.
pub const CROSS_FACE_TILES: [(u32, u32); 6] = [(2, 1), (0, 1), (1, 0), (1, 2), (1, 1), (3, 1)];

/// Slices a horizontal-cross image into six faces. `face_size` defaults to
/// a quarter of the image width.
pub fn slice_cross_image(image: &RgbaImage, face_size: Option<u32>) -> Result<CubeMap> {
    let size = face_size.unwrap_or(image.width() / 4);
    let fits = match (size.checked_mul(4), size.checked_mul(3)) {
        (Some(width), Some(height)) => size > 0 && image.width() >= width && image.height() >= height,
        _ => false,
    };
    if !fits {
        return Err(ShowroomError::CubeMapError(format!(
            "{}x{} image cannot hold a 4x3 cross of {size}px faces",
            image.width(),
            image.height()
        )));
    }

    let faces = CROSS_FACE_TILES.map(|(col, row)| {
        imageops::crop_imm(image, col * size, row * size, size, size)
            .to_image()
            .into_raw()
    });

    Ok(CubeMap { face_size: size, faces })
}

/// Decodes the panorama at `path` and slices it.
pub fn load_cross_environment(path: impl AsRef<Path>, face_size: Option<u32>) -> Result<CubeMap> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ShowroomError::AssetNotFound(path.display().to_string()));
    }
    let image = image::open(path)?.to_rgba8();
    let cube = slice_cross_image(&image, face_size)?;
    log::info!("Environment '{}' sliced into {}px faces", path.display(), cube.face_size);
    Ok(cube)
}
