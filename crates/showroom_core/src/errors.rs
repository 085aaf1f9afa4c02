//! Error Types
//!
//! This module defines the error type used throughout the viewer.
//!
//! # Overview
//!
//! [`ShowroomError`] covers every failure mode the viewer can surface:
//! - Asset loading and decoding errors
//! - Configuration parsing errors
//! - Animation segment extraction errors
//!
//! There is no recovery layer: a failed load is reported once and the
//! previously attached model stays in place.
//!
//! ```rust,ignore
//! use showroom_core::errors::{ShowroomError, Result};
//!
//! fn load_config() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the viewer.
#[derive(Error, Debug)]
pub enum ShowroomError {
    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// The requested asset was not found.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// glTF parsing or import error.
    #[error("glTF error: {0}")]
    GltfError(String),

    /// Image decoding error.
    #[error("Image decode error: {0}")]
    ImageDecodeError(String),

    /// The environment panorama does not have a horizontal-cross layout.
    #[error("Cube map error: {0}")]
    CubeMapError(String),

    /// The source clip does not carry a track for the requested segment.
    #[error("Animation clip '{clip}' has no track {index} for segment extraction")]
    MissingAnimationTrack {
        /// Name of the source clip
        clip: String,
        /// The missing track index
        index: usize,
    },

    /// The background loader went away before reporting completion.
    #[error("Asset loader disconnected: {0}")]
    LoaderDisconnected(String),

    // ========================================================================
    // I/O & Configuration Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid hex color string in the palette.
    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    /// Configuration violates a viewer invariant.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// ============================================================================
// Convenient conversion implementations
// ============================================================================

impl From<image::ImageError> for ShowroomError {
    fn from(err: image::ImageError) -> Self {
        ShowroomError::ImageDecodeError(err.to_string())
    }
}

impl From<gltf::Error> for ShowroomError {
    fn from(err: gltf::Error) -> Self {
        ShowroomError::GltfError(err.to_string())
    }
}

/// Alias for `Result<T, ShowroomError>`.
pub type Result<T> = std::result::Result<T, ShowroomError>;
