//! Error type for scene construction, settings validation and image output.
//!
//! Numeric degeneracies during rendering (misses, absorbed rays, exhausted
//! bounce budget) are not errors and never surface here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the renderer crate.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid sphere radius {0}: must be positive and finite")]
    InvalidRadius(f32),

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Invalid render settings: {0}")]
    InvalidSettings(String),

    #[error("Unsupported output format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Scene parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result alias for renderer operations.
pub type Result<T> = std::result::Result<T, RenderError>;
