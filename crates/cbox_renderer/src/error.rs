//! Error types for configuration loading and renderer setup.

use thiserror::Error;

/// Errors raised while loading or validating a [`RenderConfig`](crate::RenderConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Invalid field of view: {0}")]
    InvalidFieldOfView(f32),

    #[error("Invalid epsilon: {0}")]
    InvalidEpsilon(f32),

    #[error("Invalid camera position: {0}")]
    InvalidCameraPosition(glam::Vec3),

    #[error("Invalid light color: {0}")]
    InvalidLightColor(glam::Vec3),
}

/// Errors raised while building a [`Renderer`](crate::Renderer).
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
