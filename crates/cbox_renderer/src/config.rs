//! Render session configuration.
//!
//! Every value here is fixed before the first frame and read by reference
//! from every per-pixel task. Validation happens once, in
//! [`RenderConfig::validate`], never on the hot path.

use std::fs;
use std::path::Path;

use cbox_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::Color;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Parallel-ray threshold and self-intersection push-off distance
    pub eps: f32,
    /// Maximum number of intersections per path
    pub max_depth: u32,
    /// Half-extent of the image plane at unit distance, vertically
    pub field_of_view: f32,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Camera position; the camera always looks down -Z
    pub camera_position: Vec3,
    /// Radiance returned when a path reaches a light surface
    pub light_color: Color,
    /// Session seed mixed into every per-pixel random stream
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            eps: 1e-4,
            max_depth: 10,
            field_of_view: 0.8,
            width: 800,
            height: 800,
            camera_position: Vec3::new(0.0, 0.6, 3.0),
            light_color: Color::new(0.9, 0.85, 0.7),
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the bounce cap.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the session seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the light emission color.
    pub fn with_light_color(mut self, light_color: Color) -> Self {
        self.light_color = light_color;
        self
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Parse a configuration from JSON. Missing fields keep their defaults.
    ///
    /// Values are not validated here, so later overrides can still fix them;
    /// [`Renderer::new`](crate::Renderer::new) validates the final result.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Check the values a render session assumes are sane.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if !self.field_of_view.is_finite() || self.field_of_view <= 0.0 {
            return Err(ConfigError::InvalidFieldOfView(self.field_of_view));
        }
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.eps));
        }
        if !self.camera_position.is_finite() {
            return Err(ConfigError::InvalidCameraPosition(self.camera_position));
        }
        if !self.light_color.is_finite() || self.light_color.min_element() < 0.0 {
            return Err(ConfigError::InvalidLightColor(self.light_color));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.aspect_ratio(), 1.0);
    }

    #[test]
    fn test_builders() {
        let config = RenderConfig::default()
            .with_resolution(64, 32)
            .with_max_depth(3)
            .with_seed(7)
            .with_light_color(Color::ONE);

        assert_eq!(config.width, 64);
        assert_eq!(config.height, 32);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.seed, 7);
        assert_eq!(config.light_color, Color::ONE);
        assert_eq!(config.aspect_ratio(), 2.0);
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let config = RenderConfig::default().with_resolution(0, 10);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidResolution { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_degenerate_fov_rejected() {
        let mut config = RenderConfig::default();
        config.field_of_view = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidFieldOfView(_))));

        config.field_of_view = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidFieldOfView(_))));
    }

    #[test]
    fn test_bad_eps_and_light_rejected() {
        let mut config = RenderConfig::default();
        config.eps = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidEpsilon(_))));

        let config = RenderConfig::default().with_light_color(Color::new(1.0, -0.1, 1.0));
        assert!(matches!(config.validate(), Err(ConfigError::InvalidLightColor(_))));
    }

    #[test]
    fn test_non_finite_camera_rejected() {
        let mut config = RenderConfig::default();
        config.camera_position = Vec3::new(0.0, f32::INFINITY, 3.0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCameraPosition(_))));
    }

    #[test]
    fn test_json_partial_override() {
        let config = RenderConfig::from_json_str(r#"{ "width": 64, "height": 48, "seed": 3 }"#)
            .expect("valid json");

        assert_eq!(config.width, 64);
        assert_eq!(config.height, 48);
        assert_eq!(config.seed, 3);
        assert_eq!(config.max_depth, RenderConfig::default().max_depth);
        assert_eq!(config.camera_position, Vec3::new(0.0, 0.6, 3.0));
    }

    #[test]
    fn test_json_vectors_as_arrays() {
        let config =
            RenderConfig::from_json_str(r#"{ "light_color": [1.0, 0.5, 0.25] }"#).expect("valid json");
        assert_eq!(config.light_color, Color::new(1.0, 0.5, 0.25));
    }

    #[test]
    fn test_json_invalid_values_rejected() {
        // Parsing accepts out-of-range values; validation catches them
        let config = RenderConfig::from_json_str(r#"{ "width": 0 }"#).expect("valid json");
        assert_eq!(config.width, 0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidResolution { .. })
        ));
        assert!(matches!(
            RenderConfig::from_json_str("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = RenderConfig::from_json_file("/definitely/not/here/cbox.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
