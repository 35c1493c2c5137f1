//! Pinhole camera for primary ray generation.

use cbox_math::{Ray, Vec3};

use crate::RenderConfig;

/// Camera looking down -Z from `position`.
///
/// The image plane sits at unit distance; `field_of_view` is its vertical
/// half-extent and `aspect_ratio` scales the horizontal one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub field_of_view: f32,
    pub aspect_ratio: f32,
}

impl Camera {
    /// Create a new camera.
    pub fn new(position: Vec3, field_of_view: f32, aspect_ratio: f32) -> Self {
        Self {
            position,
            field_of_view,
            aspect_ratio,
        }
    }

    /// Camera described by a render configuration.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(
            config.camera_position,
            config.field_of_view,
            config.aspect_ratio(),
        )
    }

    /// Generate the ray through pixel `(u, v)` offset by `jitter`.
    ///
    /// `v = 0` is the bottom row. `jitter` components are expected in
    /// [0, 1); `resolution_y` is the image height in pixels.
    pub fn generate_ray(&self, u: u32, v: u32, resolution_y: u32, jitter: (f32, f32)) -> Ray {
        let fov = self.field_of_view;
        let res_y = resolution_y as f32;

        let x = 2.0 * fov * (u as f32 + jitter.0) / res_y - fov * self.aspect_ratio;
        let y = 2.0 * fov * (v as f32 + jitter.1) / res_y - fov;

        Ray::towards(self.position, Vec3::new(x, y, -1.0))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}
