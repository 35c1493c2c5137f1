//! Path integrator.
//!
//! Traces a single sample through the scene. Bouncing is written as a loop
//! over an explicit [`PathState`] so stack usage stays flat no matter how
//! deep the path runs.
//!
//! Two approximations are intentional:
//! - Diffuse bounces multiply the throughput by the surface color only, with
//!   no cosine or 1/pi factor.
//! - Paths stop after `max_depth` intersections and contribute nothing.
//!   There is no Russian roulette, so long paths lose energy.

use cbox_math::{Ray, Vec3};

use crate::{Color, Material, RenderConfig, Sampler, Scene};

/// Working state of one path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathState {
    pub position: Vec3,
    /// Unit direction of the current segment
    pub direction: Vec3,
    /// Product of the colors of every diffuse surface visited so far
    pub throughput: Color,
    /// Number of intersections performed
    pub depth: u32,
}

impl PathState {
    /// Start a path along `ray` with unit throughput.
    pub fn new(ray: &Ray) -> Self {
        Self {
            position: ray.origin,
            direction: ray.direction,
            throughput: Color::ONE,
            depth: 0,
        }
    }

    /// Ray for the current segment.
    #[inline]
    pub fn ray(&self) -> Ray {
        Ray::new(self.position, self.direction)
    }
}

/// Compute the radiance carried back along `ray`.
///
/// `ray.direction` must be unit length.
pub fn trace(ray: &Ray, scene: &Scene, config: &RenderConfig, sampler: &mut Sampler) -> Color {
    let mut state = PathState::new(ray);

    while state.depth < config.max_depth {
        let segment = state.ray();
        let hit = scene.intersect(&segment, config.eps);

        match hit.material {
            // Escaped the scene
            Material::None => return Color::ZERO,
            // Emitters don't reflect, so the path ends here
            Material::Light => return state.throughput * config.light_color,
            Material::Lambertian => {
                state.throughput *= hit.color;

                let hit_position = segment.at(hit.distance);
                state.direction = sampler.sample_diffuse_direction(hit.normal);
                // Push off the surface to avoid re-hitting it
                state.position = hit_position + config.eps * state.direction;
                state.depth += 1;
            }
        }
    }

    Color::ZERO
}
