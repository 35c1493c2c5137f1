//! cbox renderer - progressive CPU path tracing of a Cornell box.
//!
//! A Monte Carlo path tracer over a scene of infinite planes. Each frame
//! traces one jittered sample per pixel in parallel and adds it to a
//! persistent accumulation buffer; the running average converges to an
//! antialiased image as frames accumulate.

mod camera;
mod config;
mod error;
mod film;
mod hit;
mod integrator;
mod renderer;
mod sampler;
mod scene;
mod surface;

pub use camera::Camera;
pub use config::RenderConfig;
pub use error::{ConfigError, RenderError};
pub use film::{AccumulationBuffer, AccumulationCell};
pub use hit::HitResult;
pub use integrator::{trace, PathState};
pub use renderer::{render_sample, Renderer};
pub use sampler::Sampler;
pub use scene::Scene;
pub use surface::{ray_plane_intersect, Material, Surface};

/// Re-export Vec3 and common math types from cbox_math
pub use cbox_math::{Interval, Ray, Vec3};

/// Color type alias (linear RGB, channels nominally in [0, 1])
pub type Color = Vec3;
