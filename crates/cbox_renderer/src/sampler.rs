//! Per-sample random number streams.
//!
//! Every pixel sample owns its own [`Sampler`], seeded from the session
//! seed, the frame index and the pixel index. Nothing is shared between
//! tasks, so pixels never contend for a generator and a render is
//! reproducible regardless of how rayon schedules the work.

use cbox_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source for one pixel sample.
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Create a sampler from a raw seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create the sampler for `pixel_index` in frame `frame`.
    pub fn for_pixel(session_seed: u64, frame: u64, pixel_index: usize) -> Self {
        let seed = mix(mix(mix(session_seed) ^ frame) ^ pixel_index as u64);
        Self::from_seed(seed)
    }

    /// Uniform f32 in [0, 1).
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    /// Uniform f32 in [min, max).
    #[inline]
    pub fn next_range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_f32()
    }

    /// Sub-pixel offset, both components in [0, 1).
    pub fn jitter(&mut self) -> (f32, f32) {
        (self.next_f32(), self.next_f32())
    }

    /// Uniform point inside the unit ball, by rejection.
    pub fn random_unit_in_sphere(&mut self) -> Vec3 {
        loop {
            let p = Vec3::new(
                self.next_range(-1.0, 1.0),
                self.next_range(-1.0, 1.0),
                self.next_range(-1.0, 1.0),
            );
            if p.length_squared() <= 1.0 {
                return p;
            }
        }
    }

    /// Diffuse bounce direction about `normal`: a unit-ball sample pushed
    /// along the normal, then normalized. Approximates a cosine-weighted
    /// hemisphere but is not exact.
    pub fn sample_diffuse_direction(&mut self, normal: Vec3) -> Vec3 {
        let direction = self.random_unit_in_sphere() + normal;

        // Catch degenerate direction
        if direction.length_squared() < 1e-8 {
            return normal;
        }

        direction.normalize()
    }
}

/// SplitMix64 finalizer.
#[inline]
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
