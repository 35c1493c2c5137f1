//! Intersection result record.

use cbox_math::Vec3;

use crate::{Color, Material};

/// Nearest intersection found along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResult {
    /// Ray parameter of the hit, +inf when nothing was hit
    pub distance: f32,
    /// Normal of the surface that was hit
    pub normal: Vec3,
    /// Base color of the surface that was hit
    pub color: Color,
    /// Material of the surface, `Material::None` on a miss
    pub material: Material,
}

impl HitResult {
    /// The "no intersection" record.
    pub const MISS: HitResult = HitResult {
        distance: f32::INFINITY,
        normal: Vec3::ZERO,
        color: Color::ZERO,
        material: Material::None,
    };

    /// Whether a surface was recorded.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.material != Material::None
    }
}

impl Default for HitResult {
    fn default() -> Self {
        Self::MISS
    }
}
