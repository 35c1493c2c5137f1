//! Plane surfaces and their material tags.

use cbox_math::{Ray, Vec3};

use crate::Color;

/// Surface material.
///
/// `None` only ever appears in a [`HitResult`](crate::HitResult) to mark
/// "nothing was hit"; [`Surface::new`] rejects it in debug builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Material {
    #[default]
    None,
    /// Diffuse reflector that attenuates by the surface color
    Lambertian,
    /// Emitter that terminates the path
    Light,
}

/// An infinite plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Any point on the plane
    pub point: Vec3,
    /// Unit normal, facing into the box
    pub normal: Vec3,
    /// Base color (RGB in [0, 1])
    pub color: Color,
    pub material: Material,
}

impl Surface {
    /// Create a new plane. `normal` is normalized on construction.
    ///
    /// `material` must be `Lambertian` or `Light`: a `None` surface would read
    /// as a miss wherever it is hit.
    pub fn new(point: Vec3, normal: Vec3, color: Color, material: Material) -> Self {
        debug_assert_ne!(material, Material::None, "surfaces need a real material");
        Self {
            point,
            normal: normal.normalize(),
            color,
            material,
        }
    }

    /// Lambertian plane with the given color.
    pub fn lambertian(point: Vec3, normal: Vec3, color: Color) -> Self {
        Self::new(point, normal, color, Material::Lambertian)
    }

    /// Ray parameter at which `ray` meets this plane, or +inf.
    #[inline]
    pub fn intersect(&self, ray: &Ray, eps: f32) -> f32 {
        ray_plane_intersect(ray, self.point, self.normal, eps)
    }
}

/// Ray parameter `t` where `ray` meets the plane through `point` with `normal`.
///
/// Returns `f32::INFINITY` when the ray is parallel to the plane within
/// `eps`. The result may be negative (plane behind the origin); callers
/// filter by range.
#[inline]
pub fn ray_plane_intersect(ray: &Ray, point: Vec3, normal: Vec3, eps: f32) -> f32 {
    let denom = ray.direction.dot(normal);
    if denom.abs() > eps {
        (point - ray.origin).dot(normal) / denom
    } else {
        f32::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_plane_hit_closed_form() {
        let ray = Ray::towards(Vec3::new(0.0, 1.0, 5.0), Vec3::new(0.0, -1.0, -1.0));
        let t = ray_plane_intersect(&ray, Vec3::ZERO, Vec3::Y, EPS);

        // y(t) = 1 - t / sqrt(2) reaches 0 at t = sqrt(2)
        assert!((t - 2.0_f32.sqrt()).abs() < 1e-5);
        assert!(ray.at(t).y.abs() < 1e-5);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        let t = ray_plane_intersect(&ray, Vec3::ZERO, Vec3::Y, EPS);
        assert_eq!(t, f32::INFINITY);
    }

    #[test]
    fn test_nearly_parallel_ray_misses() {
        let ray = Ray::towards(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, -1e-6, 0.0));
        let t = ray_plane_intersect(&ray, Vec3::ZERO, Vec3::Y, EPS);
        assert_eq!(t, f32::INFINITY);
    }

    #[test]
    fn test_plane_behind_is_negative() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        let t = ray_plane_intersect(&ray, Vec3::ZERO, Vec3::Y, EPS);
        assert!((t + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_surface_normalizes_normal() {
        let surface = Surface::lambertian(Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0), Color::ONE);
        assert_eq!(surface.normal, Vec3::Z);
        assert_eq!(surface.material, Material::Lambertian);
    }

    #[test]
    fn test_default_material_is_none() {
        assert_eq!(Material::default(), Material::None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "surfaces need a real material")]
    fn test_surface_without_material_rejected() {
        Surface::new(Vec3::ZERO, Vec3::Y, Color::ONE, Material::None);
    }
}
