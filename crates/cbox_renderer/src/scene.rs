//! Geometry store and nearest-hit intersection.

use cbox_math::{Interval, Ray, Vec3};

use crate::{Color, HitResult, Material, Surface};

const RED: Color = Color::new(0.65, 0.05, 0.05);
const GREEN: Color = Color::new(0.12, 0.45, 0.15);
const GRAY: Color = Color::new(0.93, 0.93, 0.93);

/// An ordered list of plane surfaces.
///
/// Order only matters when two planes report exactly the same distance; the
/// earlier surface wins.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    surfaces: Vec<Surface>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            surfaces: Vec::new(),
        }
    }

    /// The five-plane Cornell box: red left wall, green right wall, gray
    /// floor, ceiling and back wall. The ceiling becomes a light when
    /// `light` is set.
    pub fn cornell_box(light: bool) -> Self {
        let top_material = if light {
            Material::Light
        } else {
            Material::Lambertian
        };

        let mut scene = Self::new();
        // left
        scene.add(Surface::lambertian(Vec3::new(-1.1, 0.0, 0.0), Vec3::X, RED));
        // right
        scene.add(Surface::lambertian(Vec3::new(1.1, 0.0, 0.0), Vec3::NEG_X, GREEN));
        // bottom
        scene.add(Surface::lambertian(Vec3::ZERO, Vec3::Y, GRAY));
        // top
        scene.add(Surface::new(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Y, GRAY, top_material));
        // far
        scene.add(Surface::lambertian(Vec3::ZERO, Vec3::Z, GRAY));
        scene
    }

    /// Add a surface to the scene.
    pub fn add(&mut self, surface: Surface) {
        self.surfaces.push(surface);
    }

    /// All surfaces, in intersection order.
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Get the number of surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Whether any surface emits light.
    pub fn has_light(&self) -> bool {
        self.surfaces.iter().any(|s| s.material == Material::Light)
    }

    /// Find the nearest surface hit by `ray` with `0 < t < +inf`.
    ///
    /// Planes the ray runs parallel to (within `eps`) are skipped.
    pub fn intersect(&self, ray: &Ray, eps: f32) -> HitResult {
        let mut closest = HitResult::MISS;
        let mut ray_t = Interval::FORWARD;

        for surface in &self.surfaces {
            let t = surface.intersect(ray, eps);
            if ray_t.surrounds(t) {
                ray_t = ray_t.with_max(t);
                closest = HitResult {
                    distance: t,
                    normal: surface.normal,
                    color: surface.color,
                    material: surface.material,
                };
            }
        }

        closest
    }
}
