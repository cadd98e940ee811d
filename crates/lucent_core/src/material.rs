//! Material trait (BRDF evaluation) and the checked material handle.

use std::f32::consts::FRAC_1_PI;

use lucent_math::{Color, Vec3};

use crate::scene::HitRecord;

/// Handle into a scene's material table.
///
/// Only [`Scene::add_material`](crate::Scene::add_material) mints these,
/// and geometry constructors validate them against the table, so a hit
/// record can never carry an index that does not resolve at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(u32);

impl MaterialId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position in the scene's material table.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Trait for materials that describe how a surface reflects light.
pub trait Material: Send + Sync {
    /// Evaluate the BRDF response at a hit point.
    ///
    /// `light_dir` is the normalized direction from the hit point to the
    /// light, `view_dir` the normalized direction from the hit point to
    /// the camera. No side effects.
    fn shade(&self, hit: &HitRecord, light_dir: Vec3, view_dir: Vec3) -> Color;
}

/// Flat material: constant response regardless of geometry.
#[derive(Debug, Clone, Copy)]
pub struct SolidColor {
    color: Color,
}

impl SolidColor {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Material for SolidColor {
    fn shade(&self, _hit: &HitRecord, _light_dir: Vec3, _view_dir: Vec3) -> Color {
        self.color
    }
}

/// Lambertian diffuse material: kd * albedo / pi.
#[derive(Debug, Clone, Copy)]
pub struct Lambert {
    diffuse_reflectance: f32,
    albedo: Color,
}

impl Lambert {
    /// Create a Lambert material.
    ///
    /// `diffuse_reflectance` (kd) scales the albedo; keep both in [0, 1]
    /// to preserve physical validity.
    pub fn new(diffuse_reflectance: f32, albedo: Color) -> Self {
        Self {
            diffuse_reflectance,
            albedo,
        }
    }
}

impl Material for Lambert {
    fn shade(&self, _hit: &HitRecord, _light_dir: Vec3, _view_dir: Vec3) -> Color {
        self.albedo * self.diffuse_reflectance * FRAC_1_PI
    }
}
