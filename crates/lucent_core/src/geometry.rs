//! Analytic geometry primitives for ray intersection.

use lucent_math::{Ray, Vec3};

use crate::material::MaterialId;
use crate::scene::HitRecord;

/// A sphere primitive.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f32,
    pub material: MaterialId,
}

impl Sphere {
    pub fn new(origin: Vec3, radius: f32, material: MaterialId) -> Self {
        Self {
            origin,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Closest intersection with `ray` inside its valid interval.
    pub fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let oc = self.origin - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray.interval.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray.interval.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        Some(HitRecord {
            point,
            normal: (point - self.origin) / self.radius,
            material: self.material,
            t: root,
        })
    }
}

/// An infinite plane primitive.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material: MaterialId,
}

impl Plane {
    pub fn new(origin: Vec3, normal: Vec3, material: MaterialId) -> Self {
        Self {
            origin,
            normal: normal.normalize_or_zero(),
            material,
        }
    }

    /// Intersection with `ray` inside its valid interval.
    pub fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < 1e-8 {
            return None;
        }

        let t = (self.origin - ray.origin).dot(self.normal) / denom;
        if !ray.interval.surrounds(t) {
            return None;
        }

        Some(HitRecord {
            point: ray.at(t),
            normal: self.normal,
            material: self.material,
            t,
        })
    }
}
