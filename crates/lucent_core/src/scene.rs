//! Hit records, the scene query interface, and a concrete scene.

use log::debug;
use lucent_math::{Ray, Vec3};

use crate::camera::Camera;
use crate::geometry::{Plane, Sphere};
use crate::light::Light;
use crate::material::{Material, MaterialId};

/// Record of a ray-surface intersection.
///
/// Produced fresh per scene query; only exists when a hit was found, so
/// every field is always meaningful.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: MaterialId,
    /// Parameter t where the intersection occurs
    pub t: f32,
}

/// What the renderer needs from a scene.
///
/// Implementations must be safe to query from many worker threads at
/// once; nothing here mutates.
pub trait SceneQuery: Send + Sync {
    /// Nearest intersection within the ray's valid interval, if any.
    fn closest_hit(&self, ray: &Ray) -> Option<HitRecord>;

    /// Whether anything intersects within the ray's valid interval.
    ///
    /// Visibility test only; implementations should early-out rather
    /// than resolve the nearest hit.
    fn any_hit(&self, ray: &Ray) -> bool;

    /// Ordered light sequence. Contributions are summed, so order only
    /// matters up to floating-point rounding.
    fn lights(&self) -> &[Light];

    /// Ordered material table indexed by [`MaterialId`].
    fn materials(&self) -> &[Box<dyn Material>];

    /// The camera state for the next frame.
    fn camera(&self) -> &Camera;
}

/// A concrete scene of analytic spheres and planes.
pub struct Scene {
    camera: Camera,
    materials: Vec<Box<dyn Material>>,
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene with the given camera.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            materials: Vec::new(),
            spheres: Vec::new(),
            planes: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Register a material and get back its handle.
    pub fn add_material(&mut self, material: Box<dyn Material>) -> MaterialId {
        let id = MaterialId::new(self.materials.len());
        self.materials.push(material);
        id
    }

    /// Add a sphere. The material handle must come from this scene.
    pub fn add_sphere(&mut self, origin: Vec3, radius: f32, material: MaterialId) {
        assert!(
            material.index() < self.materials.len(),
            "material handle out of range"
        );
        self.spheres.push(Sphere::new(origin, radius, material));
    }

    /// Add an infinite plane. The material handle must come from this scene.
    pub fn add_plane(&mut self, origin: Vec3, normal: Vec3, material: MaterialId) {
        assert!(
            material.index() < self.materials.len(),
            "material handle out of range"
        );
        self.planes.push(Plane::new(origin, normal, material));
    }

    /// Add a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Mutable camera access, for moving the camera between frames.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Log a one-line summary of the scene contents.
    pub fn log_summary(&self) {
        debug!(
            "scene: {} spheres, {} planes, {} lights, {} materials",
            self.spheres.len(),
            self.planes.len(),
            self.lights.len(),
            self.materials.len()
        );
    }
}

impl SceneQuery for Scene {
    fn closest_hit(&self, ray: &Ray) -> Option<HitRecord> {
        let mut ray = *ray;
        let mut closest: Option<HitRecord> = None;

        for sphere in &self.spheres {
            if let Some(rec) = sphere.hit(&ray) {
                ray.interval.max = rec.t;
                closest = Some(rec);
            }
        }
        for plane in &self.planes {
            if let Some(rec) = plane.hit(&ray) {
                ray.interval.max = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }

    fn any_hit(&self, ray: &Ray) -> bool {
        self.spheres.iter().any(|s| s.hit(ray).is_some())
            || self.planes.iter().any(|p| p.hit(ray).is_some())
    }

    fn lights(&self) -> &[Light] {
        &self.lights
    }

    fn materials(&self) -> &[Box<dyn Material>] {
        &self.materials
    }

    fn camera(&self) -> &Camera {
        &self.camera
    }
}
