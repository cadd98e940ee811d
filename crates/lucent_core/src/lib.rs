//! Scene-side types for the lucent renderer.
//!
//! Holds everything the renderer consumes but does not own: lights,
//! materials, the camera, and the scene geometry it intersects rays
//! against. The renderer sees all of this through the [`SceneQuery`]
//! trait plus read-only light/material slices.

mod camera;
mod geometry;
mod light;
mod material;
mod scene;

pub use camera::Camera;
pub use geometry::{Plane, Sphere};
pub use light::Light;
pub use material::{Lambert, Material, MaterialId, SolidColor};
pub use scene::{HitRecord, Scene, SceneQuery};

/// Re-export the math types scene code is written against.
pub use lucent_math::{Color, Interval, Ray, Vec3};
