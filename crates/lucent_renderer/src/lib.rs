//! lucent - CPU direct-lighting ray tracing
//!
//! For each pixel: cast a primary ray, resolve the closest hit, then
//! accumulate direct lighting from every light with hard shadow tests.
//! One frame is rendered fork-join across all pixels; every strategy
//! produces bit-identical output because each pixel only writes its own
//! slot and sums its lights sequentially.

mod executor;
mod framebuffer;
mod renderer;
mod shading;

pub use executor::ExecStrategy;
pub use framebuffer::{ExportError, Framebuffer};
pub use renderer::Renderer;
pub use shading::{max_to_one, pack_rgb, LightingMode};

/// Re-export the scene-side types callers build frames from.
pub use lucent_core::{
    Camera, HitRecord, Lambert, Light, Material, MaterialId, Scene, SceneQuery, SolidColor,
};
pub use lucent_math::{Color, Interval, Ray, Vec3};
