// Re-export glam for convenience
pub use glam::*;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// Color type alias (RGB channels, typically 0-1 after tone mapping).
pub type Color = Vec3;
