//! Light variants and the per-point queries the shading loop consumes.

use lucent_math::{Color, Vec3};

/// Distance reported for directional lights.
///
/// Large enough that any real occluder falls inside a shadow ray's
/// interval, finite so the biased shadow origin stays finite.
const DIRECTIONAL_RANGE: f32 = 1.0e7;

/// A light source, immutable for the duration of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Omnidirectional emitter at a position, with inverse-square falloff.
    Point {
        origin: Vec3,
        color: Color,
        intensity: f32,
    },
    /// Parallel rays from a fixed direction, no falloff.
    Directional {
        direction: Vec3,
        color: Color,
        intensity: f32,
    },
}

impl Light {
    /// Convenience constructor for a point light.
    pub fn point(origin: Vec3, color: Color, intensity: f32) -> Self {
        Self::Point {
            origin,
            color,
            intensity,
        }
    }

    /// Convenience constructor for a directional light.
    ///
    /// The direction is the direction the light travels; it is
    /// normalized here so shading code never has to.
    pub fn directional(direction: Vec3, color: Color, intensity: f32) -> Self {
        Self::Directional {
            direction: direction.normalize_or_zero(),
            color,
            intensity,
        }
    }

    /// Vector from `point` to the light, NOT normalized.
    ///
    /// Its length is the distance to the light, which becomes the max
    /// bound of the shadow ray so occluders beyond the light are
    /// ignored.
    pub fn direction_to(&self, point: Vec3) -> Vec3 {
        match *self {
            Light::Point { origin, .. } => origin - point,
            Light::Directional { direction, .. } => -direction * DIRECTIONAL_RANGE,
        }
    }

    /// Radiance arriving at `point` from this light.
    pub fn radiance_at(&self, point: Vec3) -> Color {
        match *self {
            Light::Point {
                origin,
                color,
                intensity,
            } => color * (intensity / origin.distance_squared(point)),
            Light::Directional {
                color, intensity, ..
            } => color * intensity,
        }
    }
}
