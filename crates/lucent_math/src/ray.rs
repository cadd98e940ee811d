use crate::{Interval, Vec3};

/// A ray in 3D space with origin, direction, and a valid hit interval.
///
/// The direction is expected to be unit length by convention (not
/// enforced). Primary rays span [0, inf); shadow rays narrow the
/// interval to [bias, distance-to-light] so occluders behind the light
/// are ignored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub interval: Interval,
}

impl Ray {
    /// Create a new ray with an explicit valid interval.
    pub fn new(origin: Vec3, direction: Vec3, interval: Interval) -> Self {
        Self {
            origin,
            direction,
            interval,
        }
    }

    /// Create a primary ray, valid over [0, inf).
    pub fn primary(origin: Vec3, direction: Vec3) -> Self {
        Self::new(origin, direction, Interval::FORWARD)
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
