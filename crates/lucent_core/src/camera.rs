//! Camera state and the per-frame camera-to-world transform.

use lucent_math::{Mat3, Vec3};

/// Camera for primary ray generation.
///
/// Holds position and orientation; the camera-to-world basis is derived
/// once per frame (before any pixel work) and treated as read-only for
/// the rest of the frame. Camera space looks down +Z.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub origin: Vec3,
    /// Vertical field of view in degrees.
    pub fov_angle: f32,
    pub forward: Vec3,
}

impl Camera {
    /// Create a camera at `origin` looking down +Z.
    pub fn new(origin: Vec3, fov_angle: f32) -> Self {
        Self {
            origin,
            fov_angle,
            forward: Vec3::Z,
        }
    }

    /// Set the view direction.
    pub fn with_forward(mut self, forward: Vec3) -> Self {
        self.forward = forward.normalize_or_zero();
        self
    }

    /// Build the camera-to-world rotation from the current orientation.
    ///
    /// Orthonormal basis around `forward` with world +Y as up reference;
    /// transforms directions only (no translation).
    pub fn camera_to_world(&self) -> Mat3 {
        let forward = self.forward.normalize_or_zero();
        let right = Vec3::Y.cross(forward).normalize_or_zero();
        let up = forward.cross(right);

        Mat3::from_cols(right, up, forward)
    }

    /// Tangent of half the vertical field of view.
    pub fn fov_tan(&self) -> f32 {
        (self.fov_angle.to_radians() / 2.0).tan()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 90.0)
    }
}
