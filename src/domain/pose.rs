//! Anchor poses reported by the tracking service
//!
//! A pose is a world-space position with an optional orientation. While the
//! session is still searching for a surface, poses are ephemeral and each
//! detection overwrites the last; the pose observed at the moment of
//! placement is frozen for the rest of the session.

use glam::{Quat, Vec3};

/// World-space pose of a detected surface point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPose {
    /// Position of the detected point
    pub position: Vec3,
    /// Orientation of the surface, when the tracking service supplies one
    pub orientation: Option<Quat>,
}

impl AnchorPose {
    /// Creates a pose from a position only
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            orientation: None,
        }
    }

    /// Creates a pose with an explicit orientation
    pub fn oriented(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation: Some(orientation),
        }
    }

    /// Returns the orientation, falling back to identity
    pub fn orientation_or_identity(&self) -> Quat {
        self.orientation.unwrap_or(Quat::IDENTITY)
    }
}
