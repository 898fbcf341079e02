//! Data-only boundary with the rendering collaborator
//!
//! The renderer reads these structs every frame; the core mutates them.
//! Paintable surfaces carry an explicit capability marker set by the loader
//! instead of being found by scanning for a magic material name.

use glam::{Quat, Vec3};

use crate::domain::{AnchorPose, Color};

/// One mesh part of a loaded asset
#[derive(Debug, Clone, PartialEq)]
pub struct MeshPart {
    pub name: String,
    /// Whether recolor operations may touch this part
    pub paintable: bool,
    pub color: Color,
}

impl MeshPart {
    /// A part that accepts paint operations
    pub fn paintable(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            paintable: true,
            color,
        }
    }

    /// A part whose color is fixed (chrome, glass, tires)
    pub fn fixed(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            paintable: false,
            color,
        }
    }
}

/// Scene-graph handle for one loaded asset
///
/// Plain state the renderer consumes: visibility, world transform and the
/// mesh parts with their current colors.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetHandle {
    visible: bool,
    position: Vec3,
    orientation: Quat,
    scale: f32,
    yaw: f32,
    parts: Vec<MeshPart>,
}

impl AssetHandle {
    /// Creates a hidden handle at the origin with unit scale
    pub fn new(parts: Vec<MeshPart>) -> Self {
        Self {
            visible: false,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            scale: 1.0,
            yaw: 0.0,
            parts,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Moves the handle to an anchor pose
    pub fn set_pose(&mut self, pose: &AnchorPose) {
        self.position = pose.position;
        self.orientation = pose.orientation_or_identity();
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// Yaw rotation in radians, applied on top of the anchor orientation
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    pub fn parts(&self) -> &[MeshPart] {
        &self.parts
    }

    /// Recolors every paintable part, leaving fixed parts untouched
    ///
    /// # Returns
    /// Number of parts recolored
    pub fn paint(&mut self, color: Color) -> usize {
        let mut painted = 0;
        for part in self.parts.iter_mut().filter(|p| p.paintable) {
            part.color = color;
            painted += 1;
        }
        painted
    }
}

impl Default for AssetHandle {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
