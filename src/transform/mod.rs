//! Transform coordination
//!
//! Applies gesture deltas and discrete UI controls to the active asset's
//! own transform snapshot, then pushes the result onto its scene handle.
//! The target is resolved through the registry on every call, so deltas
//! can never land on a previously-active asset mid-switch.

use crate::config::SessionConfig;
use crate::input::GestureEvent;
use crate::registry::{AssetRegistry, RegistryError};

/// Routes transform changes to the active asset
#[derive(Debug, Clone, Copy)]
pub struct TransformCoordinator {
    min_scale: f32,
    max_scale: f32,
}

impl TransformCoordinator {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            min_scale: config.min_scale,
            max_scale: config.max_scale,
        }
    }

    /// Applies one gesture event to the active asset
    ///
    /// Silent no-op when nothing is active; gestures must never fail the
    /// frame.
    pub fn apply_gesture(&self, registry: &mut AssetRegistry, event: GestureEvent) {
        let Some(asset) = registry.active_mut() else {
            return;
        };

        match event {
            GestureEvent::Scale { factor } => {
                asset.snapshot.scale_by(factor, self.min_scale, self.max_scale);
            }
            GestureEvent::Rotate { delta_angle } => {
                asset.snapshot.rotate_by(delta_angle);
            }
        }
        asset.sync_handle_transform();
    }

    /// Sets an absolute uniform scale, bypassing the multiplicative path
    pub fn set_scale(
        &self,
        registry: &mut AssetRegistry,
        value: f32,
    ) -> Result<(), RegistryError> {
        let asset = registry.active_mut().ok_or(RegistryError::NoActiveAsset)?;
        asset.snapshot.scale = SessionConfig::sanitize_scale(value).clamp(self.min_scale, self.max_scale);
        asset.sync_handle_transform();
        Ok(())
    }

    /// Sets an absolute yaw rotation in radians
    pub fn set_rotation(
        &self,
        registry: &mut AssetRegistry,
        angle: f32,
    ) -> Result<(), RegistryError> {
        let asset = registry.active_mut().ok_or(RegistryError::NoActiveAsset)?;
        asset.snapshot.rotation_y = angle;
        asset.sync_handle_transform();
        Ok(())
    }
}
