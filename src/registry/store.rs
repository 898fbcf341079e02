//! Registry storage and the switch operation

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{AnchorPose, Color};
use crate::registry::asset::Asset;
use crate::registry::mixer::{AnimationClip, AnimationMixer};
use crate::scene::AssetHandle;

/// Errors from registry operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The requested key has never been registered
    #[error("unknown asset: {key}")]
    UnknownAsset { key: String },
    /// An operation needed an active asset and none is set
    #[error("no asset is active")]
    NoActiveAsset,
}

/// Set of loaded assets plus the active-asset pointer
///
/// Exactly one asset may be visible and anchored once placement has
/// occurred; everything else stays hidden regardless of load order.
#[derive(Debug)]
pub struct AssetRegistry {
    assets: HashMap<String, Asset>,
    active: Option<String>,
    /// Tick-time seconds before a freshly attached mixer stops itself
    auto_stop_secs: f32,
}

impl AssetRegistry {
    /// Creates an empty registry with the given animation auto-stop
    pub fn new(auto_stop_secs: f32) -> Self {
        Self {
            assets: HashMap::new(),
            active: None,
            auto_stop_secs,
        }
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.assets.contains_key(key)
    }

    pub fn asset(&self, key: &str) -> Option<&Asset> {
        self.assets.get(key)
    }

    /// Key of the active asset, if one is set
    pub fn active_key(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&Asset> {
        self.active.as_deref().and_then(|key| self.assets.get(key))
    }

    pub(crate) fn active_mut(&mut self) -> Option<&mut Asset> {
        match &self.active {
            Some(key) => self.assets.get_mut(key),
            None => None,
        }
    }

    /// Registers a loaded asset under a key
    ///
    /// Called when an external load completes, at any time relative to
    /// placement. The asset starts hidden; if it is the first registration
    /// it becomes active immediately (visibility still deferred until the
    /// caller anchors it). Re-registering a key replaces the handle after
    /// retiring any running mixer; the replacement starts from a default
    /// transform snapshot.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        mut handle: AssetHandle,
        clips: Vec<AnimationClip>,
        anchor: Option<&AnchorPose>,
    ) {
        let key = key.into();
        handle.set_visible(false);

        if let Some(existing) = self.assets.get_mut(&key) {
            debug!(key = %key, "replacing registered asset");
            existing.retire_mixer();
        }
        self.assets
            .insert(key.clone(), Asset::new(key.clone(), handle, clips));

        // First load becomes the manipulation target right away
        if self.active.is_none() {
            // Key was just inserted, activation cannot fail
            let _ = self.set_active(&key, anchor);
        }
    }

    /// Makes `key` the active asset
    ///
    /// The previous active asset (if any) has its mixer stopped and
    /// detached and is hidden. The new asset is shown at the anchor pose
    /// when one is supplied (placed session); otherwise it stays hidden
    /// until placement. Assets with clips get a fresh mixer playing every
    /// clip, scheduled to stop after the configured auto-stop time.
    pub fn set_active(
        &mut self,
        key: &str,
        anchor: Option<&AnchorPose>,
    ) -> Result<(), RegistryError> {
        if !self.assets.contains_key(key) {
            return Err(RegistryError::UnknownAsset { key: key.into() });
        }

        if let Some(previous) = self.active_mut() {
            previous.retire_mixer();
            previous.handle.set_visible(false);
        }

        self.active = Some(key.to_string());

        let auto_stop = self.auto_stop_secs;
        // Present per the check above
        let Some(asset) = self.assets.get_mut(key) else {
            return Err(RegistryError::UnknownAsset { key: key.into() });
        };

        match anchor {
            Some(pose) => {
                asset.handle.set_pose(pose);
                asset.handle.set_visible(true);
            }
            None => asset.handle.set_visible(false),
        }
        asset.sync_handle_transform();

        if !asset.clips().is_empty() {
            asset.mixer = Some(AnimationMixer::new(asset.clips(), auto_stop));
        }

        Ok(())
    }

    /// Anchors the active asset once placement occurs
    pub fn anchor_active(&mut self, pose: &AnchorPose) {
        if let Some(asset) = self.active_mut() {
            asset.handle.set_pose(pose);
            asset.handle.set_visible(true);
        }
    }

    /// Recolors the paintable parts of the active asset
    ///
    /// No-op when nothing is active; the UI may race ahead of loading.
    pub fn apply_color(&mut self, color: Color) {
        match self.active_mut() {
            Some(asset) => {
                let painted = asset.handle.paint(color);
                asset.snapshot.color = Some(color);
                debug!(key = asset.key(), painted = painted as u64, "applied color variant");
            }
            None => debug!("color change ignored, no active asset"),
        }
    }

    /// Advances the active asset's mixer by one frame
    ///
    /// Never fails the frame. A stopped mixer is detached; a mixer found on
    /// a non-active asset is an internal inconsistency, logged and retired.
    pub fn advance_animations(&mut self, delta_secs: f32) {
        let active = self.active.clone();
        for asset in self.assets.values_mut() {
            let is_active = active.as_deref() == Some(asset.key());
            if !is_active {
                if asset.mixer.is_some() {
                    warn!(key = asset.key(), "mixer attached to inactive asset, retiring");
                    asset.retire_mixer();
                }
                continue;
            }

            if let Some(mixer) = asset.mixer.as_mut() {
                if !mixer.advance(delta_secs) {
                    asset.mixer = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransformSnapshot;
    use crate::scene::MeshPart;
    use glam::Vec3;

    fn handle() -> AssetHandle {
        AssetHandle::new(vec![
            MeshPart::paintable("body", Color::SILVER),
            MeshPart::fixed("chrome", Color::SILVER),
        ])
    }

    fn clips() -> Vec<AnimationClip> {
        vec![
            AnimationClip::new("intro", 2.0),
            AnimationClip::new("detail", 1.0),
        ]
    }

    fn anchor() -> AnchorPose {
        AnchorPose::at(Vec3::new(0.0, 0.0, -1.5))
    }

    #[test]
    fn first_registration_becomes_active_but_hidden() {
        let mut registry = AssetRegistry::new(10.0);
        registry.register("car", handle(), Vec::new(), None);

        assert_eq!(registry.active_key(), Some("car"));
        assert!(!registry.active().unwrap().handle().is_visible());
    }

    #[test]
    fn later_registrations_stay_hidden_and_inactive() {
        let mut registry = AssetRegistry::new(10.0);
        registry.register("car", handle(), Vec::new(), None);
        registry.register("parts", handle(), Vec::new(), None);

        assert_eq!(registry.active_key(), Some("car"));
        assert!(!registry.asset("parts").unwrap().handle().is_visible());
    }

    #[test]
    fn registration_after_placement_shows_first_asset_at_anchor() {
        let mut registry = AssetRegistry::new(10.0);
        let pose = anchor();
        registry.register("car", handle(), Vec::new(), Some(&pose));

        let active = registry.active().unwrap();
        assert!(active.handle().is_visible());
        assert_eq!(active.handle().position(), pose.position);
    }

    #[test]
    fn set_active_unknown_key_fails() {
        let mut registry = AssetRegistry::new(10.0);
        registry.register("car", handle(), Vec::new(), None);

        let result = registry.set_active("missing", None);
        assert_eq!(
            result,
            Err(RegistryError::UnknownAsset { key: "missing".into() })
        );
        // Pointer untouched by the failed switch
        assert_eq!(registry.active_key(), Some("car"));
    }

    #[test]
    fn activation_with_clips_starts_all_of_them() {
        let mut registry = AssetRegistry::new(10.0);
        registry.register("car", handle(), clips(), None);

        let active = registry.active().unwrap();
        assert!(active.has_running_mixer());
        assert_eq!(active.mixer.as_ref().unwrap().action_count(), 2);
    }

    #[test]
    fn auto_stop_leaves_asset_visible_without_mixer() {
        let mut registry = AssetRegistry::new(1.0);
        let pose = anchor();
        registry.register("car", handle(), clips(), Some(&pose));

        registry.advance_animations(0.5);
        assert!(registry.active().unwrap().has_running_mixer());

        registry.advance_animations(0.6);
        let active = registry.active().unwrap();
        assert!(!active.has_running_mixer());
        assert!(active.mixer.is_none());
        assert!(active.handle().is_visible());
    }

    #[test]
    fn switching_hides_old_stops_its_mixer_and_anchors_new() {
        let mut registry = AssetRegistry::new(10.0);
        let pose = anchor();
        registry.register("car", handle(), clips(), Some(&pose));
        registry.register("parts", handle(), clips(), Some(&pose));

        // Drag the active asset somewhere else before switching
        registry
            .active_mut()
            .unwrap()
            .handle
            .set_pose(&AnchorPose::at(Vec3::new(5.0, 0.0, 0.0)));

        registry.set_active("parts", Some(&pose)).unwrap();

        let old = registry.asset("car").unwrap();
        assert!(!old.handle().is_visible());
        assert!(!old.has_running_mixer());

        let new = registry.active().unwrap();
        assert_eq!(new.key(), "parts");
        assert!(new.handle().is_visible());
        // Anchored at the frozen pose, not the old asset's dragged position
        assert_eq!(new.handle().position(), pose.position);
        assert!(new.has_running_mixer());
    }

    #[test]
    fn switching_without_placement_keeps_new_asset_hidden() {
        let mut registry = AssetRegistry::new(10.0);
        registry.register("car", handle(), Vec::new(), None);
        registry.register("parts", handle(), Vec::new(), None);

        registry.set_active("parts", None).unwrap();
        assert!(!registry.active().unwrap().handle().is_visible());
    }

    #[test]
    fn snapshots_do_not_leak_between_assets() {
        let mut registry = AssetRegistry::new(10.0);
        let pose = anchor();
        registry.register("car", handle(), Vec::new(), Some(&pose));

        registry.active_mut().unwrap().snapshot = TransformSnapshot {
            scale: 3.0,
            rotation_y: 1.2,
            color: None,
        };

        registry.register("parts", handle(), Vec::new(), Some(&pose));
        registry.set_active("parts", Some(&pose)).unwrap();

        let active = registry.active().unwrap();
        assert_eq!(active.snapshot().scale, 1.0);
        assert_eq!(active.snapshot().rotation_y, 0.0);
        assert_eq!(active.handle().scale(), 1.0);
        assert_eq!(active.handle().yaw(), 0.0);
    }

    #[test]
    fn reactivating_restores_assets_own_snapshot() {
        let mut registry = AssetRegistry::new(10.0);
        let pose = anchor();
        registry.register("car", handle(), Vec::new(), Some(&pose));
        registry.register("parts", handle(), Vec::new(), Some(&pose));

        registry.active_mut().unwrap().snapshot.scale = 2.5;
        registry.set_active("parts", Some(&pose)).unwrap();
        registry.set_active("car", Some(&pose)).unwrap();

        let active = registry.active().unwrap();
        assert_eq!(active.snapshot().scale, 2.5);
        assert_eq!(active.handle().scale(), 2.5);
    }

    #[test]
    fn reregistration_retires_mixer_and_resets_snapshot() {
        let mut registry = AssetRegistry::new(10.0);
        registry.register("car", handle(), clips(), None);
        assert!(registry.active().unwrap().has_running_mixer());

        registry.register("car", handle(), Vec::new(), None);
        let asset = registry.asset("car").unwrap();
        assert!(!asset.has_running_mixer());
        assert_eq!(asset.snapshot(), TransformSnapshot::default());
        // Replacement does not steal activation
        assert_eq!(registry.active_key(), Some("car"));
    }

    #[test]
    fn apply_color_respects_paintable_marker() {
        let mut registry = AssetRegistry::new(10.0);
        registry.register("car", handle(), Vec::new(), None);

        registry.apply_color(Color::ORANGE);
        let parts = registry.active().unwrap().handle().parts().to_vec();
        assert_eq!(parts[0].color, Color::ORANGE);
        assert_eq!(parts[1].color, Color::SILVER);
        assert_eq!(registry.active().unwrap().snapshot().color, Some(Color::ORANGE));
    }

    #[test]
    fn apply_color_without_active_asset_is_a_no_op() {
        let mut registry = AssetRegistry::new(10.0);
        registry.apply_color(Color::BLUE);
        assert!(registry.is_empty());
    }

    #[test]
    fn stray_mixer_on_inactive_asset_is_retired_not_fatal() {
        let mut registry = AssetRegistry::new(10.0);
        registry.register("car", handle(), clips(), None);
        registry.register("parts", handle(), Vec::new(), None);

        // Force the inconsistency the tick has to survive
        registry
            .assets
            .get_mut("parts")
            .unwrap()
            .mixer
            .replace(AnimationMixer::new(&clips(), 10.0));

        registry.advance_animations(0.1);
        assert!(!registry.asset("parts").unwrap().has_running_mixer());
        assert!(registry.active().unwrap().has_running_mixer());
    }
}
