//! A single registered asset
//!
//! Created when an external load completes, destroyed only at session
//! teardown. Carries its own transform snapshot; manipulation never leaks
//! between assets across a switch.

use crate::domain::TransformSnapshot;
use crate::registry::mixer::{AnimationClip, AnimationMixer};
use crate::scene::AssetHandle;

/// One loadable 3D object and its runtime state
#[derive(Debug)]
pub struct Asset {
    key: String,
    pub(crate) handle: AssetHandle,
    clips: Vec<AnimationClip>,
    pub(crate) snapshot: TransformSnapshot,
    /// Present only while this asset is active and its clips are playing
    pub(crate) mixer: Option<AnimationMixer>,
}

impl Asset {
    pub(crate) fn new(key: String, handle: AssetHandle, clips: Vec<AnimationClip>) -> Self {
        Self {
            key,
            handle,
            clips,
            snapshot: TransformSnapshot::default(),
            mixer: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn handle(&self) -> &AssetHandle {
        &self.handle
    }

    pub fn clips(&self) -> &[AnimationClip] {
        &self.clips
    }

    pub fn snapshot(&self) -> TransformSnapshot {
        self.snapshot
    }

    /// Whether a mixer is attached and still advancing
    pub fn has_running_mixer(&self) -> bool {
        self.mixer.as_ref().is_some_and(AnimationMixer::is_running)
    }

    /// Pushes the snapshot's scale and yaw onto the scene handle
    pub(crate) fn sync_handle_transform(&mut self) {
        self.handle.set_uniform_scale(self.snapshot.scale);
        self.handle.set_yaw(self.snapshot.rotation_y);
    }

    /// Stops and detaches the mixer, if any
    pub(crate) fn retire_mixer(&mut self) {
        if let Some(mut mixer) = self.mixer.take() {
            mixer.stop_all();
        }
    }
}
