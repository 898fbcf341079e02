//! The per-session context object
//!
//! [`ArSession`] owns the placement tracker, the asset registry, the
//! gesture interpreter and the transform coordinator, and exposes two
//! surfaces: one for the tracking service (detections, frame ticks,
//! camera changes) and one for the UI (place, switch, scale, rotate,
//! recolor, touch input). One instance per viewing session; teardown is
//! dropping it.

use thiserror::Error;
use tracing::debug;

use crate::config::SessionConfig;
use crate::domain::{AnchorPose, Color};
use crate::input::{GestureInterpreter, TouchPoint};
use crate::placement::{PlaceOutcome, PlacementError, PlacementTracker};
use crate::registry::{AnimationClip, AssetRegistry, RegistryError};
use crate::scene::AssetHandle;
use crate::transform::TransformCoordinator;

/// Callback invoked when continuous tracking should start
pub type TrackingStartFn = Box<dyn FnMut()>;

/// Callback invoked when camera parameters change (forwarded to renderer)
pub type CameraChangedFn = Box<dyn FnMut()>;

/// Errors surfaced to the UI layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// One AR viewing session
pub struct ArSession {
    config: SessionConfig,
    placement: PlacementTracker,
    registry: AssetRegistry,
    gestures: GestureInterpreter,
    transforms: TransformCoordinator,
    on_tracking_start: Option<TrackingStartFn>,
    on_camera_changed: Option<CameraChangedFn>,
}

impl ArSession {
    /// Creates a session with the given configuration
    pub fn new(config: SessionConfig) -> Self {
        let gestures = GestureInterpreter::new(config.rotation_sensitivity);
        let transforms = TransformCoordinator::new(&config);
        let registry = AssetRegistry::new(config.auto_stop_secs());
        Self {
            config,
            placement: PlacementTracker::new(),
            registry,
            gestures,
            transforms,
            on_tracking_start: None,
            on_camera_changed: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Placement state, for the placeholder renderer
    pub fn placement(&self) -> &PlacementTracker {
        &self.placement
    }

    /// Asset registry, for the scene renderer
    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    /// Registers the callback fired once when placement starts tracking
    pub fn set_tracking_start_handler(&mut self, handler: TrackingStartFn) {
        self.on_tracking_start = Some(handler);
    }

    /// Registers the callback forwarded on camera parameter changes
    pub fn set_camera_changed_handler(&mut self, handler: CameraChangedFn) {
        self.on_camera_changed = Some(handler);
    }

    // --- tracking service surface -------------------------------------

    /// Surface detection result; moves the placeholder while searching
    pub fn on_anchor_detected(&mut self, pose: AnchorPose) {
        self.placement.on_anchor_detected(pose);
    }

    /// Per-frame tick; advances animation playback, never fails
    pub fn on_frame_tick(&mut self, delta_secs: f32) {
        if delta_secs < 0.0 {
            debug!(delta = delta_secs as f64, "ignoring negative frame delta");
            return;
        }
        self.registry.advance_animations(delta_secs);
    }

    /// Device orientation or resize changed; forwarded to the renderer
    pub fn camera_parameters_changed(&mut self) {
        if let Some(handler) = &mut self.on_camera_changed {
            handler();
        }
    }

    // --- loader surface ------------------------------------------------

    /// Completion entry point for an asynchronous asset load
    ///
    /// Safe in any order relative to placement and switching: assets are
    /// hidden by default, and a first-loaded asset that auto-activates in
    /// an already-placed session shows up at the frozen anchor.
    pub fn register_asset(
        &mut self,
        key: impl Into<String>,
        handle: AssetHandle,
        clips: Vec<AnimationClip>,
    ) {
        self.registry
            .register(key, handle, clips, self.placement.anchor().as_ref());
    }

    // --- UI surface ----------------------------------------------------

    /// Confirms placement at the latest detected pose
    ///
    /// On the first successful call the active asset is anchored and the
    /// tracking-start handler fires. Calling again is a no-op.
    pub fn place(&mut self) -> Result<(), SessionError> {
        match self.placement.place()? {
            PlaceOutcome::Anchored(pose) => {
                self.registry.anchor_active(&pose);
                if let Some(handler) = &mut self.on_tracking_start {
                    handler();
                }
            }
            PlaceOutcome::AlreadyPlaced => {}
        }
        Ok(())
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_placed()
    }

    /// Switches the active asset
    pub fn switch_asset(&mut self, key: &str) -> Result<(), SessionError> {
        self.registry
            .set_active(key, self.placement.anchor().as_ref())?;
        Ok(())
    }

    /// Sets the active asset's absolute scale
    pub fn set_scale(&mut self, value: f32) -> Result<(), SessionError> {
        self.transforms.set_scale(&mut self.registry, value)?;
        Ok(())
    }

    /// Sets the active asset's absolute yaw in radians
    pub fn set_rotation(&mut self, angle: f32) -> Result<(), SessionError> {
        self.transforms.set_rotation(&mut self.registry, angle)?;
        Ok(())
    }

    /// Recolors the active asset's paintable parts
    pub fn apply_color(&mut self, color: Color) {
        self.registry.apply_color(color);
    }

    // --- touch surface -------------------------------------------------

    /// Platform touch-start with all touches currently down
    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        self.gestures.on_touch_start(touches);
    }

    /// Platform touch-move; decoded gestures go to the active asset
    pub fn touch_move(&mut self, touches: &[TouchPoint]) {
        if let Some(event) = self.gestures.on_touch_move(touches) {
            self.transforms.apply_gesture(&mut self.registry, event);
        }
    }

    /// Platform touch-end with the touches that remain down
    pub fn touch_end(&mut self, remaining: &[TouchPoint]) {
        self.gestures.on_touch_end(remaining);
    }

    /// Platform touch-cancel; drops all gesture state
    pub fn touch_cancel(&mut self) {
        self.gestures.on_touch_cancel();
    }
}

impl Default for ArSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
