//! Placement state machine
//!
//! Tracks the transition from searching for a surface to having a placed
//! anchor. While searching, the placeholder mirrors every detected pose;
//! placement freezes the most recent pose and is monotonic for the rest of
//! the session — there is no transition back to searching.

use thiserror::Error;

use crate::domain::AnchorPose;

/// Errors from placement operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Placement was requested before any anchor pose was observed
    #[error("cannot place: no anchor pose has been detected yet")]
    NotReady,
}

/// Lifecycle state of the session's anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementState {
    /// Waiting for a surface; placeholder follows detection results
    #[default]
    Searching,
    /// Anchor frozen; placeholder hidden, terminal for the session
    Placed,
}

/// Result of a [`PlacementTracker::place`] call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaceOutcome {
    /// The session just transitioned to placed at this frozen pose
    Anchored(AnchorPose),
    /// The session was already placed; nothing changed
    AlreadyPlaced,
}

/// Owns the placeholder and the placed/unplaced flag
#[derive(Debug, Default)]
pub struct PlacementTracker {
    state: PlacementState,
    /// Latest detection while searching; the frozen anchor once placed
    pose: Option<AnchorPose>,
    placeholder_visible: bool,
}

impl PlacementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current placement state
    pub fn state(&self) -> PlacementState {
        self.state
    }

    /// True once [`place`](Self::place) has succeeded
    pub fn is_placed(&self) -> bool {
        self.state == PlacementState::Placed
    }

    /// Whether the placeholder marker should currently be drawn
    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }

    /// Pose the placeholder should be drawn at, while visible
    pub fn placeholder_pose(&self) -> Option<AnchorPose> {
        if self.placeholder_visible { self.pose } else { None }
    }

    /// The frozen anchor pose, once placed
    pub fn anchor(&self) -> Option<AnchorPose> {
        if self.is_placed() { self.pose } else { None }
    }

    /// Records a surface detection result
    ///
    /// While searching this moves the placeholder to the new pose and makes
    /// it visible. Once placed it is a silent no-op: no detection may move
    /// an already-anchored asset.
    pub fn on_anchor_detected(&mut self, pose: AnchorPose) {
        if self.state == PlacementState::Searching {
            self.pose = Some(pose);
            self.placeholder_visible = true;
        }
    }

    /// Confirms placement at the most recently observed pose
    ///
    /// # Returns
    /// `Anchored(pose)` on the searching → placed transition, with the pose
    /// now frozen; `AlreadyPlaced` when called again (idempotent);
    /// `PlacementError::NotReady` if no pose was ever observed.
    pub fn place(&mut self) -> Result<PlaceOutcome, PlacementError> {
        if self.is_placed() {
            return Ok(PlaceOutcome::AlreadyPlaced);
        }

        let pose = self.pose.ok_or(PlacementError::NotReady)?;
        self.state = PlacementState::Placed;
        self.placeholder_visible = false;
        Ok(PlaceOutcome::Anchored(pose))
    }
}
