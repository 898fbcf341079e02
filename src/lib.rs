//! Placement and manipulation core for an AR product viewer.
//!
//! The crate owns the logic that sits between a tracking service and a
//! renderer: deciding when a detected surface becomes a placed anchor,
//! turning raw multi-touch samples into scale/rotation deltas, and keeping
//! a registry of loadable 3D assets (with animation playback) of which
//! exactly one is active at a time.
//!
//! Rendering, pose estimation and asset decoding are collaborators; the
//! [`scene`] module is the data-only boundary they read from and write to.
//! [`app::ArSession`] is the context object that wires everything together
//! for one viewing session.

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod placement;
pub mod registry;
pub mod scene;
pub mod transform;

pub use app::{ArSession, SessionError};
pub use config::SessionConfig;
pub use domain::{AnchorPose, Color, TransformSnapshot};
pub use input::{GestureEvent, GestureInterpreter, TouchPoint};
pub use placement::{PlaceOutcome, PlacementError, PlacementState, PlacementTracker};
pub use registry::{AssetRegistry, RegistryError};
pub use scene::{AssetHandle, MeshPart};
