//! Domain logic and core data structures
//!
//! Pure value types shared across the crate, independent of the tracking
//! service, the renderer and the session wiring.

pub mod pose;
pub mod transform;

pub use pose::AnchorPose;
pub use transform::{Color, TransformSnapshot};
