//! Touch input and gesture interpretation
//!
//! Consumes raw touch-point samples from the platform's pointer surface and
//! turns them into semantic scale/rotation events. Has no knowledge of
//! placement, assets or rendering.

pub mod gesture;
pub mod touch;

pub use gesture::{GestureEvent, GestureInterpreter, GestureSession};
pub use touch::TouchPoint;
