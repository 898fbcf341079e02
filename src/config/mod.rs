//! Configuration module for arview
//!
//! Concentrates the tunables shared between the session and the components
//! it wires together: gesture sensitivity, animation auto-stop and scale
//! clamping.

pub mod session;

pub use session::SessionConfig;
