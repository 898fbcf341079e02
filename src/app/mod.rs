//! Session orchestration layer
//!
//! Wires placement, gestures, the asset registry and transform routing
//! into one explicit context object per viewing session.

pub mod session;

pub use session::{ArSession, SessionError};
