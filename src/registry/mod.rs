//! Asset registry and switcher
//!
//! Owns every loaded asset and the pointer to the single active one.
//! Registration happens whenever an external load completes, in any order
//! relative to placement; assets default to hidden and only the active
//! asset becomes visible once the session is placed.

pub mod asset;
pub mod mixer;
mod store;

pub use asset::Asset;
pub use mixer::{AnimationClip, AnimationMixer};
pub use store::{AssetRegistry, RegistryError};
