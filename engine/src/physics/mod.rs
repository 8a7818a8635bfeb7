//! Physics module
//!
//! Landing classification for the jump game. Motion itself is integrated by
//! the jump controller in fixed per-tick steps, not here.
//!
//! # Unit System
//!
//! - Distances in world units (a platform is 4 wide by default)
//! - Speeds in units per tick (one tick = one display frame)
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`landing`] - Where did the jumper come down?

pub mod landing;
pub mod types;

pub use landing::{LandingClassifier, LandingOutcome};
pub use types::Vec3;
