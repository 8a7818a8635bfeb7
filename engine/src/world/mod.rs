//! World Module
//!
//! The platform track the jumper travels along.
//!
//! ## Layout
//! Platforms sit on the ground plane (y = 0) and march away from the origin
//! along -X or -Z, one axis per step.

pub mod track;

pub use track::{
    Platform, PlatformTrack, SpawnResult, TrackError, TravelDirection,
    MAX_PLATFORMS, MIN_SPAWN_DISTANCE, MAX_SPAWN_DISTANCE,
};
