//! Physics type re-exports from glam
//!
//! Positions, rotations and camera points all use glam's `Vec3`.

pub use glam::Vec3;
