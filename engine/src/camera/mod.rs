//! Camera Module
//!
//! Decides where the camera looks. Projection and placement belong to the
//! renderer; this module only produces the look-at point.

pub mod focus;

pub use focus::{CameraFocus, CameraPlanner, CAMERA_SNAP_DISTANCE, CAMERA_STEP};
