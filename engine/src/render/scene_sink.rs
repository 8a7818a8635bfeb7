//! Scene Sink
//!
//! The contract between the game core and whatever draws it. The core never
//! touches meshes or materials; it only tells the sink which blocks exist,
//! where the jumper is posed, where the camera should look, and when a
//! frame is complete.

use glam::Vec3;

use crate::game::config::GameConfig;
use crate::player::Jumper;
use crate::world::track::Platform;

/// Receives scene updates from a [`GameSession`](crate::game::session::GameSession).
///
/// Every method has an empty default so headless sinks only implement what
/// they care about.
pub trait SceneSink {
    /// Block sizes, palette and debug helpers for the session. Sent once
    /// before any other call.
    fn configure(&mut self, _config: &GameConfig) {}

    /// A platform entered the track.
    fn add_platform(&mut self, _platform: &Platform) {}

    /// A platform left the track (evicted or cleared on restart).
    fn remove_platform(&mut self, _platform: &Platform) {}

    /// A fresh jumper was created.
    fn add_jumper(&mut self, _jumper: &Jumper) {}

    /// The jumper was destroyed (restart).
    fn remove_jumper(&mut self) {}

    /// The jumper's pose changed this frame.
    fn update_jumper(&mut self, _jumper: &Jumper) {}

    /// Point the camera at `target`.
    fn look_at(&mut self, _target: Vec3) {}

    /// Present the frame.
    fn render(&mut self) {}
}

/// Sink that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScene;

impl SceneSink for NullScene {}
