//! Render Module
//!
//! The game core does not draw. It reports scene changes through
//! [`SceneSink`], which a renderer (or a logger, or a test) implements.

pub mod scene_sink;

pub use scene_sink::{NullScene, SceneSink};
