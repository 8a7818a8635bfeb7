//! Game Module
//!
//! Session orchestration and configuration built on top of the engine.

pub mod config;
pub mod session;

pub use config::{ConfigError, GameConfig};
pub use session::{GameSession, SessionPhase};
