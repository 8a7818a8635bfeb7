//! Config Module
//!
//! Centralized configuration for block sizes, palette and layout seed.

pub mod game_config;

pub use game_config::{BlockSize, ConfigError, GameConfig, Palette};
