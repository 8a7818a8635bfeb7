//! Jump Block Engine Library
//!
//! Core of a charge-and-jump block game: a player holds input to charge,
//! releases to launch the jumper toward the next platform, and the game
//! scores clean landings and tumbles the jumper off on bad ones.
//!
//! Everything here is frame-stepped and windowing-agnostic. Drawing is left
//! to a [`render::SceneSink`] implementation supplied by the caller.
//!
//! # Modules
//!
//! - [`world`] - Platform track generation and pruning
//! - [`player`] - Jump charge/flight state machine and failure tumble
//! - [`physics`] - Landing classification
//! - [`camera`] - Camera focus planning
//! - [`input`] - Mouse/touch press folding
//! - [`render`] - Scene collaborator contract
//!
//! # Example
//!
//! ```ignore
//! use jump_block_engine::game::config::GameConfig;
//! use jump_block_engine::game::session::GameSession;
//! use jump_block_engine::render::NullScene;
//!
//! let mut session = GameSession::new(GameConfig::default(), NullScene);
//! session.add_success_fn(|score| println!("score {score}"));
//!
//! session.input_down();
//! for _ in 0..30 {
//!     session.step()?;
//! }
//! session.input_up();
//! loop {
//!     session.step()?;
//! }
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;
pub mod render;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the types most callers need at crate level
pub use game::config::GameConfig;
pub use game::session::{GameSession, SessionPhase};
pub use render::{NullScene, SceneSink};
