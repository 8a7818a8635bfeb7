//! Input Module
//!
//! Platform-agnostic pointer handling. Decoupled from any specific
//! windowing system so the shell can translate its own events.
//!
//! # Example
//!
//! ```rust,ignore
//! use jump_block_engine::input::{MouseButton, PointerState, PressEdge};
//!
//! let mut pointer = PointerState::new();
//! match pointer.mouse_button(MouseButton::Left, true) {
//!     Some(PressEdge::Down) => session.input_down(),
//!     Some(PressEdge::Up) => session.input_up(),
//!     None => {}
//! }
//! ```

pub mod pointer;

pub use pointer::{MouseButton, PointerState, PressEdge};
