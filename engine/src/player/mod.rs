//! Player Module
//!
//! The jumper block and everything that moves it.
//!
//! # Components
//!
//! - [`JumpController`] - Charge, launch and flight state machine
//!   - Owns the [`Jumper`] and its [`ChargeState`]
//! - [`FailureAnimator`] - Tip-over and fall after a bad landing
//! - [`FallDirection`] - Which way a failed landing tumbles

pub mod jump_controller;
pub mod tumble;

pub use jump_controller::{
    ChargeState, JumpController, JumpPhase, JumpStep, Jumper,
    CHARGE_SCALE_STEP, CHARGE_X_SPEED_STEP, CHARGE_Y_SPEED_STEP,
    FLIGHT_GRAVITY, MIN_CHARGE_SCALE, REST_HEIGHT, SCALE_RECOVERY_STEP,
};
pub use tumble::{FailureAnimator, FallDirection, TumbleStep, FALL_SPEED, TUMBLE_STEP};
