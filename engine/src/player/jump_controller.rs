//! Jump Controller
//!
//! Owns the jumper block and its charge/launch/flight state machine.
//!
//! # Phases
//!
//! ```text
//!   Idle --press--> Charging --release--> Airborne --y < 1--> Landed(outcome)
//!    ^                                                            |
//!    +------------------ OnNext / OnCurrent ----------------------+
//! ```
//!
//! Every phase advances by one fixed tick per frame; there is no `dt`.
//! The tuning constants below are per-tick values.
//!
//! # Physics Model
//!
//! - Charging flattens the block by 0.01 per tick and adds 0.004 horizontal
//!   and 0.008 vertical speed, until the block is flattened to 0.02.
//! - In flight, vertical speed loses 0.01 per tick. Horizontal speed is
//!   never decayed, so the launch distance is linear in charge time.
//!
//! # Usage
//!
//! ```rust,ignore
//! use jump_block_engine::player::{JumpController, JumpStep};
//!
//! let mut controller = JumpController::new();
//! controller.press();
//! // Each frame:
//! let step = controller.step(direction, |jumper| classifier.classify_on_track(jumper.position, &track))?;
//! ```

use glam::Vec3;

use crate::physics::landing::LandingOutcome;
use crate::world::track::{TrackError, TravelDirection};

/// Vertical scale removed per charging tick
pub const CHARGE_SCALE_STEP: f32 = 0.01;

/// Horizontal speed gained per charging tick
pub const CHARGE_X_SPEED_STEP: f32 = 0.004;

/// Vertical launch speed gained per charging tick
pub const CHARGE_Y_SPEED_STEP: f32 = 0.008;

/// Charging stops once the vertical scale is no longer above this
pub const MIN_CHARGE_SCALE: f32 = 0.02;

/// Vertical scale restored per flight tick
pub const SCALE_RECOVERY_STEP: f32 = 0.1;

/// Vertical speed lost per flight tick
pub const FLIGHT_GRAVITY: f32 = 0.01;

/// Height of the jumper's base when standing on a platform
pub const REST_HEIGHT: f32 = 1.0;

/// The player-controlled block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jumper {
    /// Base centre of the block
    pub position: Vec3,
    /// Vertical scale, in (0, 1]; 1 = uncompressed
    pub scale_y: f32,
    /// Euler rotation in radians; only x and z are used (tumbling)
    pub rotation: Vec3,
}

impl Default for Jumper {
    fn default() -> Self {
        Self::at_rest()
    }
}

impl Jumper {
    /// Fresh jumper standing on the origin platform.
    pub fn at_rest() -> Self {
        Self {
            position: Vec3::new(0.0, REST_HEIGHT, 0.0),
            scale_y: 1.0,
            rotation: Vec3::ZERO,
        }
    }
}

/// Speed accumulated while the press is held.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChargeState {
    /// Horizontal speed along the travel axis, per tick
    pub x_speed: f32,
    /// Vertical speed, per tick
    pub y_speed: f32,
}

impl ChargeState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpPhase {
    /// Standing on a platform, ready for a press
    Idle,
    /// Press held, building speed
    Charging,
    /// Released, in flight
    Airborne,
    /// Came down off a platform; input is locked until [`JumpController::reset`]
    Landed(LandingOutcome),
}

/// What a single [`JumpController::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpStep {
    /// Nothing to do this tick
    Idle,
    /// Still charging (possibly already at the scale floor)
    Charging,
    /// Moved through the air
    Airborne,
    /// Touched down this tick with the given outcome
    Landed(LandingOutcome),
}

/// Charge/launch/flight state machine for the jumper.
#[derive(Debug, Clone)]
pub struct JumpController {
    jumper: Jumper,
    charge: ChargeState,
    phase: JumpPhase,
}

impl Default for JumpController {
    fn default() -> Self {
        Self {
            jumper: Jumper::at_rest(),
            charge: ChargeState::default(),
            phase: JumpPhase::Idle,
        }
    }
}

impl JumpController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jumper(&self) -> &Jumper {
        &self.jumper
    }

    /// Mutable access for the tumble animation, which poses the same block.
    pub(crate) fn jumper_mut(&mut self) -> &mut Jumper {
        &mut self.jumper
    }

    pub fn charge(&self) -> &ChargeState {
        &self.charge
    }

    pub fn phase(&self) -> JumpPhase {
        self.phase
    }

    /// Input pressed. Only starts a charge from `Idle`.
    pub fn press(&mut self) -> bool {
        if self.phase != JumpPhase::Idle {
            return false;
        }
        self.phase = JumpPhase::Charging;
        true
    }

    /// Input released. Only launches from `Charging`.
    pub fn release(&mut self) -> bool {
        if self.phase != JumpPhase::Charging {
            return false;
        }
        log::debug!(
            "launch: x_speed={:.3} y_speed={:.3} scale={:.2}",
            self.charge.x_speed,
            self.charge.y_speed,
            self.jumper.scale_y
        );
        self.phase = JumpPhase::Airborne;
        true
    }

    /// Replace the jumper with a fresh one at the rest pose and clear all state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance one tick.
    ///
    /// `classify` is called exactly once, on the tick the jumper touches
    /// down, with the jumper already snapped back to rest height.
    pub fn step<F>(&mut self, direction: TravelDirection, classify: F) -> Result<JumpStep, TrackError>
    where
        F: FnOnce(&Jumper) -> Result<LandingOutcome, TrackError>,
    {
        match self.phase {
            JumpPhase::Idle | JumpPhase::Landed(_) => Ok(JumpStep::Idle),
            JumpPhase::Charging => {
                self.charge_tick();
                Ok(JumpStep::Charging)
            }
            JumpPhase::Airborne => {
                if self.jumper.position.y >= REST_HEIGHT {
                    self.flight_tick(direction);
                    return Ok(JumpStep::Airborne);
                }

                self.touch_down();
                let outcome = classify(&self.jumper)?;
                self.phase = if outcome.is_failure() {
                    JumpPhase::Landed(outcome)
                } else {
                    JumpPhase::Idle
                };
                Ok(JumpStep::Landed(outcome))
            }
        }
    }

    fn charge_tick(&mut self) {
        if self.jumper.scale_y > MIN_CHARGE_SCALE {
            self.jumper.scale_y -= CHARGE_SCALE_STEP;
            self.charge.x_speed += CHARGE_X_SPEED_STEP;
            self.charge.y_speed += CHARGE_Y_SPEED_STEP;
        }
    }

    fn flight_tick(&mut self, direction: TravelDirection) {
        if self.jumper.scale_y < 1.0 {
            self.jumper.scale_y = (self.jumper.scale_y + SCALE_RECOVERY_STEP).min(1.0);
        }
        direction.advance(&mut self.jumper.position, self.charge.x_speed);
        self.charge.y_speed -= FLIGHT_GRAVITY;
        self.jumper.position.y += self.charge.y_speed;
    }

    fn touch_down(&mut self) {
        self.jumper.scale_y = 1.0;
        self.jumper.position.y = REST_HEIGHT;
        self.charge.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_next(_: &Jumper) -> Result<LandingOutcome, TrackError> {
        Ok(LandingOutcome::OnNext)
    }

    fn charge_for(controller: &mut JumpController, ticks: usize) {
        controller.press();
        for _ in 0..ticks {
            controller.step(TravelDirection::Left, on_next).unwrap();
        }
    }

    #[test]
    fn test_tuning_constants() {
        assert_eq!(CHARGE_SCALE_STEP, 0.01);
        assert_eq!(CHARGE_X_SPEED_STEP, 0.004);
        assert_eq!(CHARGE_Y_SPEED_STEP, 0.008);
        assert_eq!(MIN_CHARGE_SCALE, 0.02);
        assert_eq!(SCALE_RECOVERY_STEP, 0.1);
        assert_eq!(FLIGHT_GRAVITY, 0.01);
    }

    #[test]
    fn test_default_controller() {
        let controller = JumpController::new();
        assert_eq!(controller.phase(), JumpPhase::Idle);
        assert_eq!(*controller.jumper(), Jumper::at_rest());
        assert_eq!(*controller.charge(), ChargeState::default());
    }

    #[test]
    fn test_charge_is_linear_in_ticks() {
        let mut controller = JumpController::new();
        charge_for(&mut controller, 30);
        assert_eq!(controller.phase(), JumpPhase::Charging);
        assert!((controller.jumper().scale_y - 0.7).abs() < 1e-4);
        assert!((controller.charge().x_speed - 0.12).abs() < 1e-4);
        assert!((controller.charge().y_speed - 0.24).abs() < 1e-4);
    }

    #[test]
    fn test_charge_stops_at_scale_floor() {
        let mut controller = JumpController::new();
        charge_for(&mut controller, 500);
        let scale = controller.jumper().scale_y;
        assert!(scale <= MIN_CHARGE_SCALE + 1e-4);
        assert!(scale > 0.0);
        // ~98 effective ticks
        let ticks = (controller.charge().x_speed / CHARGE_X_SPEED_STEP).round();
        assert!((97.0..=99.0).contains(&ticks));
        assert_eq!(controller.phase(), JumpPhase::Charging);
    }

    #[test]
    fn test_press_ignored_unless_idle() {
        let mut controller = JumpController::new();
        assert!(controller.press());
        assert!(!controller.press());
        assert!(controller.release());
        assert!(!controller.press());
        assert!(!controller.release());
    }

    #[test]
    fn test_release_without_press_does_nothing() {
        let mut controller = JumpController::new();
        assert!(!controller.release());
        assert_eq!(controller.phase(), JumpPhase::Idle);
    }

    #[test]
    fn test_flight_keeps_horizontal_speed() {
        let mut controller = JumpController::new();
        charge_for(&mut controller, 20);
        controller.release();
        let x_speed = controller.charge().x_speed;
        let start = controller.jumper().position;

        controller.step(TravelDirection::Left, on_next).unwrap();
        controller.step(TravelDirection::Left, on_next).unwrap();

        assert_eq!(controller.charge().x_speed, x_speed);
        let moved = start.x - controller.jumper().position.x;
        assert!((moved - 2.0 * x_speed).abs() < 1e-5);
        assert_eq!(controller.jumper().position.z, start.z);
    }

    #[test]
    fn test_flight_restores_scale() {
        let mut controller = JumpController::new();
        charge_for(&mut controller, 50);
        controller.release();
        controller.step(TravelDirection::Right, on_next).unwrap();
        assert!((controller.jumper().scale_y - 0.6).abs() < 1e-4);
        for _ in 0..10 {
            controller.step(TravelDirection::Right, on_next).unwrap();
        }
        assert_eq!(controller.jumper().scale_y, 1.0);
    }

    #[test]
    fn test_landing_resets_and_classifies_once() {
        let mut controller = JumpController::new();
        charge_for(&mut controller, 40);
        controller.release();

        let mut calls = 0;
        let mut landed = None;
        for _ in 0..1000 {
            let step = controller
                .step(TravelDirection::Right, |_| {
                    calls += 1;
                    Ok(LandingOutcome::OnNext)
                })
                .unwrap();
            if let JumpStep::Landed(outcome) = step {
                landed = Some(outcome);
                break;
            }
        }

        assert_eq!(landed, Some(LandingOutcome::OnNext));
        assert_eq!(calls, 1);
        assert_eq!(controller.phase(), JumpPhase::Idle);
        assert_eq!(controller.jumper().position.y, REST_HEIGHT);
        assert_eq!(controller.jumper().scale_y, 1.0);
        assert_eq!(*controller.charge(), ChargeState::default());
        assert!(controller.jumper().position.z < 0.0);
        assert_eq!(controller.jumper().position.x, 0.0);
    }

    #[test]
    fn test_failed_landing_locks_input() {
        let mut controller = JumpController::new();
        controller.press();
        controller.release();
        let mut last = JumpStep::Idle;
        for _ in 0..5 {
            last = controller
                .step(TravelDirection::Left, |_| Ok(LandingOutcome::Missed))
                .unwrap();
            if matches!(last, JumpStep::Landed(_)) {
                break;
            }
        }
        assert_eq!(last, JumpStep::Landed(LandingOutcome::Missed));
        assert_eq!(controller.phase(), JumpPhase::Landed(LandingOutcome::Missed));
        assert!(!controller.press());

        controller.reset();
        assert!(controller.press());
    }

    #[test]
    fn test_classify_error_propagates() {
        let mut controller = JumpController::new();
        controller.press();
        controller.release();
        let mut result = Ok(JumpStep::Idle);
        for _ in 0..5 {
            result = controller.step(TravelDirection::Left, |_| {
                Err(TrackError::InsufficientPlatforms { available: 1 })
            });
            if result.is_err() {
                break;
            }
        }
        assert_eq!(result, Err(TrackError::InsufficientPlatforms { available: 1 }));
    }
}
