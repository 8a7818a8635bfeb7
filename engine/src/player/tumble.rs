//! Failure Tumble Animation
//!
//! When a landing leaves the jumper hanging off an edge (or nowhere near a
//! platform), the block tips over and drops to the ground. The animation is
//! a strict two-stage sequence: rotate until the tip limit, then fall.
//!
//! # Directions
//!
//! | Direction      | Axis | Rotation        | Rests at                  |
//! |----------------|------|-----------------|---------------------------|
//! | `LeftTop`      | z    | +0.1 up to π/2  | ground + jumper width / 2 |
//! | `LeftBottom`   | z    | -0.1 down to -π/2 | ground + jumper width / 2 |
//! | `RightTop`     | x    | -0.1 down to -π/2 | ground + jumper width / 2 |
//! | `RightBottom`  | x    | +0.1 up to π/2  | ground + jumper width / 2 |
//! | `None`         | -    | none            | ground                    |

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::jump_controller::Jumper;
use crate::physics::landing::LandingOutcome;
use crate::world::track::TravelDirection;

/// Rotation applied per tumbling tick (radians)
pub const TUMBLE_STEP: f32 = 0.1;

/// Drop per falling tick
pub const FALL_SPEED: f32 = 0.2;

/// Which way the jumper tips over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FallDirection {
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
    /// Straight drop, no tipping
    None,
}

impl FallDirection {
    /// Pick the tumble for a landing, or `None` if the landing needs no animation.
    ///
    /// `jumper_coord` and `next_coord` are positions on the travel axis.
    pub fn from_landing(
        outcome: LandingOutcome,
        travel: TravelDirection,
        jumper_coord: f32,
        next_coord: f32,
    ) -> Option<Self> {
        let direction = match (outcome, travel) {
            (LandingOutcome::OverNext, TravelDirection::Left) => {
                if jumper_coord > next_coord {
                    FallDirection::LeftBottom
                } else {
                    FallDirection::LeftTop
                }
            }
            (LandingOutcome::OverNext, TravelDirection::Right) => {
                if jumper_coord > next_coord {
                    FallDirection::RightBottom
                } else {
                    FallDirection::RightTop
                }
            }
            (LandingOutcome::OverCurrent, TravelDirection::Left) => FallDirection::LeftTop,
            (LandingOutcome::OverCurrent, TravelDirection::Right) => FallDirection::RightTop,
            (LandingOutcome::Missed, _) => FallDirection::None,
            (LandingOutcome::OnCurrent | LandingOutcome::OnNext, _) => return None,
        };
        Some(direction)
    }

    /// Left tumbles rotate about z, everything else about x.
    pub fn axis(self) -> Vec3 {
        match self {
            FallDirection::LeftTop | FallDirection::LeftBottom => Vec3::Z,
            _ => Vec3::X,
        }
    }

    /// Signed rotation per tick; zero for a straight drop.
    pub fn rotation_step(self) -> f32 {
        match self {
            FallDirection::LeftTop | FallDirection::RightBottom => TUMBLE_STEP,
            FallDirection::LeftBottom | FallDirection::RightTop => -TUMBLE_STEP,
            FallDirection::None => 0.0,
        }
    }
}

/// What a single [`FailureAnimator::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TumbleStep {
    Rotating,
    Falling,
    /// Jumper is at rest on the ground; repeated steps keep returning this
    Ended,
}

/// Drives the jumper through a [`FallDirection`] one tick at a time.
#[derive(Debug, Clone)]
pub struct FailureAnimator {
    direction: FallDirection,
    target_height: f32,
    ended: bool,
}

impl FailureAnimator {
    /// `ground` is the ground plane height, `jumper_width` the block's width.
    pub fn new(direction: FallDirection, ground: f32, jumper_width: f32) -> Self {
        let target_height = match direction {
            FallDirection::None => ground,
            _ => ground + jumper_width / 2.0,
        };
        Self {
            direction,
            target_height,
            ended: false,
        }
    }

    pub fn direction(&self) -> FallDirection {
        self.direction
    }

    pub fn target_height(&self) -> f32 {
        self.target_height
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Advance one tick: rotate if the tip limit is not yet reached,
    /// otherwise fall, otherwise end.
    pub fn step(&mut self, jumper: &mut Jumper) -> TumbleStep {
        if self.ended {
            return TumbleStep::Ended;
        }

        if self.still_tipping(jumper) {
            *self.tilt_mut(jumper) += self.direction.rotation_step();
            TumbleStep::Rotating
        } else if jumper.position.y > self.target_height {
            jumper.position.y = (jumper.position.y - FALL_SPEED).max(self.target_height);
            TumbleStep::Falling
        } else {
            self.ended = true;
            log::debug!("tumble {:?} finished", self.direction);
            TumbleStep::Ended
        }
    }

    fn tilt_mut<'a>(&self, jumper: &'a mut Jumper) -> &'a mut f32 {
        match self.direction {
            FallDirection::LeftTop | FallDirection::LeftBottom => &mut jumper.rotation.z,
            _ => &mut jumper.rotation.x,
        }
    }

    // Limit is checked against the angle before this tick's increment.
    fn still_tipping(&self, jumper: &Jumper) -> bool {
        let angle = jumper.rotation.dot(self.direction.axis());
        match self.direction.rotation_step() {
            s if s > 0.0 => angle < FRAC_PI_2,
            s if s < 0.0 => angle > -FRAC_PI_2,
            _ => false,
        }
    }
}
