//! Landing classification
//!
//! Decides where the jumper came down relative to the platform it launched
//! from and the platform it was aiming for. Only the coordinate along the
//! current travel axis matters; the other horizontal axis is ignored.
//!
//! # Zones
//!
//! With platform width `W` and jumper width `J`:
//!
//! ```text
//!   |<------------ threshold = (W + J) / 2 ------------>|
//!   |<--- half = W / 2 --->|
//!   centre ............... edge ........... edge + J/2
//!        ON_*                    OVER_*            MISSED beyond
//! ```
//!
//! All comparisons are strict, so a distance exactly equal to `half` is
//! "over" and exactly equal to `threshold` is "missed".
//!
//! # Example
//!
//! ```ignore
//! use jump_block_engine::physics::landing::{LandingClassifier, LandingOutcome};
//!
//! let classifier = LandingClassifier::new(4.0, 1.0);
//! assert_eq!(classifier.classify_coord(-8.0, 0.0, -8.0), LandingOutcome::OnNext);
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::world::track::{Platform, PlatformTrack, TrackError, TravelDirection};

/// Where the jumper landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandingOutcome {
    /// Safely back on the launch platform
    OnCurrent,
    /// Teetering off the edge of the launch platform
    OverCurrent,
    /// Safely on the target platform
    OnNext,
    /// Teetering off the edge of the target platform
    OverNext,
    /// Nowhere near either platform
    Missed,
}

impl LandingOutcome {
    /// Only a clean landing on the target platform scores.
    pub fn is_success(self) -> bool {
        self == LandingOutcome::OnNext
    }

    /// Whether the jumper ends up falling off.
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            LandingOutcome::OverCurrent | LandingOutcome::OverNext | LandingOutcome::Missed
        )
    }
}

/// Classifies landings for fixed platform and jumper widths.
///
/// Widths must be positive; this is not checked here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingClassifier {
    platform_width: f32,
    jumper_width: f32,
}

impl LandingClassifier {
    pub fn new(platform_width: f32, jumper_width: f32) -> Self {
        Self {
            platform_width,
            jumper_width,
        }
    }

    /// Distance from a platform centre within which the jumper still touches it.
    pub fn threshold(&self) -> f32 {
        (self.platform_width + self.jumper_width) / 2.0
    }

    /// Distance from a platform centre within which the jumper stands safely.
    pub fn half_width(&self) -> f32 {
        self.platform_width / 2.0
    }

    /// Classify using raw coordinates on the travel axis.
    pub fn classify_coord(&self, jumper: f32, current: f32, next: f32) -> LandingOutcome {
        let threshold = self.threshold();
        let half = self.half_width();
        let dist_current = (current - jumper).abs();
        let dist_next = (next - jumper).abs();

        if dist_current < threshold {
            if dist_current < half {
                LandingOutcome::OnCurrent
            } else {
                LandingOutcome::OverCurrent
            }
        } else if dist_next < threshold {
            if dist_next < half {
                LandingOutcome::OnNext
            } else {
                LandingOutcome::OverNext
            }
        } else {
            LandingOutcome::Missed
        }
    }

    /// Classify a world-space landing position against a platform pair.
    pub fn classify(
        &self,
        jumper: Vec3,
        current: &Platform,
        next: &Platform,
        direction: TravelDirection,
    ) -> LandingOutcome {
        self.classify_coord(
            direction.coord(jumper),
            direction.coord(current.position),
            direction.coord(next.position),
        )
    }

    /// Classify against the last two platforms of `track`.
    pub fn classify_on_track(
        &self,
        jumper: Vec3,
        track: &PlatformTrack,
    ) -> Result<LandingOutcome, TrackError> {
        let (current, next) = track.pair()?;
        let direction = track.direction().unwrap_or(TravelDirection::Left);
        Ok(self.classify(jumper, current, next, direction))
    }
}
