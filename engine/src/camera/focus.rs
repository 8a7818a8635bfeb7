//! Camera Focus Planner
//!
//! Tracks the point the camera looks at. The target is always the midpoint
//! of the current and next platform; the focus eases toward it by a fixed
//! step per tick, one axis at a time, and snaps once it is close.
//!
//! Unlike the free-flying controllers, this never finishes: the caller
//! steps it every frame and hands the result to the renderer's look-at.

use glam::Vec3;

use crate::world::track::{PlatformTrack, TrackError, TravelDirection};

/// Distance the focus moves per tick
pub const CAMERA_STEP: f32 = 0.1;

/// Snap to the target once within this distance on the moving axis
pub const CAMERA_SNAP_DISTANCE: f32 = 0.05;

/// Current and target look-at points. Both lie on the ground plane (y = 0).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraFocus {
    pub current: Vec3,
    pub target: Vec3,
}

impl CameraFocus {
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

/// Plans the camera's focal point from the platform track.
#[derive(Debug, Clone, Default)]
pub struct CameraPlanner {
    focus: CameraFocus,
}

impl CameraPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> &CameraFocus {
        &self.focus
    }

    /// Point the camera should look at this frame.
    pub fn look_at(&self) -> Vec3 {
        self.focus.current
    }

    /// Return both points to the origin.
    pub fn reset(&mut self) {
        self.focus = CameraFocus::default();
    }

    /// Aim at the midpoint between the track's current and next platform.
    pub fn retarget(&mut self, track: &PlatformTrack) -> Result<Vec3, TrackError> {
        let (current, next) = track.pair()?;
        let mid = (current.position + next.position) / 2.0;
        self.focus.target = Vec3::new(mid.x, 0.0, mid.z);
        Ok(self.focus.target)
    }

    /// Ease one tick toward the target.
    ///
    /// `direction` is the most recent spawn direction; its axis is preferred.
    /// When that axis has caught up, any lag left on the other axis is
    /// worked off instead. Only one axis moves per tick.
    pub fn step(&mut self, direction: Option<TravelDirection>) -> Vec3 {
        let preferred = direction.unwrap_or(TravelDirection::Left);
        let other = match preferred {
            TravelDirection::Left => TravelDirection::Right,
            TravelDirection::Right => TravelDirection::Left,
        };

        for axis in [preferred, other] {
            let lag = axis.coord(self.focus.target) - axis.coord(self.focus.current);
            if lag != 0.0 {
                let remaining = Self::ease_axis(lag);
                match axis {
                    TravelDirection::Left => self.focus.current.x = self.focus.target.x - remaining,
                    TravelDirection::Right => self.focus.current.z = self.focus.target.z - remaining,
                }
                break;
            }
        }

        self.focus.current
    }

    /// Given the signed lag on one axis, return the lag left after this tick.
    fn ease_axis(lag: f32) -> f32 {
        if lag.abs() < CAMERA_SNAP_DISTANCE {
            return 0.0;
        }
        let remaining = lag - lag.signum() * CAMERA_STEP.min(lag.abs());
        if remaining.abs() < CAMERA_SNAP_DISTANCE {
            0.0
        } else {
            remaining
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(planner: &mut CameraPlanner, direction: Option<TravelDirection>) -> usize {
        let mut ticks = 0;
        while !planner.focus().is_settled() && ticks < 10_000 {
            planner.step(direction);
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_golden_constants() {
        assert_eq!(CAMERA_STEP, 0.1);
        assert_eq!(CAMERA_SNAP_DISTANCE, 0.05);
    }

    #[test]
    fn test_retarget_is_midpoint() {
        let mut track = PlatformTrack::with_seed(11);
        track.spawn();
        track.spawn();
        let mut planner = CameraPlanner::new();
        let target = planner.retarget(&track).unwrap();
        let next = track.next().unwrap().position;
        assert_eq!(target, Vec3::new(next.x / 2.0, 0.0, next.z / 2.0));
    }

    #[test]
    fn test_retarget_needs_pair() {
        let track = PlatformTrack::with_seed(11);
        let mut planner = CameraPlanner::new();
        assert_eq!(
            planner.retarget(&track),
            Err(TrackError::InsufficientPlatforms { available: 0 })
        );
    }

    #[test]
    fn test_eases_one_step_per_tick() {
        let mut planner = CameraPlanner::new();
        planner.focus.target = Vec3::new(-4.0, 0.0, 0.0);
        let after = planner.step(Some(TravelDirection::Left));
        assert!((after.x + CAMERA_STEP).abs() < 1e-6);
        assert_eq!(after.z, 0.0);

        let ticks = settle(&mut planner, Some(TravelDirection::Left));
        assert!((38..=40).contains(&ticks));
        assert_eq!(planner.look_at(), planner.focus().target);
    }

    #[test]
    fn test_only_one_axis_moves_per_tick() {
        let mut planner = CameraPlanner::new();
        planner.focus.target = Vec3::new(-1.0, 0.0, -1.0);
        let first = planner.step(Some(TravelDirection::Right));
        assert_eq!(first.x, 0.0);
        assert!(first.z < 0.0);

        settle(&mut planner, Some(TravelDirection::Right));
        assert_eq!(planner.look_at(), Vec3::new(-1.0, 0.0, -1.0));
    }

    #[test]
    fn test_snaps_when_close() {
        let mut planner = CameraPlanner::new();
        planner.focus.target = Vec3::new(0.0, 0.0, -0.04);
        planner.step(Some(TravelDirection::Right));
        assert!(planner.focus().is_settled());
    }

    #[test]
    fn test_settled_focus_stays_put() {
        let mut planner = CameraPlanner::new();
        for _ in 0..5 {
            assert_eq!(planner.step(None), Vec3::ZERO);
        }
    }
}
