//! Platform Track Module
//!
//! Maintains the rolling sequence of landing platforms.
//!
//! ## Layout
//! The first platform sits at the origin. Every later platform is placed
//! behind the previous one along a single axis:
//! - `Left`  -> offset along -X
//! - `Right` -> offset along -Z
//!
//! The offset distance is drawn from [6, 10). Only the newest
//! [`MAX_PLATFORMS`] platforms are kept; older ones are evicted FIFO and
//! handed back to the caller so they can be removed from the scene.

use std::collections::VecDeque;

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Maximum number of platforms kept alive at once
pub const MAX_PLATFORMS: usize = 6;

/// Minimum spawn distance between consecutive platforms (inclusive)
pub const MIN_SPAWN_DISTANCE: f32 = 6.0;

/// Maximum spawn distance between consecutive platforms (exclusive)
pub const MAX_SPAWN_DISTANCE: f32 = 10.0;

/// Direction the track extends in, picked per spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelDirection {
    /// Track extends along -X
    Left,
    /// Track extends along -Z
    Right,
}

impl TravelDirection {
    /// Coordinate of `position` on this direction's axis.
    pub fn coord(self, position: Vec3) -> f32 {
        match self {
            TravelDirection::Left => position.x,
            TravelDirection::Right => position.z,
        }
    }

    /// Move `position` forward along the track by `distance`.
    ///
    /// "Forward" is the negative axis direction, matching how platforms spawn.
    pub fn advance(self, position: &mut Vec3, distance: f32) {
        match self {
            TravelDirection::Left => position.x -= distance,
            TravelDirection::Right => position.z -= distance,
        }
    }
}

/// A single landing block.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Monotonic id, unique within a track's lifetime (survives `clear`)
    pub id: u64,
    /// Centre of the block; y is always 0
    pub position: Vec3,
}

/// Errors raised by queries that need both the current and next platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackError {
    /// Fewer than two platforms are on the track.
    InsufficientPlatforms { available: usize },
}

impl std::fmt::Display for TrackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackError::InsufficientPlatforms { available } => {
                write!(f, "need at least 2 platforms, track has {available}")
            }
        }
    }
}

impl std::error::Error for TrackError {}

/// Result of a single [`PlatformTrack::spawn`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnResult {
    /// The platform that was appended
    pub spawned: Platform,
    /// The oldest platform, if it was evicted to stay within [`MAX_PLATFORMS`]
    pub evicted: Option<Platform>,
}

/// Rolling, bounded sequence of platforms (oldest first, newest last).
#[derive(Clone, Debug)]
pub struct PlatformTrack {
    platforms: VecDeque<Platform>,
    direction: Option<TravelDirection>,
    next_id: u64,
    rng: ChaCha8Rng,
}

impl Default for PlatformTrack {
    fn default() -> Self {
        Self::from_rng(ChaCha8Rng::from_os_rng())
    }
}

impl PlatformTrack {
    /// Create an empty track seeded from OS entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty track with a reproducible layout.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            platforms: VecDeque::with_capacity(MAX_PLATFORMS + 1),
            direction: None,
            next_id: 0,
            rng,
        }
    }

    /// Append one platform, evicting the oldest if the track is full.
    pub fn spawn(&mut self) -> SpawnResult {
        let position = match self.platforms.back() {
            None => Vec3::ZERO,
            Some(previous) => {
                let direction = if self.rng.random_bool(0.5) {
                    TravelDirection::Left
                } else {
                    TravelDirection::Right
                };
                let distance = self.rng.random_range(MIN_SPAWN_DISTANCE..MAX_SPAWN_DISTANCE);
                let mut position = previous.position;
                direction.advance(&mut position, distance);
                self.direction = Some(direction);
                position
            }
        };

        let spawned = Platform {
            id: self.next_id,
            position,
        };
        self.next_id += 1;
        self.platforms.push_back(spawned);

        let evicted = if self.platforms.len() > MAX_PLATFORMS {
            self.platforms.pop_front()
        } else {
            None
        };

        log::debug!(
            "spawned platform #{} at ({:.2}, {:.2}) heading {:?}",
            spawned.id,
            spawned.position.x,
            spawned.position.z,
            self.direction
        );
        if let Some(old) = evicted {
            log::debug!("evicted platform #{}", old.id);
        }

        SpawnResult { spawned, evicted }
    }

    /// Platform the jumper is standing on (second to last).
    pub fn current(&self) -> Result<&Platform, TrackError> {
        let len = self.platforms.len();
        if len < 2 {
            return Err(TrackError::InsufficientPlatforms { available: len });
        }
        Ok(&self.platforms[len - 2])
    }

    /// Platform the jumper is jumping toward (last).
    pub fn next(&self) -> Result<&Platform, TrackError> {
        let len = self.platforms.len();
        if len < 2 {
            return Err(TrackError::InsufficientPlatforms { available: len });
        }
        Ok(&self.platforms[len - 1])
    }

    /// Both ends of the active pair, `(current, next)`.
    pub fn pair(&self) -> Result<(&Platform, &Platform), TrackError> {
        Ok((self.current()?, self.next()?))
    }

    /// Direction chosen by the most recent spawn.
    pub fn direction(&self) -> Option<TravelDirection> {
        self.direction
    }

    /// Remove every platform, returning them oldest first.
    pub fn clear(&mut self) -> Vec<Platform> {
        self.direction = None;
        self.platforms.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Iterate platforms oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }
}
