//! Game Configuration
//!
//! Block dimensions, ground height, palette and RNG seed for a session.
//! `Default` returns the tuned values the gameplay constants were balanced
//! against; a JSON file may override any subset of fields.
//!
//! ```json
//! { "platform": { "width": 5.0, "height": 2.0, "depth": 5.0 }, "seed": 1234 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Size of an axis-aligned block. All three extents are required in JSON.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockSize {
    /// Extent along x (also used along the travel axis for landing checks)
    pub width: f32,
    /// Extent along y
    pub height: f32,
    /// Extent along z
    pub depth: f32,
}

impl BlockSize {
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

/// Colours handed to the renderer as 0xRRGGBB.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: u32,
    pub platform: u32,
    pub jumper: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: 0xfefefe,
            platform: 0xbebebe,
            jumper: 0xe0c738,
        }
    }
}

/// Central configuration for a jump session.
///
/// Widths must be positive. The core does not re-check this; call
/// [`GameConfig::validate`] when the values come from outside.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Landing platform block
    pub platform: BlockSize,
    /// Player block
    pub jumper: BlockSize,
    /// Y of the ground plane failed jumps fall to
    pub ground: f32,
    pub palette: Palette,
    /// Ask the renderer for debug helpers (axes)
    pub debug: bool,
    /// Fixed seed for the platform layout; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            platform: BlockSize::new(4.0, 2.0, 4.0),
            jumper: BlockSize::new(1.0, 2.0, 1.0),
            ground: -1.0,
            palette: Palette::default(),
            debug: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        log::info!("loaded game config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Fix the platform layout seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the preconditions the core relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, size) in [("platform", &self.platform), ("jumper", &self.jumper)] {
            let dims = [size.width, size.height, size.depth];
            if dims.iter().any(|d| !d.is_finite() || *d <= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} dimensions must be positive, got {}x{}x{}",
                    size.width, size.height, size.depth
                )));
            }
        }
        if !self.ground.is_finite() {
            return Err(ConfigError::Invalid("ground must be finite".to_string()));
        }
        if self.jumper.width >= self.platform.width {
            log::warn!(
                "jumper width {} is not smaller than platform width {}; safe landings are impossible",
                self.jumper.width,
                self.platform.width
            );
        }
        Ok(())
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur while loading a [`GameConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    IoError(std::io::Error),
    /// Config file is not valid JSON for this schema.
    JsonError(serde_json::Error),
    /// Values parsed but break a precondition.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::JsonError(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.platform, BlockSize::new(4.0, 2.0, 4.0));
        assert_eq!(config.jumper, BlockSize::new(1.0, 2.0, 1.0));
        assert_eq!(config.ground, -1.0);
        assert_eq!(config.palette.jumper, 0xe0c738);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json_str(
            r#"{ "platform": { "width": 5.0, "height": 2.0, "depth": 5.0 }, "seed": 9 }"#,
        )
        .unwrap();
        assert_eq!(config.platform.width, 5.0);
        assert_eq!(config.ground, -1.0);
        assert_eq!(config.jumper, GameConfig::default().jumper);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_rejects_non_positive_width() {
        let err = GameConfig::from_json_str(r#"{ "jumper": { "width": -1.0, "height": 2.0, "depth": 1.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::JsonError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_json_round_trip_of_defaults() {
        let json = serde_json::to_string(&GameConfig::default()).unwrap();
        assert_eq!(GameConfig::from_json_str(&json).unwrap(), GameConfig::default());
    }
}
