//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! [scoring]
//! bonus_threshold = 64
//! bonus_multiplier = 1.5
//! ```
//!
//! Every field is optional; missing ones take the defaults shown above.

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("bonus multiplier must be finite and non-negative, got {0}")]
    InvalidMultiplier(f32),
}

/// How merge points become score.
///
/// A move earning at least `bonus_threshold` points is credited
/// `floor(points * bonus_multiplier)`; smaller moves are credited as-is.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringPolicy {
    pub bonus_threshold: u32,
    pub bonus_multiplier: f32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        ScoringPolicy {
            bonus_threshold: defaults::BONUS_THRESHOLD,
            bonus_multiplier: defaults::BONUS_MULTIPLIER,
        }
    }
}

impl ScoringPolicy {
    pub fn applies_bonus(&self, points: u32) -> bool {
        points >= self.bonus_threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub scoring: ScoringPolicy,
}

impl EngineConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let multiplier = self.scoring.bonus_multiplier;
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(ConfigError::InvalidMultiplier(multiplier));
        }
        Ok(())
    }
}

mod defaults {
    pub const BONUS_THRESHOLD: u32 = 64;
    pub const BONUS_MULTIPLIER: f32 = 1.5;
}
