//! Comparison configuration.
//!
//! The only tunable is the pairer's similarity threshold. It can be given
//! in a TOML document and overridden through the environment:
//!
//! ```toml
//! similarity_threshold = 0.8
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{ProvenanceError, Result};
use crate::pairing::DEFAULT_SIMILARITY_THRESHOLD;

/// Environment variable overriding `similarity_threshold`
pub const THRESHOLD_ENV_VAR: &str = "PROVTRACK_SIMILARITY_THRESHOLD";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonConfig {
    /// Basename similarity a file pair must strictly exceed to be paired
    #[serde(default = "default_threshold")]
    pub similarity_threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl ComparisonConfig {
    /// # Errors
    ///
    /// Returns `InvalidThreshold` unless `threshold` is finite and in `[0, 1]`.
    pub fn with_threshold(threshold: f64) -> Result<Self> {
        let config = Self {
            similarity_threshold: threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `InvalidThreshold` unless the threshold is finite and in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let t = self.similarity_threshold;
        if t.is_finite() && (0.0..=1.0).contains(&t) {
            Ok(())
        } else {
            Err(ProvenanceError::InvalidThreshold { value: t })
        }
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for malformed TOML or unknown keys, and
    /// `InvalidThreshold` for an out-of-range threshold.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigIo` if the file cannot be read, otherwise as
    /// [`ComparisonConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ProvenanceError::ConfigIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Apply [`THRESHOLD_ENV_VAR`] if it is set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the variable is not a number and
    /// `InvalidThreshold` if it is out of range.
    pub fn with_env_overrides(self) -> Result<Self> {
        let value = std::env::var(THRESHOLD_ENV_VAR).ok();
        self.apply_threshold_override(value.as_deref())
    }

    fn apply_threshold_override(mut self, value: Option<&str>) -> Result<Self> {
        if let Some(raw) = value {
            self.similarity_threshold =
                raw.trim()
                    .parse::<f64>()
                    .map_err(|e| ProvenanceError::InvalidConfig {
                        reason: format!("{} must be a number, got {:?}: {}", THRESHOLD_ENV_VAR, raw, e),
                    })?;
            self.validate()?;
        }
        Ok(self)
    }
}
