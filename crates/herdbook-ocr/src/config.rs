//! Configuration for herdbook-ocr
//!
//! Thresholds used by matching, reconciliation and post-processing. The
//! defaults are the values the review workflow is calibrated against; the
//! confidence ladder of the matching cascade itself is fixed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, HerdbookError, Result};

/// Engine-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HerdbookConfig {
    /// Registry matching
    pub matching: MatchConfig,
    /// Confidence buckets for display
    pub levels: ConfidenceLevelConfig,
    /// Multi-page reconciliation
    pub reconcile: ReconcileConfig,
    /// Row post-processing
    pub post_process: PostProcessConfig,
}

/// Registry matching configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum confidence for `matched = true`
    pub accept_threshold: u8,
    /// Largest edit distance the fallback will trust
    pub max_trusted_edit_distance: usize,
    /// Ceiling for confidence produced by the edit-distance fallback
    pub edit_distance_cap: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            accept_threshold: 60,
            max_trusted_edit_distance: 2,
            edit_distance_cap: 60,
        }
    }
}

/// Thresholds for the high / medium / low confidence buckets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceLevelConfig {
    pub high: u8,
    pub medium: u8,
}

impl Default for ConfidenceLevelConfig {
    fn default() -> Self {
        Self {
            high: 90,
            medium: 70,
        }
    }
}

/// Multi-page reconciliation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Confidence ceiling for identifiers recognized more than once
    pub duplicate_confidence_cap: u8,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            duplicate_confidence_cap: 30,
        }
    }
}

/// Row post-processing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostProcessConfig {
    /// Confidence ceiling for identifiers with no registry match
    pub unmatched_confidence_cap: u8,
    /// Confidence added when a learned correction rewrites a value
    pub correction_boost: u8,
    /// Ceiling for confidence raised by a correction
    pub correction_ceiling: u8,
    /// Confidence floor for a recognized result code
    pub valid_resultado_floor: u8,
    /// Confidence ceiling for an unrecognized result code
    pub invalid_resultado_cap: u8,
}

impl Default for PostProcessConfig {
    fn default() -> Self {
        Self {
            unmatched_confidence_cap: 40,
            correction_boost: 15,
            correction_ceiling: 95,
            valid_resultado_floor: 90,
            invalid_resultado_cap: 30,
        }
    }
}

impl HerdbookConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&contents),
            Some("toml") => Self::from_toml(&contents),
            other => Err(HerdbookError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let percentages = [
            ("matching.accept_threshold", self.matching.accept_threshold),
            ("matching.edit_distance_cap", self.matching.edit_distance_cap),
            ("levels.high", self.levels.high),
            ("levels.medium", self.levels.medium),
            (
                "reconcile.duplicate_confidence_cap",
                self.reconcile.duplicate_confidence_cap,
            ),
            (
                "post_process.unmatched_confidence_cap",
                self.post_process.unmatched_confidence_cap,
            ),
            (
                "post_process.correction_boost",
                self.post_process.correction_boost,
            ),
            (
                "post_process.correction_ceiling",
                self.post_process.correction_ceiling,
            ),
            (
                "post_process.valid_resultado_floor",
                self.post_process.valid_resultado_floor,
            ),
            (
                "post_process.invalid_resultado_cap",
                self.post_process.invalid_resultado_cap,
            ),
        ];
        for (field, value) in percentages {
            if value > 100 {
                return Err(ConfigError::OutOfRange {
                    field,
                    value: value as u32,
                });
            }
        }

        if self.levels.high <= self.levels.medium {
            return Err(ConfigError::InvalidThresholds(
                "levels.high must be greater than levels.medium".to_string(),
            ));
        }

        Ok(())
    }
}
