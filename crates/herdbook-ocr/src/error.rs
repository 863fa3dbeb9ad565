//! Error types for herdbook-ocr
//!
//! Matching, reconciliation and post-processing never fail: a missing match
//! is reported as data. Errors only come from loading configuration and
//! input files.

use thiserror::Error;

/// Result type alias for herdbook operations
pub type Result<T> = std::result::Result<T, HerdbookError>;

/// Main error type
#[derive(Error, Debug)]
pub enum HerdbookError {
    /// Configuration values are inconsistent
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed JSON input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML config
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config could not be written as TOML
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// File could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File extension not understood by the config loader
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Configuration validation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Value is outside 0-100
    #[error("Value out of range: {field} = {value} (must be 0-100)")]
    OutOfRange { field: &'static str, value: u32 },

    /// Threshold values are invalid relative to each other
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),
}
