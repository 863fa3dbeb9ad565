//! Fuzzy matching of OCR identifiers against the animal registry
//!
//! Scores how likely a raw OCR registry code refers to a known record, using
//! the prefix / numeric suffix structure of the codes with an edit-distance
//! fallback for near-identical strings.

mod batch;
mod matcher;
mod strategy;

pub use batch::{confidence_level, confidence_level_with, match_registros, LeveledMatch};
pub use matcher::{match_registro, RegistryMatcher};
