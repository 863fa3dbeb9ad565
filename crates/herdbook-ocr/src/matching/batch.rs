//! Batch matching and confidence buckets

use std::collections::BTreeMap;

use herdbook_domain::{AnimalRecord, ConfidenceLevel, MatchResult};
use serde::Serialize;

use super::RegistryMatcher;
use crate::config::ConfidenceLevelConfig;

/// Match each OCR value at its original index with the default configuration.
///
/// Rows do not influence each other here; duplicates are only detected once
/// all pages are available (see [`crate::reconcile`]).
pub fn match_registros<S: AsRef<str>>(
    ocr_values: &[S],
    candidates: &[AnimalRecord],
) -> BTreeMap<usize, MatchResult> {
    RegistryMatcher::default().match_registros(ocr_values, candidates)
}

/// Bucket a confidence for display: high ≥ 90, medium ≥ 70, else low
pub fn confidence_level(confidence: u8) -> ConfidenceLevel {
    confidence_level_with(confidence, &ConfidenceLevelConfig::default())
}

/// Bucket a confidence using custom thresholds
pub fn confidence_level_with(confidence: u8, levels: &ConfidenceLevelConfig) -> ConfidenceLevel {
    if confidence >= levels.high {
        ConfidenceLevel::High
    } else if confidence >= levels.medium {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// A match result together with its display bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeveledMatch {
    #[serde(flatten)]
    pub result: MatchResult,
    pub level: ConfidenceLevel,
}

impl LeveledMatch {
    pub fn new(result: MatchResult, levels: &ConfidenceLevelConfig) -> Self {
        let level = confidence_level_with(result.confidence, levels);
        Self { result, level }
    }
}
