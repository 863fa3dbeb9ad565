//! Outcome of matching one OCR identifier against the registry

use crate::AnimalRecord;
use serde::{Deserialize, Serialize};

/// Distance reported when no rule produced a usable signal
pub const NO_SIGNAL_DISTANCE: u32 = 999;

/// Which rule of the matching cascade produced a score
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Normalized strings are identical
    Exact,
    /// Same prefix, numerically close suffix
    Structural,
    /// OCR lost the printed prefix, suffix still matches
    PrefixDropped,
    /// Near-identical strings by edit distance
    EditDistance,
}

/// Best match found for one OCR identifier
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: bool,
    pub db_id: Option<String>,
    pub db_registro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_nome: Option<String>,
    /// 0-100
    pub confidence: u8,
    /// Numeric suffix difference for structural matches, edit distance otherwise
    pub distance: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MatchKind>,
}

impl MatchResult {
    /// The zero-confidence result: no candidate, no signal
    pub fn no_match() -> Self {
        Self {
            matched: false,
            db_id: None,
            db_registro: None,
            db_nome: None,
            confidence: 0,
            distance: NO_SIGNAL_DISTANCE,
            kind: None,
        }
    }

    /// A result pointing at `record`.
    ///
    /// `matched` is derived from `accept_threshold`, so it always agrees
    /// with the confidence.
    pub fn for_candidate(
        record: &AnimalRecord,
        kind: MatchKind,
        confidence: u8,
        distance: u32,
        accept_threshold: u8,
    ) -> Self {
        let confidence = confidence.min(100);
        Self {
            matched: confidence >= accept_threshold,
            db_id: Some(record.id.clone()),
            db_registro: Some(record.registro.clone()),
            db_nome: record.nome.clone(),
            confidence,
            distance,
            kind: Some(kind),
        }
    }

    /// True when the result points at a registry record (matched or not)
    pub fn has_candidate(&self) -> bool {
        self.db_id.is_some()
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::no_match()
    }
}
