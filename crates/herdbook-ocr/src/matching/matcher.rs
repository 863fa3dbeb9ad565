//! Registry matcher: best candidate for one OCR identifier

use std::collections::BTreeMap;

use herdbook_domain::{AnimalRecord, MatchKind, MatchResult};
use tracing::{debug, trace};

use super::strategy::{evaluate, PreparedRegistro};
use crate::config::MatchConfig;

/// Matches OCR identifiers against a candidate pool
#[derive(Debug, Clone, Default)]
pub struct RegistryMatcher {
    config: MatchConfig,
}

impl RegistryMatcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Find the best registry record for one OCR value
    ///
    /// Candidates are scored in input order. An exact hit returns at once;
    /// otherwise the highest confidence wins and an equal later score does
    /// not replace an earlier one. The best candidate is reported even when
    /// its confidence is below the acceptance threshold (`matched = false`).
    /// An empty value or an empty pool yields [`MatchResult::no_match`].
    pub fn match_registro(&self, ocr_value: &str, candidates: &[AnimalRecord]) -> MatchResult {
        let ocr = PreparedRegistro::new(ocr_value);
        if ocr.is_empty() || candidates.is_empty() {
            return MatchResult::no_match();
        }

        let mut best = MatchResult::no_match();

        for candidate in candidates {
            let prepared = PreparedRegistro::new(&candidate.registro);
            let Some((kind, score)) = evaluate(&ocr, &prepared, &self.config) else {
                continue;
            };
            trace!(
                ocr = %ocr.normalized,
                candidate = %candidate.registro,
                ?kind,
                confidence = score.confidence,
                distance = score.distance,
                "candidate scored"
            );

            if kind == MatchKind::Exact || score.confidence > best.confidence {
                best = MatchResult::for_candidate(
                    candidate,
                    kind,
                    score.confidence,
                    score.distance,
                    self.config.accept_threshold,
                );
            }
            if kind == MatchKind::Exact {
                break;
            }
        }

        debug!(
            ocr = %ocr.normalized,
            matched = best.matched,
            db_registro = best.db_registro.as_deref().unwrap_or(""),
            confidence = best.confidence,
            candidates = candidates.len(),
            "registro matched"
        );
        best
    }

    /// Match every value independently; keys are the input indices
    pub fn match_registros<S: AsRef<str>>(
        &self,
        ocr_values: &[S],
        candidates: &[AnimalRecord],
    ) -> BTreeMap<usize, MatchResult> {
        ocr_values
            .iter()
            .enumerate()
            .map(|(index, value)| (index, self.match_registro(value.as_ref(), candidates)))
            .collect()
    }
}

/// Match one OCR value with the default configuration
pub fn match_registro(ocr_value: &str, candidates: &[AnimalRecord]) -> MatchResult {
    RegistryMatcher::default().match_registro(ocr_value, candidates)
}
