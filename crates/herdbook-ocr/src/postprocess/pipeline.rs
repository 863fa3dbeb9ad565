//! Per-page post-processing pipeline

use herdbook_domain::{AnimalRecord, OcrCorrection, OcrResult, OcrRow, RegistroRow, ReportType};
use tracing::debug;

use super::corrections::{apply_index, CorrectionIndex};
use super::resultado::normalize_resultado;
use crate::config::{HerdbookConfig, PostProcessConfig};
use crate::matching::RegistryMatcher;

/// Runs learned corrections, registry matching and result normalization
/// over the rows of one page
#[derive(Debug, Clone, Default)]
pub struct PostProcessor {
    matcher: RegistryMatcher,
    config: PostProcessConfig,
}

impl PostProcessor {
    pub fn new(config: &HerdbookConfig) -> Self {
        Self {
            matcher: RegistryMatcher::new(config.matching.clone()),
            config: config.post_process.clone(),
        }
    }

    /// Rewrite values that a reviewer corrected before for this report type
    pub fn apply_corrections(
        &self,
        rows: &mut [OcrRow],
        corrections: &[OcrCorrection],
        report_type: ReportType,
    ) -> usize {
        let index = CorrectionIndex::new(corrections, report_type);
        let applied = apply_index(rows, &index, &self.config);
        debug!(applied, learned = index.len(), %report_type, "corrections applied");
        applied
    }

    /// Check every non-blank identifier against the registry.
    ///
    /// The best registry candidate is recorded in `matched_value` even when
    /// it is not trusted; `matched_db` says whether it was accepted. A match
    /// raises the identifier confidence to the match confidence; no match
    /// caps it so the row is routed to review.
    pub fn match_rows_against_db<R: RegistroRow>(&self, rows: &mut [R], candidates: &[AnimalRecord]) {
        for row in rows.iter_mut() {
            let field = row.registro_mut();
            if field.is_blank() {
                continue;
            }

            let result = self.matcher.match_registro(&field.value, candidates);
            field.matched_db = Some(result.matched);
            field.matched_value = result.db_registro;
            field.confidence = if result.matched {
                field.confidence.max(result.confidence)
            } else {
                field.confidence.min(self.config.unmatched_confidence_cap)
            };
        }
    }

    /// Normalize every non-blank result code for `report_type`
    pub fn normalize_rows(&self, rows: &mut [OcrRow], report_type: ReportType) {
        for row in rows.iter_mut() {
            let field = &mut row.resultado;
            if field.is_blank() {
                continue;
            }

            let outcome = normalize_resultado(&field.value, report_type);
            field.confidence = if outcome.valid {
                field.confidence.max(self.config.valid_resultado_floor)
            } else {
                field.confidence.min(self.config.invalid_resultado_cap)
            };
            if outcome.normalized != field.value {
                let raw = std::mem::replace(&mut field.value, outcome.normalized);
                field.original_value.get_or_insert(raw);
            }
        }
    }

    /// Full pipeline for one page: corrections, registry match, result
    /// normalization, then rows with neither identifier nor result are
    /// dropped and `total_rows` recounted
    pub fn process(
        &self,
        mut result: OcrResult,
        candidates: &[AnimalRecord],
        corrections: &[OcrCorrection],
        report_type: ReportType,
    ) -> OcrResult {
        self.apply_corrections(&mut result.rows, corrections, report_type);
        self.match_rows_against_db(&mut result.rows, candidates);
        self.normalize_rows(&mut result.rows, report_type);

        let before = result.rows.len();
        result
            .rows
            .retain(|row| !row.registro.is_blank() || !row.resultado.is_blank());
        result.metadata.total_rows = result.rows.len();

        debug!(
            %report_type,
            rows = result.rows.len(),
            dropped = before - result.rows.len(),
            "page post-processed"
        );
        result
    }
}

/// Apply learned corrections with the default configuration
pub fn apply_corrections(
    rows: &mut [OcrRow],
    corrections: &[OcrCorrection],
    report_type: ReportType,
) -> usize {
    PostProcessor::default().apply_corrections(rows, corrections, report_type)
}

/// Match row identifiers against the registry with the default configuration
pub fn match_rows_against_db<R: RegistroRow>(rows: &mut [R], candidates: &[AnimalRecord]) {
    PostProcessor::default().match_rows_against_db(rows, candidates)
}

/// Normalize result codes with the default configuration
pub fn normalize_rows(rows: &mut [OcrRow], report_type: ReportType) {
    PostProcessor::default().normalize_rows(rows, report_type)
}

/// Post-process one page with the default configuration
pub fn post_process_ocr(
    result: OcrResult,
    candidates: &[AnimalRecord],
    corrections: &[OcrCorrection],
    report_type: ReportType,
) -> OcrResult {
    PostProcessor::default().process(result, candidates, corrections, report_type)
}
