//! Learned corrections: applying past fixes and detecting new ones

use std::collections::HashMap;

use herdbook_domain::{CorrectionField, OcrCorrection, OcrField, OcrRow, ReportType};
use herdbook_registry::registro_key;

use crate::config::PostProcessConfig;

/// Corrections of one report type, indexed by field and raw value
#[derive(Debug, Clone, Default)]
pub struct CorrectionIndex {
    entries: HashMap<(CorrectionField, String), String>,
}

impl CorrectionIndex {
    /// Index the corrections that belong to `report_type`.
    ///
    /// Raw values are keyed trimmed and uppercased; a later correction of
    /// the same raw value replaces an earlier one.
    pub fn new(corrections: &[OcrCorrection], report_type: ReportType) -> Self {
        let entries = corrections
            .iter()
            .filter(|c| c.report_type == report_type)
            .filter_map(|c| {
                let key = registro_key(&c.raw_value);
                (!key.is_empty()).then(|| ((c.field_type, key), c.corrected_value.clone()))
            })
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Corrected value for a raw value of `field`, if one was learned
    pub fn lookup(&self, field: CorrectionField, raw_value: &str) -> Option<&str> {
        let key = registro_key(raw_value);
        if key.is_empty() {
            return None;
        }
        self.entries.get(&(field, key)).map(String::as_str)
    }
}

/// Rewrite the registro, raca and resultado fields that have a learned
/// correction. Returns how many fields were rewritten.
pub(crate) fn apply_index(
    rows: &mut [OcrRow],
    index: &CorrectionIndex,
    config: &PostProcessConfig,
) -> usize {
    if index.is_empty() {
        return 0;
    }

    let mut applied = 0;
    for row in rows.iter_mut() {
        for field_type in CorrectionField::ALL {
            let field = row.field_mut(field_type);
            if let Some(corrected) = index.lookup(field_type, &field.value) {
                let corrected = corrected.to_string();
                correct_field(field, corrected, config);
                applied += 1;
            }
        }
    }
    applied
}

fn correct_field(field: &mut OcrField, corrected: String, config: &PostProcessConfig) {
    let raw = std::mem::replace(&mut field.value, corrected);
    field.original_value = Some(raw);
    field.confidence = field
        .confidence
        .saturating_add(config.correction_boost)
        .min(config.correction_ceiling);
}

/// Compare the rows as recognized with the rows after human review and
/// emit one correction per changed registro, raca or resultado.
///
/// Rows are paired by position over the shorter of the two lists; blank
/// values on either side are not corrections.
pub fn detect_corrections(
    original_rows: &[OcrRow],
    corrected_rows: &[OcrRow],
    report_type: ReportType,
    fazenda_id: &str,
    veterinario: Option<&str>,
) -> Vec<OcrCorrection> {
    let mut corrections = Vec::new();

    for (original, corrected) in original_rows.iter().zip(corrected_rows) {
        for field_type in CorrectionField::ALL {
            let before = &original.field(field_type).value;
            let after = &corrected.field(field_type).value;
            if before.is_empty() || after.is_empty() || before == after {
                continue;
            }
            let mut correction =
                OcrCorrection::new(report_type, field_type, before, after, fazenda_id);
            correction.veterinario = veterinario.map(str::to_string);
            corrections.push(correction);
        }
    }

    corrections
}
