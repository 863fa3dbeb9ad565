//! Learned OCR corrections

use crate::ReportType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Row field a correction applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionField {
    Registro,
    Raca,
    Resultado,
}

impl CorrectionField {
    pub const ALL: [CorrectionField; 3] = [
        CorrectionField::Registro,
        CorrectionField::Raca,
        CorrectionField::Resultado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CorrectionField::Registro => "registro",
            CorrectionField::Raca => "raca",
            CorrectionField::Resultado => "resultado",
        }
    }
}

impl fmt::Display for CorrectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reviewer's fix of a raw OCR value, remembered for future reports.
///
/// `id` and `created_at` are assigned by the data store; corrections
/// detected by the pipeline carry neither until they are saved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrCorrection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub report_type: ReportType,
    pub field_type: CorrectionField,
    pub raw_value: String,
    pub corrected_value: String,
    pub fazenda_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub veterinario: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl OcrCorrection {
    pub fn new(
        report_type: ReportType,
        field_type: CorrectionField,
        raw_value: impl Into<String>,
        corrected_value: impl Into<String>,
        fazenda_id: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            report_type,
            field_type,
            raw_value: raw_value.into(),
            corrected_value: corrected_value.into(),
            fazenda_id: fazenda_id.into(),
            veterinario: None,
            created_at: None,
        }
    }
}
