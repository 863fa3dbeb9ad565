//! Shared helpers for herdbook-ocr integration tests

#![allow(dead_code)]

pub mod fixtures;

use herdbook_domain::{AnimalRecord, OcrField, OcrResult, OcrRow};

/// Candidate pool with ids `id-0`, `id-1`, ... in the given order
pub fn pool(codes: &[&str]) -> Vec<AnimalRecord> {
    codes
        .iter()
        .enumerate()
        .map(|(i, code)| AnimalRecord::new(format!("id-{i}"), *code))
        .collect()
}

/// Row with only an identifier
pub fn row(numero: u32, registro: &str, confidence: u8) -> OcrRow {
    OcrRow::new(numero, OcrField::new(registro.to_string(), confidence))
}

/// Row with an identifier and a result code
pub fn row_with_resultado(registro: &str, confidence: u8, resultado: &str) -> OcrRow {
    let mut row = row(1, registro, confidence);
    row.resultado = OcrField::new(resultado.to_string(), 60);
    row
}

/// Page without header built from rows
pub fn page(rows: Vec<OcrRow>) -> OcrResult {
    OcrResult::new(None, rows)
}
