//! Domain types shared by the herdbook crates
//!
//! This crate provides the data model for the OCR reconciliation engine:
//! - AnimalRecord: a known registry entry fetched from the data store
//! - OcrField, OcrRow, OcrAspiracaoRow: values recognized on a report page
//! - OcrResult: one page (or a merged set of pages) of recognized rows
//! - MatchResult: the outcome of matching one identifier against the registry
//! - OcrCorrection: a learned correction applied to future reports
//! - ReportType, ConfidenceLevel: small enums used across the pipeline

pub mod animal;
pub mod correction;
pub mod match_result;
pub mod ocr;
pub mod report;

pub use animal::*;
pub use correction::*;
pub use match_result::*;
pub use ocr::*;
pub use report::*;
