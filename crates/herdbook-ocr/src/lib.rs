//! Herdbook OCR - registry matching and reconciliation of field reports
//!
//! Turns raw values recognized on photographed herd reports into rows a
//! reviewer can trust:
//!
//! - **Matching**: fuzzy match of a raw registry code against the known
//!   animals, through a cascade of exact, structural, prefix-dropped and
//!   edit-distance strategies
//! - **Post-processing**: learned corrections, registry match per row and
//!   result-code normalization for one page
//! - **Reconciliation**: merge of the pages of one report, with every
//!   identifier recognized more than once flagged for review
//! - **Config**: thresholds, loadable from JSON or TOML
//!
//! # Pipeline
//!
//! ```text
//! page → post_process_ocr ┐
//! page → post_process_ocr ┼→ merge_ocr_results → rows for review
//! page → post_process_ocr ┘
//! ```
//!
//! Matching and merging never fail; absence of a match is data.

pub mod config;
pub mod error;
pub mod matching;
pub mod postprocess;
pub mod reconcile;

pub use config::{
    ConfidenceLevelConfig, HerdbookConfig, MatchConfig, PostProcessConfig, ReconcileConfig,
};
pub use error::{ConfigError, HerdbookError, Result};
pub use matching::{
    confidence_level, confidence_level_with, match_registro, match_registros, LeveledMatch,
    RegistryMatcher,
};
pub use postprocess::{
    apply_corrections, detect_corrections, match_rows_against_db, normalize_resultado,
    normalize_rows, post_process_ocr, CorrectionIndex, NormalizedResultado, PostProcessor,
};
pub use reconcile::{dedup_key, duplicate_keys, merge_ocr_results, Reconciler};

pub use herdbook_domain as domain;
pub use herdbook_registry as registry;
