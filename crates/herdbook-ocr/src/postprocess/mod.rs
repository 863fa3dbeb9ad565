//! Post-processing of recognized pages
//!
//! Values reviewers corrected before are rewritten, identifiers are checked
//! against the registry and result codes are mapped to their canonical form.
//! Non-identifier fields are only validated, never fuzzy matched.

mod corrections;
mod pipeline;
mod resultado;

pub use corrections::{detect_corrections, CorrectionIndex};
pub use pipeline::{
    apply_corrections, match_rows_against_db, normalize_rows, post_process_ocr, PostProcessor,
};
pub use resultado::{normalize_resultado, NormalizedResultado};
