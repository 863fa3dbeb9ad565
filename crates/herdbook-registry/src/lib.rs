//! Registry code handling for herdbook
//!
//! Registry codes are the semi-structured identifiers printed on animal tags:
//! an alphanumeric prefix followed by a number ("REC-0235", "DOA-001",
//! "ABC123", or just "0235" when the prefix was cropped from the photo).
//!
//! This crate provides the comparison primitives used by the matcher:
//! - Normalization (case and whitespace)
//! - Prefix / numeric suffix decomposition
//! - Levenshtein edit distance and the derived similarity percentage

pub mod distance;
pub mod normalize;
pub mod split;

pub use distance::*;
pub use normalize::*;
pub use split::*;
