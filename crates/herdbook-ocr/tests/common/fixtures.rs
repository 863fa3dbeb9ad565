//! Test fixture loading utilities

use std::path::PathBuf;

use herdbook_domain::{AnimalRecord, OcrCorrection, OcrResult};
use serde::de::DeserializeOwned;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load and deserialize a JSON fixture
pub fn load_json_fixture<T: DeserializeOwned>(name: &str) -> T {
    let contents = std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name));
    serde_json::from_str(&contents)
        .unwrap_or_else(|err| panic!("Failed to parse fixture {}: {}", name, err))
}

/// Load the registry candidate pool
pub fn load_candidates() -> Vec<AnimalRecord> {
    load_json_fixture("candidates.json")
}

/// Load the learned corrections
pub fn load_corrections() -> Vec<OcrCorrection> {
    load_json_fixture("corrections.json")
}

/// Load a recognized page
pub fn load_page(name: &str) -> OcrResult {
    load_json_fixture(&format!("pages/{}", name))
}
