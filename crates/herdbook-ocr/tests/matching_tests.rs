//! Registry matching integration tests
//!
//! Worked examples of the matching cascade plus property-based checks of
//! the result invariants.

mod common;

use common::pool;
use herdbook_domain::{ConfidenceLevel, MatchKind, MatchResult, NO_SIGNAL_DISTANCE};
use herdbook_ocr::{confidence_level, match_registro, match_registros, RegistryMatcher};
use proptest::prelude::*;

// === Worked examples ===

#[test]
fn test_exact_code() {
    let result = match_registro("REC-0235", &pool(&["REC-0235"]));
    assert!(result.matched);
    assert_eq!(result.confidence, 100);
    assert_eq!(result.distance, 0);
    assert_eq!(result.db_id.as_deref(), Some("id-0"));
    assert_eq!(result.db_registro.as_deref(), Some("REC-0235"));
}

#[test]
fn test_single_digit_off_by_one() {
    let result = match_registro("REC-0236", &pool(&["REC-0235"]));
    assert!(result.matched);
    assert_eq!(result.confidence, 88);
    assert_eq!(result.distance, 1);
    assert_eq!(result.kind, Some(MatchKind::Structural));
}

#[test]
fn test_far_number_needs_small_edit_distance() {
    // numeric difference 64 is out of the structural ladder; two
    // substitutions is still inside the trusted edit distance
    let result = match_registro("REC-0299", &pool(&["REC-0235"]));
    assert_eq!(result.kind, Some(MatchKind::EditDistance));
    assert_eq!(result.distance, 2);
    assert_eq!(result.confidence, 60);
    assert!(result.matched);
}

#[test]
fn test_far_number_and_far_text_rejected() {
    let result = match_registro("REC-0299", &pool(&["REC-0135"]));
    assert!(!result.matched);
    assert!(result.confidence < 60);
}

#[test]
fn test_cropped_prefix() {
    let result = match_registro("0235", &pool(&["REC-0235"]));
    assert!(result.matched);
    assert_eq!(result.confidence, 70);
    assert_eq!(result.distance, 0);
    assert_eq!(result.kind, Some(MatchKind::PrefixDropped));
}

#[test]
fn test_spaces_and_case_ignored() {
    let result = match_registro("  r e c-0235 ", &pool(&["REC-0235"]));
    assert_eq!(result.confidence, 100);
    assert_eq!(result.kind, Some(MatchKind::Exact));
}

#[test]
fn test_structural_ladder() {
    let candidates = pool(&["REC-0235"]);
    let cases = [
        ("REC-235", 98, 0),
        ("REC-0234", 88, 1),
        ("REC-0240", 75, 5),
        ("REC-0245", 60, 10),
    ];
    for (ocr, confidence, distance) in cases {
        let result = match_registro(ocr, &candidates);
        assert_eq!(
            (result.confidence, result.distance),
            (confidence, distance),
            "ocr value {ocr}"
        );
        assert!(result.matched);
    }
}

#[test]
fn test_empty_inputs_are_no_match() {
    let expected = MatchResult {
        matched: false,
        db_id: None,
        db_registro: None,
        db_nome: None,
        confidence: 0,
        distance: NO_SIGNAL_DISTANCE,
        kind: None,
    };
    assert_eq!(match_registro("", &pool(&["REC-0235"])), expected);
    assert_eq!(match_registro("REC-0235", &[]), expected);
}

#[test]
fn test_best_candidate_among_many() {
    let candidates = pool(&["DOA-001", "REC-0300", "REC-0237", "REC-0236"]);
    let result = match_registro("REC-0235", &candidates);
    assert_eq!(result.db_registro.as_deref(), Some("REC-0236"));
    assert_eq!(result.confidence, 88);
}

#[test]
fn test_batch_keeps_positions() {
    let candidates = pool(&["REC-0235", "REC-0300"]);
    let results = match_registros(&["REC-0300", "", "0235"], &candidates);
    assert_eq!(results.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(results[&0].db_id.as_deref(), Some("id-1"));
    assert!(!results[&1].matched);
    assert_eq!(results[&2].db_id.as_deref(), Some("id-0"));
}

#[test]
fn test_confidence_buckets_for_results() {
    let candidates = pool(&["REC-0235"]);
    let levels: Vec<ConfidenceLevel> = ["REC-0235", "REC-0238", "0235"]
        .iter()
        .map(|v| confidence_level(match_registro(v, &candidates).confidence))
        .collect();
    assert_eq!(
        levels,
        vec![
            ConfidenceLevel::High,
            ConfidenceLevel::Medium,
            ConfidenceLevel::Medium
        ]
    );
}

// === Property-based tests ===

fn registry_code() -> impl Strategy<Value = String> {
    "[A-Z]{0,3}-?[0-9]{1,5}"
}

proptest! {
    #[test]
    fn prop_matched_iff_threshold(
        ocr in "[A-Za-z0-9 -]{0,10}",
        codes in prop::collection::vec(registry_code(), 0..6),
    ) {
        let refs: Vec<&str> = codes.iter().map(String::as_str).collect();
        let result = match_registro(&ocr, &pool(&refs));
        prop_assert_eq!(result.matched, result.confidence >= 60);
        prop_assert!(result.confidence <= 100);
        prop_assert_eq!(result.db_id.is_some(), result.db_registro.is_some());
        prop_assert_eq!(result.has_candidate(), result.distance != NO_SIGNAL_DISTANCE);
    }

    #[test]
    fn prop_code_in_pool_is_exact(
        code in registry_code(),
        others in prop::collection::vec(registry_code(), 0..5),
    ) {
        let mut codes: Vec<&str> = others.iter().map(String::as_str).collect();
        codes.push(&code);
        let result = match_registro(&code, &pool(&codes));
        prop_assert!(result.matched);
        prop_assert_eq!(result.confidence, 100);
        prop_assert_eq!(result.distance, 0);
    }

    #[test]
    fn prop_stricter_threshold_never_accepts_more(
        ocr in registry_code(),
        codes in prop::collection::vec(registry_code(), 1..5),
    ) {
        let refs: Vec<&str> = codes.iter().map(String::as_str).collect();
        let candidates = pool(&refs);
        let strict = RegistryMatcher::new(herdbook_ocr::MatchConfig {
            accept_threshold: 90,
            ..Default::default()
        });
        let lenient = match_registro(&ocr, &candidates);
        let strict_result = strict.match_registro(&ocr, &candidates);
        prop_assert_eq!(strict_result.confidence, lenient.confidence);
        prop_assert!(!strict_result.matched || lenient.matched);
    }
}
