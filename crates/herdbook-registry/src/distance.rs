//! Edit distance between normalized registry codes

use strsim::levenshtein;

/// Levenshtein distance (single-character insert, delete, substitute)
///
/// Counts characters, not bytes. `0` iff the strings are equal; symmetric.
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

/// Edit distance, but only when it is at most `max`
///
/// The length difference is a lower bound on the distance, so strings whose
/// lengths differ by more than `max` are rejected without running the DP.
pub fn edit_distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a.abs_diff(len_b) > max {
        return None;
    }
    let distance = levenshtein(a, b);
    (distance <= max).then_some(distance)
}

/// Similarity percentage derived from an edit distance
///
/// `round((1 - distance / max_len) * 100)`, clamped to `0..=100`. A zero
/// `max_len` (two empty strings) has no signal and yields `0`.
pub fn edit_similarity(distance: usize, max_len: usize) -> u8 {
    if max_len == 0 {
        return 0;
    }
    let ratio = 1.0 - distance as f64 / max_len as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("REC-0235", "REC-0235"), 0);
        assert_eq!(edit_distance("REC-0235", "REC-0236"), 1);
        assert_eq!(edit_distance("REC-0299", "REC-0235"), 2);
        assert_eq!(edit_distance("", "ABC"), 3);
        assert_eq!(edit_distance("KITTEN", "SITTING"), 3);
    }

    #[test]
    fn test_edit_distance_counts_chars() {
        assert_eq!(edit_distance("FÊMEA", "FEMEA"), 1);
    }

    #[test]
    fn test_edit_distance_within() {
        assert_eq!(edit_distance_within("REC-0235", "REC-0236", 2), Some(1));
        assert_eq!(edit_distance_within("REC-0235", "REC-0135", 2), Some(1));
        assert_eq!(edit_distance_within("REC-0299", "REC-0135", 2), None);
        assert_eq!(edit_distance_within("A", "ABCD", 2), None);
        assert_eq!(edit_distance_within("", "", 0), Some(0));
    }

    #[test]
    fn test_edit_similarity() {
        assert_eq!(edit_similarity(0, 8), 100);
        assert_eq!(edit_similarity(2, 8), 75);
        assert_eq!(edit_similarity(1, 8), 88);
        assert_eq!(edit_similarity(2, 4), 50);
        assert_eq!(edit_similarity(2, 3), 33);
        assert_eq!(edit_similarity(3, 3), 0);
        assert_eq!(edit_similarity(5, 3), 0);
        assert_eq!(edit_similarity(0, 0), 0);
    }
}
