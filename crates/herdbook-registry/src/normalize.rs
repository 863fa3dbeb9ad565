//! Registry code normalization

/// Normalize a registry code for comparison
///
/// - Converts to uppercase
/// - Removes leading, trailing and internal whitespace
///
/// Total and idempotent; an empty input yields an empty output.
pub fn normalize_registro(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Key used to compare identifiers across rows: trimmed and uppercased,
/// internal spacing kept as recognized.
pub fn registro_key(value: &str) -> String {
    value.trim().to_uppercase()
}
