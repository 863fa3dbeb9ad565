//! Prefix / numeric suffix decomposition of registry codes

use lazy_static::lazy_static;
use regex::Regex;

use crate::normalize_registro;

lazy_static! {
    // Whole code: optional prefix of letters, hyphens and underscores,
    // then a trailing run of ASCII digits.
    static ref REGISTRO_PARTS: Regex = Regex::new(r"^(?P<prefix>[A-Z_-]*?)(?P<number>[0-9]+)$").unwrap();
}

/// A registry code split into prefix and numeric suffix
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistroParts {
    /// Prefix before the digits; the whole code when there is no suffix
    pub prefix: String,
    /// Raw digit string, leading zeros kept
    pub number: String,
    /// Base-10 value of `number`, `None` when there is no numeric signal
    pub numeric_value: Option<u64>,
}

impl RegistroParts {
    pub fn has_prefix(&self) -> bool {
        !self.prefix.is_empty()
    }

    /// True for a pure-digit code such as "0235"
    pub fn is_bare_number(&self) -> bool {
        self.prefix.is_empty() && self.numeric_value.is_some()
    }

    /// Absolute difference of the numeric suffixes, when both sides have one
    pub fn numeric_diff(&self, other: &RegistroParts) -> Option<u64> {
        match (self.numeric_value, other.numeric_value) {
            (Some(a), Some(b)) => Some(a.abs_diff(b)),
            _ => None,
        }
    }
}

/// Split a registry code into prefix and numeric suffix
///
/// The code is normalized first. "REC-0235" becomes prefix "REC-" and number
/// "0235" (value 235). A code without a trailing digit run, or with digits in
/// the middle ("AB12C"), is returned whole as the prefix with no number.
pub fn split_registro(value: &str) -> RegistroParts {
    let normalized = normalize_registro(value);

    if let Some(caps) = REGISTRO_PARTS.captures(&normalized) {
        let prefix = caps.name("prefix").map_or("", |m| m.as_str());
        let number = caps.name("number").map_or("", |m| m.as_str());
        return RegistroParts {
            prefix: prefix.to_string(),
            number: number.to_string(),
            // Digit runs longer than u64 keep their text but carry no value
            numeric_value: number.parse::<u64>().ok(),
        };
    }

    RegistroParts {
        prefix: normalized,
        number: String::new(),
        numeric_value: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("REC-0235", "REC-", "0235", Some(235))]
    #[case("rec-0235", "REC-", "0235", Some(235))]
    #[case("DOA-001", "DOA-", "001", Some(1))]
    #[case("ABC123", "ABC", "123", Some(123))]
    #[case("0235", "", "0235", Some(235))]
    #[case("LOTE_7", "LOTE_", "7", Some(7))]
    #[case("REC 12", "REC", "12", Some(12))]
    fn test_split_structured(
        #[case] input: &str,
        #[case] prefix: &str,
        #[case] number: &str,
        #[case] value: Option<u64>,
    ) {
        let parts = split_registro(input);
        assert_eq!(parts.prefix, prefix);
        assert_eq!(parts.number, number);
        assert_eq!(parts.numeric_value, value);
    }

    #[rstest]
    #[case("ABC", "ABC")]
    #[case("AB12C", "AB12C")]
    #[case("REC.12", "REC.12")]
    #[case("", "")]
    fn test_split_without_suffix(#[case] input: &str, #[case] prefix: &str) {
        let parts = split_registro(input);
        assert_eq!(parts.prefix, prefix);
        assert_eq!(parts.number, "");
        assert_eq!(parts.numeric_value, None);
    }

    #[test]
    fn test_overlong_digits_have_no_value() {
        let parts = split_registro("REC-123456789012345678901234567890");
        assert_eq!(parts.prefix, "REC-");
        assert_eq!(parts.number.len(), 30);
        assert_eq!(parts.numeric_value, None);
    }

    #[test]
    fn test_bare_number() {
        assert!(split_registro("0235").is_bare_number());
        assert!(!split_registro("REC-0235").is_bare_number());
        assert!(!split_registro("ABC").is_bare_number());
    }

    #[test]
    fn test_numeric_diff() {
        let a = split_registro("REC-0236");
        let b = split_registro("REC-0235");
        assert_eq!(a.numeric_diff(&b), Some(1));
        assert_eq!(b.numeric_diff(&a), Some(1));
        assert_eq!(a.numeric_diff(&split_registro("ABC")), None);
    }
}
