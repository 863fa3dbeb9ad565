//! The matching cascade
//!
//! Each rule looks at one OCR identifier and one candidate and may produce a
//! `(confidence, distance)` score. Rules run in priority order; a rule with a
//! gate is skipped once the running confidence reaches it, and a score is
//! kept only when it beats the running best.

use herdbook_domain::MatchKind;
use herdbook_registry::{
    edit_distance_within, edit_similarity, normalize_registro, split_registro, RegistroParts,
};

use crate::config::MatchConfig;

/// Rules in the order they are tried
pub(crate) const CASCADE: [MatchKind; 4] = [
    MatchKind::Exact,
    MatchKind::Structural,
    MatchKind::PrefixDropped,
    MatchKind::EditDistance,
];

/// Confidence and distance produced by one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Score {
    pub confidence: u8,
    pub distance: u32,
}

impl Score {
    fn new(confidence: u8, distance: u32) -> Self {
        Self {
            confidence,
            distance,
        }
    }
}

/// A registry code normalized and split once, compared many times
#[derive(Debug, Clone)]
pub(crate) struct PreparedRegistro {
    pub normalized: String,
    pub parts: RegistroParts,
    char_len: usize,
}

impl PreparedRegistro {
    pub fn new(raw: &str) -> Self {
        let normalized = normalize_registro(raw);
        let parts = split_registro(&normalized);
        let char_len = normalized.chars().count();
        Self {
            normalized,
            parts,
            char_len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

pub(crate) trait CascadeRule {
    /// Running confidence at which the rule stops being tried
    fn gate(&self) -> Option<u8>;

    fn score(
        &self,
        ocr: &PreparedRegistro,
        candidate: &PreparedRegistro,
        config: &MatchConfig,
    ) -> Option<Score>;
}

impl CascadeRule for MatchKind {
    fn gate(&self) -> Option<u8> {
        match self {
            MatchKind::Exact | MatchKind::Structural => None,
            MatchKind::PrefixDropped => Some(70),
            MatchKind::EditDistance => Some(50),
        }
    }

    fn score(
        &self,
        ocr: &PreparedRegistro,
        candidate: &PreparedRegistro,
        config: &MatchConfig,
    ) -> Option<Score> {
        match self {
            MatchKind::Exact => exact(ocr, candidate),
            MatchKind::Structural => structural(&ocr.parts, &candidate.parts),
            MatchKind::PrefixDropped => prefix_dropped(&ocr.parts, &candidate.parts),
            MatchKind::EditDistance => by_edit_distance(ocr, candidate, config),
        }
    }
}

/// Run the cascade for one candidate. `None` when no rule produced a signal.
pub(crate) fn evaluate(
    ocr: &PreparedRegistro,
    candidate: &PreparedRegistro,
    config: &MatchConfig,
) -> Option<(MatchKind, Score)> {
    let mut best: Option<(MatchKind, Score)> = None;

    for kind in CASCADE {
        let running = best.map_or(0, |(_, score)| score.confidence);
        if kind.gate().is_some_and(|gate| running >= gate) {
            continue;
        }
        if let Some(score) = kind.score(ocr, candidate, config) {
            if score.confidence > running {
                best = Some((kind, score));
                if kind == MatchKind::Exact {
                    break;
                }
            }
        }
    }

    best
}

fn exact(ocr: &PreparedRegistro, candidate: &PreparedRegistro) -> Option<Score> {
    (!ocr.is_empty() && ocr.normalized == candidate.normalized).then(|| Score::new(100, 0))
}

/// Same non-empty prefix, numerically close suffix.
///
/// An off-by-one suffix is the typical single-digit misread (5/6, 3/8).
fn structural(ocr: &RegistroParts, candidate: &RegistroParts) -> Option<Score> {
    if !ocr.has_prefix() || ocr.prefix != candidate.prefix {
        return None;
    }
    let diff = ocr.numeric_diff(candidate)?;
    match diff {
        0 => Some(Score::new(98, 0)),
        1 => Some(Score::new(88, 1)),
        2..=5 => Some(Score::new(75, diff as u32)),
        6..=10 => Some(Score::new(60, diff as u32)),
        _ => None,
    }
}

/// Pure-digit OCR value against a prefixed candidate: the photo cropped the
/// printed prefix.
fn prefix_dropped(ocr: &RegistroParts, candidate: &RegistroParts) -> Option<Score> {
    if !ocr.is_bare_number() || !candidate.has_prefix() {
        return None;
    }
    match ocr.numeric_diff(candidate)? {
        0 => Some(Score::new(70, 0)),
        diff @ 1..=2 => Some(Score::new(55, diff as u32)),
        _ => None,
    }
}

/// Near-identical strings only; short unrelated codes are always a few
/// edits apart.
fn by_edit_distance(
    ocr: &PreparedRegistro,
    candidate: &PreparedRegistro,
    config: &MatchConfig,
) -> Option<Score> {
    let max_len = ocr.char_len.max(candidate.char_len);
    if max_len == 0 {
        return None;
    }
    let distance = edit_distance_within(
        &ocr.normalized,
        &candidate.normalized,
        config.max_trusted_edit_distance,
    )?;
    let confidence = edit_similarity(distance, max_len);
    if confidence == 0 {
        return None;
    }
    Some(Score::new(
        confidence.min(config.edit_distance_cap),
        distance as u32,
    ))
}
