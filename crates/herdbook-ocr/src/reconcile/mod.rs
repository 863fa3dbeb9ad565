//! Multi-page reconciliation
//!
//! Pages of one physical report are recognized independently. Merging them
//! flattens the rows in page order, renumbers them, and suppresses the
//! confidence of every identifier that was recognized more than once so a
//! reviewer has to decide which occurrence is real. Which duplicate is
//! correct is never decided here.

use std::collections::{BTreeMap, HashMap};

use herdbook_domain::{OcrField, OcrMetadata, OcrResult, RegistroRow};
use herdbook_registry::registro_key;
use tracing::{debug, warn};

use crate::config::ReconcileConfig;

/// Merges per-page OCR results into one result set
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    config: ReconcileConfig,
}

impl Reconciler {
    pub fn new(config: ReconcileConfig) -> Self {
        Self { config }
    }

    /// Merge pages into one result
    ///
    /// - rows are flattened in page order and renumbered `1..=N`
    /// - rows whose identifier key occurs more than once across all pages
    ///   get their identifier confidence capped (30 by default)
    /// - the header comes from the first page, `pagina` becomes `"1-<pages>"`
    pub fn merge<R: RegistroRow>(&self, pages: Vec<OcrResult<R>>) -> OcrResult<R> {
        let page_count = pages.len();
        let mut pages = pages.into_iter();
        let (header, mut rows) = match pages.next() {
            Some(first) => (first.header, first.rows),
            None => (None, Vec::new()),
        };
        for page in pages {
            rows.extend(page.rows);
        }

        let counts = count_keys(&rows);
        let mut flagged = 0usize;
        for (index, row) in rows.iter_mut().enumerate() {
            row.set_numero(index as u32 + 1);
            let is_duplicate = dedup_key(row.registro())
                .is_some_and(|key| counts.get(&key).copied().unwrap_or(0) > 1);
            if is_duplicate {
                let field = row.registro_mut();
                field.confidence = field.confidence.min(self.config.duplicate_confidence_cap);
                flagged += 1;
            }
        }

        if flagged > 0 {
            warn!(
                rows = flagged,
                keys = counts.values().filter(|&&count| count > 1).count(),
                "registro recognized more than once; confidence capped for review"
            );
        }
        debug!(pages = page_count, total_rows = rows.len(), "pages merged");

        let total_rows = rows.len();
        OcrResult {
            header,
            rows,
            metadata: OcrMetadata {
                pagina: Some(format!("1-{}", page_count)),
                total_rows,
            },
        }
    }
}

/// Merge pages with the default configuration
pub fn merge_ocr_results<R: RegistroRow>(pages: Vec<OcrResult<R>>) -> OcrResult<R> {
    Reconciler::default().merge(pages)
}

/// Key used to spot the same animal recognized twice
///
/// The matched registry value when there is one, otherwise the raw text;
/// trimmed and uppercased. `None` for blank identifiers.
pub fn dedup_key(field: &OcrField) -> Option<String> {
    let source = field
        .matched_value
        .as_deref()
        .filter(|matched| !matched.is_empty())
        .unwrap_or(&field.value);
    let key = registro_key(source);
    (!key.is_empty()).then_some(key)
}

/// Keys that occur more than once among `rows`, with their counts
pub fn duplicate_keys<R: RegistroRow>(rows: &[R]) -> BTreeMap<String, usize> {
    count_keys(rows)
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .collect()
}

fn count_keys<R: RegistroRow>(rows: &[R]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in rows {
        if let Some(key) = dedup_key(row.registro()) {
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}
