//! Result-code normalization per report type
//!
//! Field sheets use short hand-written codes; the registry stores canonical
//! values. Codes are compared trimmed and uppercased.

use herdbook_domain::ReportType;

const DG_CODES: &[(&str, &str)] = &[
    ("P", "PRENHE"),
    ("PRENHE", "PRENHE"),
    ("PR", "PRENHE"),
    ("V", "VAZIA"),
    ("VAZIA", "VAZIA"),
    ("VA", "VAZIA"),
    ("R", "RETOQUE"),
    ("RETOQUE", "RETOQUE"),
    ("RET", "RETOQUE"),
];

const SEXAGEM_CODES: &[(&str, &str)] = &[
    ("F", "PRENHE_FEMEA"),
    ("FEMEA", "PRENHE_FEMEA"),
    ("FÊMEA", "PRENHE_FEMEA"),
    ("M", "PRENHE_MACHO"),
    ("MACHO", "PRENHE_MACHO"),
    ("S", "PRENHE_SEM_SEXO"),
    ("SEM SEXO", "PRENHE_SEM_SEXO"),
    ("D", "PRENHE_2_SEXOS"),
    ("DOIS SEXOS", "PRENHE_2_SEXOS"),
    ("2 SEXOS", "PRENHE_2_SEXOS"),
    ("V", "VAZIA"),
    ("VAZIA", "VAZIA"),
];

const P2_CODES: &[(&str, &str)] = &[
    ("✓", "APTA"),
    ("CHECK", "APTA"),
    ("OK", "APTA"),
    ("APTA", "APTA"),
    ("X", "PERDA"),
    ("PERDA", "PERDA"),
    ("PERDEU", "PERDA"),
];

/// Outcome of normalizing one result code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedResultado {
    pub normalized: String,
    /// False when the report type has a code table and the value is not in it
    pub valid: bool,
}

fn code_table(report_type: ReportType) -> Option<&'static [(&'static str, &'static str)]> {
    match report_type {
        ReportType::Dg => Some(DG_CODES),
        ReportType::Sexagem => Some(SEXAGEM_CODES),
        ReportType::P2 => Some(P2_CODES),
        ReportType::P1 | ReportType::Te | ReportType::Aspiracao => None,
    }
}

/// Map a result code to its canonical value for `report_type`.
///
/// Report types without a code table accept any value, uppercased.
pub fn normalize_resultado(value: &str, report_type: ReportType) -> NormalizedResultado {
    let upper = value.trim().to_uppercase();

    let Some(table) = code_table(report_type) else {
        return NormalizedResultado {
            normalized: upper,
            valid: true,
        };
    };

    match table.iter().find(|(code, _)| *code == upper) {
        Some((_, canonical)) => NormalizedResultado {
            normalized: canonical.to_string(),
            valid: true,
        },
        None => NormalizedResultado {
            normalized: upper,
            valid: false,
        },
    }
}
