//! Values recognized by the OCR collaborator

use crate::{CorrectionField, ReportType};
use serde::{Deserialize, Deserializer, Serialize};

/// A recognized value together with how much the pipeline trusts it
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrField<T = String> {
    pub value: T,
    /// 0-100; out-of-range or fractional input is rounded and clamped
    #[serde(deserialize_with = "deserialize_confidence")]
    pub confidence: u8,
    /// Set once the value has been checked against the registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_db: Option<bool>,
    /// Canonical registry value chosen by matching (distinct from the raw text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_value: Option<String>,
    /// Value before a correction or normalization rewrote it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_value: Option<T>,
}

impl<T> OcrField<T> {
    pub fn new(value: T, confidence: u8) -> Self {
        Self {
            value,
            confidence: confidence.min(100),
            matched_db: None,
            matched_value: None,
            original_value: None,
        }
    }
}

fn deserialize_confidence<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(raw.round().clamp(0.0, 100.0) as u8)
}

impl OcrField<String> {
    /// True when the recognized text is blank
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// A row that carries a registry identifier.
///
/// Matching and reconciliation only look at the row ordinal and the
/// identifier field, so they work on any report layout through this trait.
pub trait RegistroRow {
    fn numero(&self) -> u32;
    fn set_numero(&mut self, numero: u32);
    fn registro(&self) -> &OcrField;
    fn registro_mut(&mut self) -> &mut OcrField;
}

/// One row of a universal report (DG, sexagem, P1, P2, TE)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrRow {
    pub numero: u32,
    pub registro: OcrField,
    #[serde(default)]
    pub raca: OcrField,
    #[serde(default)]
    pub resultado: OcrField,
    #[serde(default)]
    pub obs: OcrField,
}

impl OcrRow {
    pub fn new(numero: u32, registro: OcrField) -> Self {
        Self {
            numero,
            registro,
            ..Default::default()
        }
    }

    /// The field a correction of kind `field` applies to
    pub fn field(&self, field: CorrectionField) -> &OcrField {
        match field {
            CorrectionField::Registro => &self.registro,
            CorrectionField::Raca => &self.raca,
            CorrectionField::Resultado => &self.resultado,
        }
    }

    pub fn field_mut(&mut self, field: CorrectionField) -> &mut OcrField {
        match field {
            CorrectionField::Registro => &mut self.registro,
            CorrectionField::Raca => &mut self.raca,
            CorrectionField::Resultado => &mut self.resultado,
        }
    }
}

impl RegistroRow for OcrRow {
    fn numero(&self) -> u32 {
        self.numero
    }

    fn set_numero(&mut self, numero: u32) {
        self.numero = numero;
    }

    fn registro(&self) -> &OcrField {
        &self.registro
    }

    fn registro_mut(&mut self) -> &mut OcrField {
        &mut self.registro
    }
}

/// One row of an aspiration report, with oocyte counts
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrAspiracaoRow {
    pub numero: u32,
    pub registro: OcrField,
    #[serde(default)]
    pub raca: OcrField,
    #[serde(default)]
    pub atresicos: OcrField<u32>,
    #[serde(default)]
    pub degenerados: OcrField<u32>,
    #[serde(default)]
    pub expandidos: OcrField<u32>,
    #[serde(default)]
    pub desnudos: OcrField<u32>,
    #[serde(default)]
    pub viaveis: OcrField<u32>,
    #[serde(default)]
    pub total: OcrField<u32>,
}

impl RegistroRow for OcrAspiracaoRow {
    fn numero(&self) -> u32 {
        self.numero
    }

    fn set_numero(&mut self, numero: u32) {
        self.numero = numero;
    }

    fn registro(&self) -> &OcrField {
        &self.registro
    }

    fn registro_mut(&mut self) -> &mut OcrField {
        &mut self.registro
    }
}

/// Report header as recognized on the page
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrHeader {
    #[serde(default)]
    pub fazenda: OcrField,
    #[serde(default)]
    pub data: OcrField,
    #[serde(default)]
    pub veterinario: OcrField,
    #[serde(default)]
    pub tecnico: OcrField,
    #[serde(default)]
    pub servico_detectado: Option<ReportType>,
}

/// Summary metadata for a page or merged result
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrMetadata {
    /// Page label, e.g. "1/2" when printed on the sheet or "1-3" after a merge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagina: Option<String>,
    #[serde(default)]
    pub total_rows: usize,
}

/// One page of recognized rows, or several pages merged into one
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrResult<R = OcrRow> {
    #[serde(default)]
    pub header: Option<OcrHeader>,
    pub rows: Vec<R>,
    #[serde(default)]
    pub metadata: OcrMetadata,
}

impl<R> OcrResult<R> {
    /// Build a result whose `total_rows` matches `rows`
    pub fn new(header: Option<OcrHeader>, rows: Vec<R>) -> Self {
        let total_rows = rows.len();
        Self {
            header,
            rows,
            metadata: OcrMetadata {
                pagina: None,
                total_rows,
            },
        }
    }
}

impl<R> Default for OcrResult<R> {
    fn default() -> Self {
        Self::new(None, Vec::new())
    }
}

/// Convenience alias for aspiration report pages
pub type OcrAspiracaoResult = OcrResult<OcrAspiracaoRow>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_confidence_clamped() {
        let field = OcrField::new("REC-0235".to_string(), 150);
        assert_eq!(field.confidence, 100);
    }

    #[test]
    fn test_deserialized_confidence_clamped() {
        let cases = [("150", 100), ("-5", 0), ("87.6", 88), ("42", 42)];
        for (raw, expected) in cases {
            let json = format!(r#"{{"value": "REC-0235", "confidence": {raw}}}"#);
            let field: OcrField = serde_json::from_str(&json).unwrap();
            assert_eq!(field.confidence, expected, "confidence {raw}");
        }
    }

    #[test]
    fn test_blank_field() {
        assert!(OcrField::new("   ".to_string(), 80).is_blank());
        assert!(!OcrField::new(" A1 ".to_string(), 80).is_blank());
    }

    #[test]
    fn test_row_deserializes_with_missing_fields() {
        let json = r#"{"numero": 3, "registro": {"value": "REC-0235", "confidence": 87}}"#;
        let row: OcrRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.numero, 3);
        assert_eq!(row.registro.value, "REC-0235");
        assert_eq!(row.registro.confidence, 87);
        assert!(row.resultado.value.is_empty());
        assert_eq!(row.registro.matched_value, None);
    }

    #[test]
    fn test_result_deserializes_from_collaborator_json() {
        let json = r#"{
            "header": {"fazenda": {"value": "Santa Rita", "confidence": 90}, "servico_detectado": "dg"},
            "rows": [{"numero": 1, "registro": {"value": "0235", "confidence": 70}}],
            "metadata": {"pagina": "1/2", "total_rows": 1}
        }"#;
        let result: OcrResult = serde_json::from_str(json).unwrap();
        let header = result.header.unwrap();
        assert_eq!(header.fazenda.value, "Santa Rita");
        assert_eq!(header.servico_detectado, Some(ReportType::Dg));
        assert_eq!(result.metadata.pagina.as_deref(), Some("1/2"));
        assert_eq!(result.rows.len(), 1);
    }

    #[test]
    fn test_aspiracao_row_counts() {
        let json = r#"{
            "numero": 1,
            "registro": {"value": "DOA-001", "confidence": 95},
            "viaveis": {"value": 12, "confidence": 80},
            "total": {"value": 20, "confidence": 75}
        }"#;
        let row: OcrAspiracaoRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.viaveis.value, 12);
        assert_eq!(row.total.value, 20);
        assert_eq!(row.atresicos.value, 0);
        assert_eq!(row.registro().value, "DOA-001");
    }

    #[test]
    fn test_registro_row_trait_updates_row() {
        let mut row = OcrRow::new(7, OcrField::new("A1".to_string(), 50));
        row.set_numero(2);
        row.registro_mut().confidence = 10;
        assert_eq!(row.numero(), 2);
        assert_eq!(row.registro.confidence, 10);
    }

    #[test]
    fn test_field_by_correction_kind() {
        let mut row = OcrRow::new(1, OcrField::new("A1".to_string(), 50));
        row.field_mut(CorrectionField::Raca).value = "NELORE".to_string();
        assert_eq!(row.raca.value, "NELORE");
        assert_eq!(row.field(CorrectionField::Registro).value, "A1");
    }

    #[test]
    fn test_new_result_counts_rows() {
        let result = OcrResult::new(None, vec![OcrRow::default(), OcrRow::default()]);
        assert_eq!(result.metadata.total_rows, 2);
        assert_eq!(result.metadata.pagina, None);
    }
}
