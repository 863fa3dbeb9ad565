//! Animal registry record

use serde::{Deserialize, Serialize};

/// A known registry entry, as stored in the data store.
///
/// Records are read-only snapshots for the duration of a matching session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalRecord {
    /// Opaque stable identifier in the data store
    pub id: String,
    /// Canonical registry code as stored (e.g. "REC-0235")
    pub registro: String,
    /// Display name, if the animal has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
}

impl AnimalRecord {
    /// Create a record without a display name
    pub fn new(id: impl Into<String>, registro: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            registro: registro.into(),
            nome: None,
        }
    }

    /// Attach a display name
    pub fn with_nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = Some(nome.into());
        self
    }
}
