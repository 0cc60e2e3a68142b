use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier the backend assigns to an ingested document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A document the backend reports as stored and indexed.
///
/// Older backends only return the identifier; the current one also reports
/// the original file name and how many text chunks were embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    pub id: DocumentId,
    pub file_name: Option<String>,
    pub chunks: Option<u64>,
}

impl UploadedDocument {
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: DocumentId(id.into()),
            file_name: None,
            chunks: None,
        }
    }

    /// Short human-readable line, e.g. `report.pdf (12 chunks)`.
    pub fn describe(&self) -> String {
        let name = self.file_name.as_deref().unwrap_or(&self.id.0);
        match self.chunks {
            Some(1) => format!("{name} (1 chunk)"),
            Some(chunks) => format!("{name} ({chunks} chunks)"),
            None => name.to_string(),
        }
    }
}
