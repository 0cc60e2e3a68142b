use serde::{Deserialize, Serialize};

use crate::{
    domain::{DocumentId, UploadedDocument},
    error::ContractViolation,
};

pub const UPLOAD_PATH: &str = "/upload";
pub const ASK_PATH: &str = "/ask";
pub const HEALTH_PATH: &str = "/";

/// Every multipart part of an upload uses this field name; the backend groups
/// the parts into one list by it.
pub const UPLOAD_FIELD_NAME: &str = "files";
pub const UPLOAD_STATUS_OK: &str = "ok";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub uploaded: Option<Vec<UploadedEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UploadedEntry {
    Id(String),
    Document {
        file_id: String,
        #[serde(default)]
        file_name: Option<String>,
        #[serde(default)]
        chunks: Option<u64>,
    },
}

impl From<UploadedEntry> for UploadedDocument {
    fn from(value: UploadedEntry) -> Self {
        match value {
            UploadedEntry::Id(id) => UploadedDocument::from_id(id),
            UploadedEntry::Document {
                file_id,
                file_name,
                chunks,
            } => UploadedDocument {
                id: DocumentId(file_id),
                file_name,
                chunks,
            },
        }
    }
}

impl UploadResponse {
    /// Returns the uploaded documents when the response carries the `ok`
    /// marker and an uploaded list.
    pub fn into_documents(self) -> Result<Vec<UploadedDocument>, ContractViolation> {
        match self.status.as_deref() {
            None => return Err(ContractViolation::MissingStatus),
            Some(UPLOAD_STATUS_OK) => {}
            Some(other) => return Err(ContractViolation::UnexpectedStatus(other.to_string())),
        }

        let uploaded = self.uploaded.ok_or(ContractViolation::MissingUploaded)?;
        Ok(uploaded.into_iter().map(UploadedDocument::from).collect())
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
