use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body the backend framework attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    pub fn detail_text(&self) -> String {
        match &self.detail {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

/// A 2xx upload response that does not carry the expected success marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("upload response has no status marker")]
    MissingStatus,
    #[error("upload status was {0:?}, expected \"ok\"")]
    UnexpectedStatus(String),
    #[error("upload response has no uploaded list")]
    MissingUploaded,
}
