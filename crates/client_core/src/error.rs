use shared::error::ContractViolation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("invalid backend base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("request to backend failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned HTTP {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    #[error("backend returned an unexpected upload response: {reason}")]
    UnexpectedResponse { reason: String },
    #[error("backend returned a malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("invalid multipart part for {file_name:?}: {source}")]
    InvalidPart {
        file_name: String,
        source: reqwest::Error,
    },
    #[error("request task did not complete: {0}")]
    Interrupted(String),
}

impl ApiClientError {
    /// True for a 2xx response whose body lacks the expected success shape.
    /// Callers treat this as a neutral outcome rather than a failure.
    pub fn is_unexpected_response(&self) -> bool {
        matches!(self, Self::UnexpectedResponse { .. })
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(": {detail}"))
        .unwrap_or_default()
}

impl From<ContractViolation> for ApiClientError {
    fn from(value: ContractViolation) -> Self {
        Self::UnexpectedResponse {
            reason: value.to_string(),
        }
    }
}
