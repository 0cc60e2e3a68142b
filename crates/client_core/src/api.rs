//! HTTP client for the document backend.
//!
//! The backend exposes three routes: `POST /upload` (multipart, one part per
//! PDF), `POST /ask` (JSON question) and `GET /` (health banner). Every call is
//! single-shot: no retries, no timeout beyond the transport default.

use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client, Response,
};
use shared::{
    domain::UploadedDocument,
    error::ErrorBody,
    protocol::{
        AskRequest, AskResponse, HealthResponse, UploadResponse, ASK_PATH, HEALTH_PATH,
        UPLOAD_FIELD_NAME, UPLOAD_PATH,
    },
};
use tracing::debug;
use url::Url;

use crate::{error::ApiClientError, selection::SelectedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub documents: Vec<UploadedDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub message: String,
}

#[async_trait]
pub trait DocumentApi: Send + Sync {
    async fn upload(&self, files: Vec<SelectedFile>) -> Result<UploadReceipt, ApiClientError>;
    async fn ask(&self, question: String) -> Result<Answer, ApiClientError>;
    async fn health(&self) -> Result<HealthStatus, ApiClientError>;
}

pub struct HttpDocumentApi {
    http: Client,
    base_url: String,
}

impl HttpDocumentApi {
    pub fn new(base_url: &str) -> Result<Self, ApiClientError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self, ApiClientError> {
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Trims whitespace and trailing slashes, and rejects anything that is not an
/// absolute http(s) URL.
pub fn normalize_base_url(raw: &str) -> Result<String, ApiClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ApiClientError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let parsed = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme {other:?}"))),
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(trimmed.to_string())
}

async fn ensure_success(response: Response) -> Result<Response, ApiClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorBody>(&body)
        .map(|body| body.detail_text())
        .ok()
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        });

    Err(ApiClientError::Status {
        status: status.as_u16(),
        detail,
    })
}

fn upload_form(files: Vec<SelectedFile>) -> Result<Form, ApiClientError> {
    let mut form = Form::new();
    for file in files {
        let SelectedFile {
            file_name,
            mime_type,
            contents,
        } = file;
        let part = Part::bytes(contents)
            .file_name(file_name.clone())
            .mime_str(&mime_type)
            .map_err(|source| ApiClientError::InvalidPart { file_name, source })?;
        form = form.part(UPLOAD_FIELD_NAME, part);
    }
    Ok(form)
}

#[async_trait]
impl DocumentApi for HttpDocumentApi {
    async fn upload(&self, files: Vec<SelectedFile>) -> Result<UploadReceipt, ApiClientError> {
        let url = self.endpoint(UPLOAD_PATH);
        debug!(%url, file_count = files.len(), "posting upload");

        let form = upload_form(files)?;
        let response = self.http.post(url).multipart(form).send().await?;
        let body = ensure_success(response).await?.bytes().await?;

        let parsed: UploadResponse =
            serde_json::from_slice(&body).map_err(|err| ApiClientError::UnexpectedResponse {
                reason: format!("body is not an upload response: {err}"),
            })?;
        Ok(UploadReceipt {
            documents: parsed.into_documents()?,
        })
    }

    async fn ask(&self, question: String) -> Result<Answer, ApiClientError> {
        let url = self.endpoint(ASK_PATH);
        debug!(%url, question_len = question.len(), "posting question");

        let response = self
            .http
            .post(url)
            .json(&AskRequest { question })
            .send()
            .await?;
        let body = ensure_success(response).await?.bytes().await?;
        let parsed: AskResponse = serde_json::from_slice(&body)?;
        Ok(Answer {
            text: parsed.answer,
        })
    }

    async fn health(&self) -> Result<HealthStatus, ApiClientError> {
        let response = self.http.get(self.endpoint(HEALTH_PATH)).send().await?;
        let body = ensure_success(response).await?.bytes().await?;
        let parsed: HealthResponse = serde_json::from_slice(&body)?;
        Ok(HealthStatus {
            message: parsed.message,
        })
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
