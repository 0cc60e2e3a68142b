//! Interaction state and its transitions.
//!
//! Everything here is synchronous; the controller decides when a transition
//! runs. The `begin_*` methods enforce the submission guards and the `finish_*`
//! methods always leave the in-flight state.

use shared::domain::UploadedDocument;
use tracing::{error, info, warn};

use crate::{
    api::{Answer, HealthStatus, UploadReceipt},
    error::ApiClientError,
    selection::SelectedFile,
};

pub const UPLOAD_NEEDS_SELECTION_TEXT: &str = "Please select at least one PDF file.";
pub const UPLOAD_IN_FLIGHT_TEXT: &str = "Uploading and processing PDFs...";
pub const UPLOAD_UNEXPECTED_TEXT: &str =
    "Upload finished, but the server sent an unexpected response.";
pub const UPLOAD_FAILED_TEXT: &str = "Upload failed. Please try again.";
pub const ANSWER_IN_FLIGHT_TEXT: &str = "Thinking...";
pub const ANSWER_FAILED_TEXT: &str =
    "Sorry, something went wrong while getting the answer. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Upload,
    Ask,
    Health,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    /// Upload was attempted with nothing selected.
    NeedsSelection,
    InFlight,
    Succeeded {
        documents: Vec<UploadedDocument>,
    },
    /// 2xx response without the success marker. Not a failure.
    Unexpected,
    Failed,
}

impl UploadStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    pub fn status_text(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::NeedsSelection => UPLOAD_NEEDS_SELECTION_TEXT.to_string(),
            Self::InFlight => UPLOAD_IN_FLIGHT_TEXT.to_string(),
            Self::Succeeded { documents } => {
                format!("Uploaded {} file(s) successfully.", documents.len())
            }
            Self::Unexpected => UPLOAD_UNEXPECTED_TEXT.to_string(),
            Self::Failed => UPLOAD_FAILED_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnswerStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded(String),
    Failed,
}

impl AnswerStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Text for the answer region. Successful answers are returned verbatim.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::InFlight => ANSWER_IN_FLIGHT_TEXT,
            Self::Succeeded(answer) => answer,
            Self::Failed => ANSWER_FAILED_TEXT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Unknown,
    Checking,
    Online(String),
    Offline,
}

impl ConnectionStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Checking)
    }

    pub fn status_text(&self) -> String {
        match self {
            Self::Unknown => "Backend status unknown".to_string(),
            Self::Checking => "Checking backend...".to_string(),
            Self::Online(message) => format!("Backend online: {message}"),
            Self::Offline => "Backend unreachable".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EmptySelection,
    BlankQuestion,
    AlreadyInFlight(Flow),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Started,
    Rejected(Rejection),
}

#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    selected_files: Vec<SelectedFile>,
    question: String,
    upload: UploadStatus,
    answer: AnswerStatus,
    connection: ConnectionStatus,
}

impl InteractionState {
    pub fn selected_files(&self) -> &[SelectedFile] {
        &self.selected_files
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn upload(&self) -> &UploadStatus {
        &self.upload
    }

    pub fn answer(&self) -> &AnswerStatus {
        &self.answer
    }

    pub fn connection(&self) -> &ConnectionStatus {
        &self.connection
    }

    pub fn has_request_in_flight(&self) -> bool {
        self.upload.is_in_flight() || self.answer.is_in_flight() || self.connection.is_in_flight()
    }

    pub fn question_is_blank(&self) -> bool {
        self.question.trim().is_empty()
    }

    /// Replaces the whole selection; nothing accumulates across calls.
    pub fn select_files(&mut self, files: Vec<SelectedFile>) {
        self.selected_files = files;
    }

    pub fn set_question(&mut self, text: String) {
        self.question = text;
    }

    pub fn begin_upload(&mut self) -> Result<Vec<SelectedFile>, Rejection> {
        if self.upload.is_in_flight() {
            return Err(Rejection::AlreadyInFlight(Flow::Upload));
        }
        if self.selected_files.is_empty() {
            self.upload = UploadStatus::NeedsSelection;
            return Err(Rejection::EmptySelection);
        }

        self.upload = UploadStatus::InFlight;
        Ok(self.selected_files.clone())
    }

    pub fn finish_upload(&mut self, outcome: Result<UploadReceipt, ApiClientError>) {
        self.upload = match outcome {
            Ok(receipt) => {
                info!(count = receipt.documents.len(), "upload succeeded");
                UploadStatus::Succeeded {
                    documents: receipt.documents,
                }
            }
            Err(err) if err.is_unexpected_response() => {
                warn!(error = %err, "upload returned an unexpected response");
                UploadStatus::Unexpected
            }
            Err(err) => {
                error!(error = %err, "upload request failed");
                UploadStatus::Failed
            }
        };
    }

    pub fn begin_ask(&mut self) -> Result<String, Rejection> {
        if self.answer.is_in_flight() {
            return Err(Rejection::AlreadyInFlight(Flow::Ask));
        }
        if self.question_is_blank() {
            return Err(Rejection::BlankQuestion);
        }

        self.answer = AnswerStatus::InFlight;
        Ok(self.question.clone())
    }

    pub fn finish_ask(&mut self, outcome: Result<Answer, ApiClientError>) {
        self.answer = match outcome {
            Ok(answer) => {
                info!(answer_len = answer.text.len(), "answer received");
                AnswerStatus::Succeeded(answer.text)
            }
            Err(err) => {
                error!(error = %err, "ask request failed");
                AnswerStatus::Failed
            }
        };
    }

    pub fn begin_health_check(&mut self) -> Result<(), Rejection> {
        if self.connection.is_in_flight() {
            return Err(Rejection::AlreadyInFlight(Flow::Health));
        }
        self.connection = ConnectionStatus::Checking;
        Ok(())
    }

    pub fn finish_health_check(&mut self, outcome: Result<HealthStatus, ApiClientError>) {
        self.connection = match outcome {
            Ok(health) => ConnectionStatus::Online(health.message),
            Err(err) => {
                warn!(error = %err, "backend health check failed");
                ConnectionStatus::Offline
            }
        };
    }
}

#[cfg(test)]
#[path = "../tests/state_tests.rs"]
mod tests;
