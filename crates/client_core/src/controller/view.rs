//! Render-ready values derived from [`InteractionState`].

use super::state::{AnswerStatus, ConnectionStatus, InteractionState, UploadStatus};

pub const UPLOAD_BUTTON_LABEL: &str = "Upload & Process";
pub const UPLOAD_BUTTON_BUSY_LABEL: &str = "Uploading...";
pub const ASK_BUTTON_LABEL: &str = "Ask";
pub const ASK_BUTTON_BUSY_LABEL: &str = "Getting answer...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Progress,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub selected_file_names: Vec<String>,
    /// "name (size)" lines for the selection list.
    pub selected_file_labels: Vec<String>,
    pub upload_disabled: bool,
    pub upload_button_label: &'static str,
    pub upload_status_text: String,
    pub upload_status_tone: StatusTone,
    pub uploaded_documents: Vec<String>,
    pub ask_disabled: bool,
    pub ask_button_label: &'static str,
    pub answer_text: String,
    pub answer_tone: StatusTone,
    pub connection_text: String,
    pub connection_tone: StatusTone,
}

impl ViewModel {
    pub fn from_state(state: &InteractionState) -> Self {
        let upload_in_flight = state.upload().is_in_flight();
        let answer_in_flight = state.answer().is_in_flight();

        let uploaded_documents = match state.upload() {
            UploadStatus::Succeeded { documents } => {
                documents.iter().map(|doc| doc.describe()).collect()
            }
            _ => Vec::new(),
        };

        Self {
            selected_file_names: state
                .selected_files()
                .iter()
                .map(|file| file.file_name.clone())
                .collect(),
            selected_file_labels: state
                .selected_files()
                .iter()
                .map(|file| format!("{} ({})", file.file_name, size_label(file.size_bytes())))
                .collect(),
            upload_disabled: upload_in_flight || state.selected_files().is_empty(),
            upload_button_label: if upload_in_flight {
                UPLOAD_BUTTON_BUSY_LABEL
            } else {
                UPLOAD_BUTTON_LABEL
            },
            upload_status_text: state.upload().status_text(),
            upload_status_tone: upload_tone(state.upload()),
            uploaded_documents,
            ask_disabled: answer_in_flight || state.question_is_blank(),
            ask_button_label: if answer_in_flight {
                ASK_BUTTON_BUSY_LABEL
            } else {
                ASK_BUTTON_LABEL
            },
            answer_text: state.answer().display_text().to_string(),
            answer_tone: answer_tone(state.answer()),
            connection_text: state.connection().status_text(),
            connection_tone: connection_tone(state.connection()),
        }
    }
}

fn size_label(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    let text = format!("{value:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text} {}", UNITS[unit])
}

fn upload_tone(status: &UploadStatus) -> StatusTone {
    match status {
        UploadStatus::Idle | UploadStatus::Unexpected => StatusTone::Neutral,
        UploadStatus::NeedsSelection => StatusTone::Warning,
        UploadStatus::InFlight => StatusTone::Progress,
        UploadStatus::Succeeded { .. } => StatusTone::Success,
        UploadStatus::Failed => StatusTone::Error,
    }
}

fn answer_tone(status: &AnswerStatus) -> StatusTone {
    match status {
        AnswerStatus::Idle | AnswerStatus::Succeeded(_) => StatusTone::Neutral,
        AnswerStatus::InFlight => StatusTone::Progress,
        AnswerStatus::Failed => StatusTone::Error,
    }
}

fn connection_tone(status: &ConnectionStatus) -> StatusTone {
    match status {
        ConnectionStatus::Unknown => StatusTone::Neutral,
        ConnectionStatus::Checking => StatusTone::Progress,
        ConnectionStatus::Online(_) => StatusTone::Success,
        ConnectionStatus::Offline => StatusTone::Error,
    }
}

#[cfg(test)]
#[path = "../tests/view_tests.rs"]
mod tests;
