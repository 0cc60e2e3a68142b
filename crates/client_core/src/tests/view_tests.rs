use super::*;

use shared::domain::{DocumentId, UploadedDocument};

use crate::{
    api::{Answer, UploadReceipt},
    error::ApiClientError,
    selection::SelectedFile,
};

#[test]
fn idle_state_disables_both_triggers() {
    let view = ViewModel::from_state(&InteractionState::default());

    assert!(view.upload_disabled);
    assert!(view.ask_disabled);
    assert_eq!(view.upload_button_label, UPLOAD_BUTTON_LABEL);
    assert_eq!(view.ask_button_label, ASK_BUTTON_LABEL);
    assert_eq!(view.upload_status_text, "");
    assert_eq!(view.answer_text, "");
    assert_eq!(view.upload_status_tone, StatusTone::Neutral);
}

#[test]
fn selection_and_question_enable_triggers() {
    let mut state = InteractionState::default();
    state.select_files(vec![SelectedFile::new("terms.pdf", b"%PDF".to_vec())]);
    state.set_question("What are the terms?".to_string());

    let view = ViewModel::from_state(&state);

    assert!(!view.upload_disabled);
    assert!(!view.ask_disabled);
    assert_eq!(view.selected_file_names, ["terms.pdf"]);
}

#[test]
fn in_flight_flows_use_busy_labels() {
    let mut state = InteractionState::default();
    state.select_files(vec![SelectedFile::new("terms.pdf", b"%PDF".to_vec())]);
    state.set_question("What are the terms?".to_string());
    state.begin_upload().expect("upload starts");
    state.begin_ask().expect("ask starts");

    let view = ViewModel::from_state(&state);

    assert!(view.upload_disabled);
    assert!(view.ask_disabled);
    assert_eq!(view.upload_button_label, UPLOAD_BUTTON_BUSY_LABEL);
    assert_eq!(view.ask_button_label, ASK_BUTTON_BUSY_LABEL);
    assert_eq!(view.upload_status_tone, StatusTone::Progress);
    assert_eq!(view.answer_tone, StatusTone::Progress);
}

#[test]
fn uploaded_documents_describe_names_and_chunks() {
    let mut state = InteractionState::default();
    state.select_files(vec![SelectedFile::new("terms.pdf", b"%PDF".to_vec())]);
    state.begin_upload().expect("upload starts");
    state.finish_upload(Ok(UploadReceipt {
        documents: vec![
            UploadedDocument {
                id: DocumentId("f-1".to_string()),
                file_name: Some("terms.pdf".to_string()),
                chunks: Some(3),
            },
            UploadedDocument::from_id("f-2"),
        ],
    }));

    let view = ViewModel::from_state(&state);

    assert_eq!(view.uploaded_documents, ["terms.pdf (3 chunks)", "f-2"]);
    assert_eq!(view.upload_status_text, "Uploaded 2 file(s) successfully.");
}

#[test]
fn failed_answer_shows_generic_message_only() {
    let mut state = InteractionState::default();
    state.set_question("Anything?".to_string());
    state.begin_ask().expect("ask starts");
    state.finish_ask(Err(ApiClientError::Status {
        status: 500,
        detail: Some("Traceback (most recent call last)".to_string()),
    }));

    let view = ViewModel::from_state(&state);

    assert!(!view.answer_text.contains("Traceback"));
    assert_eq!(view.answer_tone, StatusTone::Error);
    assert!(!view.ask_disabled);
}

#[test]
fn successful_answer_is_rendered_verbatim() {
    let mut state = InteractionState::default();
    state.set_question("Anything?".to_string());
    state.begin_ask().expect("ask starts");
    state.finish_ask(Ok(Answer {
        text: "  line one\nline two  ".to_string(),
    }));

    assert_eq!(
        ViewModel::from_state(&state).answer_text,
        "  line one\nline two  "
    );
}

#[test]
fn unexpected_upload_reads_neutral_and_empty_selection_warns() {
    let mut state = InteractionState::default();
    state.select_files(vec![SelectedFile::new("terms.pdf", b"%PDF".to_vec())]);
    state.begin_upload().expect("upload starts");
    state.finish_upload(Err(ApiClientError::UnexpectedResponse {
        reason: "missing uploaded list".to_string(),
    }));

    let view = ViewModel::from_state(&state);
    assert_eq!(view.upload_status_tone, StatusTone::Neutral);
    assert!(!view.upload_disabled);

    let mut empty = InteractionState::default();
    assert!(empty.begin_upload().is_err());
    assert_eq!(
        ViewModel::from_state(&empty).upload_status_tone,
        StatusTone::Warning
    );
}

#[test]
fn selected_files_are_labelled_with_their_size() {
    let mut state = InteractionState::default();
    state.select_files(vec![
        SelectedFile::new("tiny.pdf", vec![0; 512]),
        SelectedFile::new("notes.pdf", vec![0; 1536]),
        SelectedFile::new("scan.pdf", vec![0; 2 * 1024 * 1024]),
    ]);

    assert_eq!(
        ViewModel::from_state(&state).selected_file_labels,
        ["tiny.pdf (512 B)", "notes.pdf (1.5 KB)", "scan.pdf (2 MB)"]
    );
}
