use std::path::PathBuf;
use std::time::Duration;

use arboard::Clipboard;
use client_core::{AnswerStatus, InteractionController, SelectedFile, ViewModel, PDF_EXTENSIONS};
use eframe::egui;
use tracing::{debug, warn};

use super::panels;

const IN_FLIGHT_REPAINT: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub api_base_url: String,
}

/// Paths that could not be read when building a selection, with the reason.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PickerNotice {
    pub skipped: Vec<String>,
}

impl PickerNotice {
    pub fn message(&self) -> Option<String> {
        if self.skipped.is_empty() {
            None
        } else {
            Some(format!("Skipped unreadable files: {}", self.skipped.join(", ")))
        }
    }
}

pub struct PdfAssistantApp {
    controller: InteractionController,
    startup: StartupConfig,
    question_input: String,
    picker_notice: PickerNotice,
    clipboard_status: Option<String>,
}

impl PdfAssistantApp {
    pub fn new(mut controller: InteractionController, startup: StartupConfig) -> Self {
        controller.check_health();
        Self {
            controller,
            startup,
            question_input: String::new(),
            picker_notice: PickerNotice::default(),
            clipboard_status: None,
        }
    }

    pub fn pick_files(&mut self) {
        let Some(paths) = rfd::FileDialog::new()
            .add_filter("PDF documents", PDF_EXTENSIONS)
            .pick_files()
        else {
            debug!("file picker dismissed");
            return;
        };
        let (files, notice) = read_selection(paths);
        self.picker_notice = notice;
        self.controller.select_files(files);
    }

    pub fn submit_upload(&mut self) {
        let submission = self.controller.submit_upload();
        debug!(?submission, "upload submitted");
    }

    pub fn edit_question(&mut self) -> &mut String {
        &mut self.question_input
    }

    /// Pushes the edit buffer into the controller when it has diverged.
    pub fn sync_question(&mut self) {
        if self.controller.state().question() != self.question_input {
            self.controller.set_question(self.question_input.clone());
        }
    }

    pub fn submit_ask(&mut self) {
        self.sync_question();
        let submission = self.controller.submit_ask();
        debug!(?submission, "question submitted");
    }

    pub fn check_health(&mut self) {
        self.controller.check_health();
    }

    pub fn copy_answer(&mut self, answer: &str) {
        let result =
            Clipboard::new().and_then(|mut clipboard| clipboard.set_text(answer.to_string()));
        self.clipboard_status = Some(match result {
            Ok(()) => "Answer copied to clipboard".to_string(),
            Err(err) => {
                warn!(error = %err, "clipboard write failed");
                format!("Failed to copy answer: {err}")
            }
        });
    }

    pub fn has_answer(&self) -> bool {
        matches!(self.controller.state().answer(), AnswerStatus::Succeeded(_))
    }

    pub fn api_base_url(&self) -> &str {
        &self.startup.api_base_url
    }

    pub fn picker_notice(&self) -> Option<String> {
        self.picker_notice.message()
    }

    pub fn clipboard_status(&self) -> Option<&str> {
        self.clipboard_status.as_deref()
    }

    pub fn view(&self) -> ViewModel {
        self.controller.view()
    }
}

/// Reads every picked path into memory. Unreadable paths are skipped and
/// reported rather than failing the whole selection.
pub fn read_selection(paths: Vec<PathBuf>) -> (Vec<SelectedFile>, PickerNotice) {
    let mut files = Vec::with_capacity(paths.len());
    let mut notice = PickerNotice::default();
    for path in paths {
        match SelectedFile::read_from_path(&path) {
            Ok(file) => files.push(file),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not read selected file");
                notice.skipped.push(format!("{} ({err})", path.display()));
            }
        }
    }
    (files, notice)
}

impl eframe::App for PdfAssistantApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.process_settled();

        let view = self.controller.view();
        egui::TopBottomPanel::top("connection_bar").show(ctx, |ui| {
            panels::connection_bar(self, ui, &view);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                panels::upload_panel(self, ui, &view);
                ui.separator();
                panels::ask_panel(self, ui, &view);
                ui.separator();
                panels::answer_panel(self, ui, &view);
            });
        });

        if self.controller.state().has_request_in_flight() {
            ctx.request_repaint_after(IN_FLIGHT_REPAINT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("pdf_assistant_gui_{name}_{}", std::process::id()));
        fs::create_dir_all(&dir).expect("scratch dir");
        dir
    }

    #[test]
    fn read_selection_keeps_readable_files_in_order() {
        let dir = scratch_dir("readable");
        let first = dir.join("first.pdf");
        let second = dir.join("second.pdf");
        fs::write(&first, b"%PDF-1.7 first").expect("write first");
        fs::write(&second, b"%PDF-1.7 second").expect("write second");

        let (files, notice) = read_selection(vec![first, second]);

        let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, ["first.pdf", "second.pdf"]);
        assert_eq!(files[1].contents, b"%PDF-1.7 second");
        assert!(notice.message().is_none());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn read_selection_reports_missing_files() {
        let dir = scratch_dir("missing");
        let present = dir.join("present.pdf");
        fs::write(&present, b"%PDF").expect("write present");
        let missing = dir.join("missing.pdf");

        let (files, notice) = read_selection(vec![missing, present]);

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "present.pdf");
        assert_eq!(notice.skipped.len(), 1);
        let message = notice.message().expect("notice");
        assert!(message.contains("missing.pdf"), "{message}");
        let _ = fs::remove_dir_all(dir);
    }
}
