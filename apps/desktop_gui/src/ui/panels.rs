//! Panel renderers. Each reads from a [`ViewModel`] snapshot taken at the
//! start of the frame and forwards user intent to the app.

use client_core::{StatusTone, ViewModel};
use eframe::egui;

use super::app::PdfAssistantApp;
use super::widgets::{section_heading, status_line, tone_color};

pub fn connection_bar(app: &mut PdfAssistantApp, ui: &mut egui::Ui, view: &ViewModel) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("PDF Assistant").strong());
        ui.separator();
        ui.label(egui::RichText::new(app.api_base_url()).monospace());
        ui.separator();
        status_line(ui, &view.connection_text, view.connection_tone);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let checking = view.connection_tone == StatusTone::Progress;
            if ui
                .add_enabled(!checking, egui::Button::new("Check again"))
                .clicked()
            {
                app.check_health();
            }
        });
    });
}

pub fn upload_panel(app: &mut PdfAssistantApp, ui: &mut egui::Ui, view: &ViewModel) {
    section_heading(ui, "1. Upload PDFs");

    ui.horizontal(|ui| {
        if ui.button("Choose PDFs...").clicked() {
            app.pick_files();
        }
        if view.selected_file_names.is_empty() {
            ui.weak("No files selected");
        } else {
            ui.label(format!("{} file(s) selected", view.selected_file_names.len()));
        }
    });
    for label in &view.selected_file_labels {
        ui.label(format!("  {label}"));
    }
    if let Some(notice) = app.picker_notice() {
        status_line(ui, &notice, StatusTone::Warning);
    }

    if ui
        .add_enabled(
            !view.upload_disabled,
            egui::Button::new(view.upload_button_label),
        )
        .clicked()
    {
        app.submit_upload();
    }
    status_line(ui, &view.upload_status_text, view.upload_status_tone);

    if !view.uploaded_documents.is_empty() {
        egui::CollapsingHeader::new("Indexed documents")
            .default_open(true)
            .show(ui, |ui| {
                for document in &view.uploaded_documents {
                    ui.label(document);
                }
            });
    }
}

pub fn ask_panel(app: &mut PdfAssistantApp, ui: &mut egui::Ui, view: &ViewModel) {
    section_heading(ui, "2. Ask a question");

    let response = ui.add(
        egui::TextEdit::multiline(app.edit_question())
            .hint_text("What would you like to know about your documents?")
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        app.sync_question();
    }
    // Re-derived because `view` was taken before this frame's edit.
    let can_ask = !app.view().ask_disabled;
    let submit_shortcut = response.has_focus()
        && ui.input(|i| i.key_pressed(egui::Key::Enter) && i.modifiers.command);

    ui.horizontal(|ui| {
        let clicked = ui
            .add_enabled(can_ask, egui::Button::new(view.ask_button_label))
            .clicked();
        if clicked || (submit_shortcut && can_ask) {
            app.submit_ask();
        }
        ui.weak("Ctrl+Enter to ask");
    });
}

pub fn answer_panel(app: &mut PdfAssistantApp, ui: &mut egui::Ui, view: &ViewModel) {
    section_heading(ui, "3. Answer");

    if view.answer_text.is_empty() {
        ui.weak("Answers appear here.");
        return;
    }

    let mut answer: &str = &view.answer_text;
    ui.add(
        egui::TextEdit::multiline(&mut answer)
            .text_color(tone_color(view.answer_tone))
            .desired_width(f32::INFINITY),
    );

    ui.horizontal(|ui| {
        if ui
            .add_enabled(app.has_answer(), egui::Button::new("Copy answer"))
            .clicked()
        {
            app.copy_answer(&view.answer_text);
        }
        if let Some(status) = app.clipboard_status() {
            ui.weak(status);
        }
    });
}
