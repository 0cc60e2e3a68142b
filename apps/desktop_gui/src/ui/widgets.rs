use client_core::StatusTone;
use eframe::egui;

pub fn tone_color(tone: StatusTone) -> egui::Color32 {
    match tone {
        StatusTone::Neutral => egui::Color32::from_rgb(185, 187, 190),
        StatusTone::Progress => egui::Color32::from_rgb(88, 101, 242),
        StatusTone::Success => egui::Color32::from_rgb(35, 165, 90),
        StatusTone::Warning => egui::Color32::from_rgb(240, 178, 50),
        StatusTone::Error => egui::Color32::from_rgb(240, 71, 71),
    }
}

/// Status line in the tone's color. Empty text renders nothing.
pub fn status_line(ui: &mut egui::Ui, text: &str, tone: StatusTone) {
    if text.is_empty() {
        return;
    }
    ui.label(egui::RichText::new(text).color(tone_color(tone)));
}

pub fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(4.0);
    ui.label(egui::RichText::new(title).strong().size(16.0));
    ui.add_space(2.0);
}
