//! Shared widgets used across the panel.

use eframe::egui;

/// Red inline label used for validation and executor failures.
pub fn error_label(ui: &mut egui::Ui, message: &str) {
    ui.colored_label(egui::Color32::LIGHT_RED, message);
}
