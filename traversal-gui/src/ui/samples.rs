use super::*;

impl PanelApp {
    /// Sample browser strip. Selection order matters: the traversal origin is
    /// always the most recently selected sample.
    pub(crate) fn render_samples(&mut self, ui: &mut egui::Ui) {
        ui.heading("Samples");
        ui.label(&self.host.dataset.name);
        ui.separator();
        let samples = self.host.dataset.samples.clone();
        egui::ScrollArea::vertical().show(ui, |ui| {
            for sample in &samples {
                let selected = self.selection.is_selected(&sample.id);
                if ui.selectable_label(selected, &sample.id).clicked() {
                    self.selection.toggle(&sample.id);
                }
            }
        });
        ui.separator();
        ui.horizontal(|ui| {
            ui.label(format!("{} selected", self.selection.len()));
            if ui.button("Clear").clicked() {
                self.selection.clear();
            }
        });
    }
}
