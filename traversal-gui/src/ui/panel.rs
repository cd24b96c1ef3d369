use super::*;

impl PanelApp {
    pub(crate) fn render_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Concept Traversal");
        ui.label("Walk the dataset from an initial image along weighted text concepts.");
        ui.add_space(8.0);

        self.render_initial_image(ui);
        ui.separator();
        self.render_similarity_index(ui);
        ui.add_space(4.0);
        self.render_concepts(ui);
        ui.add_space(4.0);
        self.render_scale(ui);
        ui.separator();
        self.render_submit(ui);
        self.render_results(ui);
    }

    pub(crate) fn render_unavailable(&mut self, ui: &mut egui::Ui) {
        ui.heading("Concept Traversal");
        ui.add_space(8.0);
        ui.label("This dataset has no similarity index that supports text prompts.");
        ui.label("Compute one with prompts enabled to activate this panel.");
    }

    fn render_initial_image(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.controller.starting_sample().is_none() {
                if ui.button("Set initial image").clicked() {
                    self.set_initial_from_selection();
                }
            } else {
                let can_update = self
                    .controller
                    .can_update_initial_image(self.selection.latest());
                let button = egui::Button::new("Update initial image");
                if ui.add_enabled(can_update, button).clicked() {
                    self.set_initial_from_selection();
                }
            }
            if let Some(message) = self.controller.selection_error() {
                error_label(ui, message);
            }
        });
        if let Some(sample) = self.controller.starting_sample() {
            ui.label(format!("Initial image: {sample}"));
        }
        if self.controller.preview_loading() {
            ui.spinner();
        } else if let Some(url) = self.controller.preview_url() {
            ui.monospace(url);
        }
        if let Some(message) = self.controller.preview_error() {
            error_label(ui, message);
        }
    }

    fn set_initial_from_selection(&mut self) {
        let latest = self.selection.latest().map(str::to_string);
        self.controller
            .set_initial_image(latest.as_deref(), self.host.media.as_ref());
    }

    fn render_similarity_index(&mut self, ui: &mut egui::Ui) {
        let runs = self.similarity_runs.clone();
        let selected = self
            .controller
            .similarity_run()
            .unwrap_or_default()
            .to_string();
        egui::ComboBox::from_label("Similarity index")
            .selected_text(&selected)
            .show_ui(ui, |ui| {
                for key in &runs {
                    if ui.selectable_label(*key == selected, key).clicked() {
                        self.controller.set_similarity_run(key);
                    }
                }
            });
    }

    fn render_concepts(&mut self, ui: &mut egui::Ui) {
        ui.label("Concepts");
        // Snapshot so edits can flow back through the controller mid-loop.
        let rows: Vec<ConceptRow> = self.controller.concepts().rows().to_vec();
        for (index, row) in rows.iter().enumerate() {
            let mut text = row.text.clone();
            let mut weight = row.weight;
            ui.horizontal(|ui| {
                let text_edit = egui::TextEdit::singleline(&mut text)
                    .hint_text("concept")
                    .desired_width(180.0);
                if ui.add(text_edit).changed() {
                    self.controller.set_text(index, &text);
                }
                let slider = egui::Slider::new(&mut weight, 0.0..=1.0).step_by(0.01);
                if ui.add(slider).changed() {
                    self.controller.set_weight(index, weight);
                }
            });
        }
    }

    fn render_scale(&mut self, ui: &mut egui::Ui) {
        let mut scale = self.controller.scale();
        let slider = egui::Slider::new(&mut scale, 0.0..=100.0).text("Text scale");
        if ui.add(slider).changed() {
            self.controller.set_scale(scale);
        }
        ui.label(egui::RichText::new(crate::SCALE_DESCRIPTION).weak());
    }

    fn render_submit(&mut self, ui: &mut egui::Ui) {
        if let Some(message) = self.controller.error() {
            let message = message.to_string();
            error_label(ui, &message);
        }
        ui.horizontal(|ui| {
            let executing = self.controller.is_executing();
            let button = egui::Button::new("Traverse!");
            if ui.add_enabled(!executing, button).clicked() {
                let _ = self.controller.submit(self.host.traverser.as_ref());
            }
            if executing {
                ui.spinner();
            }
        });
    }

    fn render_results(&mut self, ui: &mut egui::Ui) {
        let Some(result) = self.controller.result() else {
            return;
        };
        ui.separator();
        ui.label("Nearest samples");
        egui::ScrollArea::vertical().show(ui, |ui| {
            for entry in &result.matches {
                ui.horizontal(|ui| {
                    ui.monospace(&entry.sample_id);
                    ui.label(format!("{:.3}", entry.score));
                });
            }
        });
    }
}
