//! Desktop panel for traversing a dataset along weighted text concepts.
//!
//! The panel runs against a [`PanelHost`]: the dataset to browse plus the
//! executors behind traversal calls and media lookups. All interaction state
//! lives in [`traversal_core::TraversalController`]; this crate only renders
//! it and feeds edits back.

use dataset::{panel_available, valid_similarity_runs, DatasetDefinition, SelectionState};
use eframe::egui;
use std::time::Duration;
use traversal_core::{MediaLookup, TraversalController, TraversalOperator};

mod ui;

/// Shown under the scale slider.
pub const SCALE_DESCRIPTION: &str = "Set the scale of the text concepts relative \
    to the initial image. A value of 0 means the text concepts will not factor \
    into the similarity calculation; the appropriate value depends on the \
    dataset and the chosen concepts.";

#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "Concept Traversal".to_string(),
            width: 960.0,
            height: 720.0,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
}

/// Everything the panel needs from its host application.
pub struct PanelHost {
    pub dataset: DatasetDefinition,
    pub traverser: Box<dyn TraversalOperator>,
    pub media: Box<dyn MediaLookup>,
}

/// Opens the native window and runs the panel until the user closes it.
pub fn run_gui(config: GuiConfig, host: PanelHost) -> Result<(), GuiError> {
    let mut options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([config.width, config.height]),
        ..Default::default()
    };
    // NOTE: Vsync generates hangs and lag on occluded windows.
    options.vsync = false;

    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Box::new(PanelApp::new(host))),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}

pub struct PanelApp {
    host: PanelHost,
    controller: TraversalController,
    selection: SelectionState,
    similarity_runs: Vec<String>,
    available: bool,
}

impl PanelApp {
    /// The first qualifying similarity run becomes the default index; with
    /// none, the panel renders its unavailability notice instead.
    pub fn new(host: PanelHost) -> Self {
        let similarity_runs = valid_similarity_runs(&host.dataset);
        let available = panel_available(&host.dataset);
        let controller = TraversalController::new(similarity_runs.first().cloned());
        Self {
            host,
            controller,
            selection: SelectionState::new(),
            similarity_runs,
            available,
        }
    }

    pub fn controller(&self) -> &TraversalController {
        &self.controller
    }

    pub fn is_available(&self) -> bool {
        self.available
    }
}

impl eframe::App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll();
        self.controller.tick(self.host.traverser.as_ref());
        // Debounce deadlines and operator completions arrive between input
        // events; keep repainting while the window is idle.
        ctx.request_repaint_after(Duration::from_millis(100));

        egui::SidePanel::left("samples")
            .default_width(220.0)
            .show(ctx, |ui| self.render_samples(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.available {
                self.render_panel(ui);
            } else {
                self.render_unavailable(ui);
            }
        });
    }
}
