use eframe::egui;

use crate::PanelApp;
use traversal_core::ConceptRow;

mod panel;
mod samples;
mod widgets;

use widgets::error_label;
