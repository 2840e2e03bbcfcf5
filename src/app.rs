use std::path::Path;

use eframe::egui;

use crate::state::ChartState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Default dataset loaded at startup. A failed load is logged and leaves the
/// chart unrendered; File → Open… can still load another CSV.
pub const DATA_PATH: &str = "data/data.csv";

pub struct ScatterApp {
    pub state: ChartState,
}

impl Default for ScatterApp {
    fn default() -> Self {
        let mut state = ChartState::default();
        panels::load_into(&mut state, Path::new(DATA_PATH));
        Self { state }
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: scatter chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_chart(ui, &mut self.state);
        });
    }
}
