use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::ChartState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut ChartState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} states loaded", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut ChartState) {
    let file = rfd::FileDialog::new()
        .set_title("Open health data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        load_into(state, &path);
    }
}

/// Load a CSV into the chart state. A failure is logged and surfaced in the
/// status line; the chart stays unrendered and there is no retry.
pub fn load_into(state: &mut ChartState, path: &Path) {
    match crate::data::loader::load_csv(path) {
        Ok(dataset) => {
            log::info!("Loaded {} records from {}", dataset.len(), path.display());
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load {}: {e}", path.display());
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}
