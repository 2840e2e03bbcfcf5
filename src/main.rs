mod app;
mod chart;
mod data;
mod state;
mod ui;

use app::ScatterApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 580.0])
            .with_min_inner_size([980.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "State Scatter – Healthcare vs. Socioeconomic Factors",
        options,
        Box::new(|_cc| Ok(Box::new(ScatterApp::default()))),
    )
}
