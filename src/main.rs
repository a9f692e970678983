mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::BankDashApp;
use eframe::egui;

/// Loaded automatically when present in the working directory.
const DEFAULT_DATASET: &str = "bank-additional-full.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bank Marketing Dashboard",
        options,
        Box::new(|_cc| {
            let mut app = BankDashApp::default();

            let default_path = Path::new(DEFAULT_DATASET);
            if default_path.exists() {
                match data::loader::load_csv(default_path) {
                    Ok(dataset) => {
                        log::info!("Loaded {} records from {DEFAULT_DATASET}", dataset.len());
                        app.state.set_dataset(dataset);
                    }
                    Err(e) => {
                        log::error!("Failed to load {DEFAULT_DATASET}: {e}");
                        app.state.status_message = Some(format!("Error: {e}"));
                    }
                }
            }

            Ok(Box::new(app))
        }),
    )
}
