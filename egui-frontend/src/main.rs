use eframe::egui;
use log::{error, info};

mod ui;

use ui::CourtTrackerApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Court Tracker egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 640.0])
            .with_title("Court Tracker")
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Court Tracker",
        options,
        Box::new(|_cc| match CourtTrackerApp::new() {
            Ok(app) => Ok(Box::new(app)),
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
