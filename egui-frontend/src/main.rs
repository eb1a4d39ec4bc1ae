use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::FareLedgerApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Fare Ledger application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])  // Room for forms, chart and table
            .with_min_inner_size([900.0, 640.0])
            .with_title("Fare Ledger")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Fare Ledger",
        options,
        Box::new(|cc| {
            // Window state persistence, when the platform provides it
            if let Some(_storage) = cc.storage {
                info!("Persistence storage available");
            }

            match FareLedgerApp::new(cc) {
                Ok(app) => {
                    info!("Successfully initialized Fare Ledger app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    // Convert anyhow::Error to eframe::Error
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
