mod app;
mod upload;
mod utils;

use app::SarasTutor;
use eframe::CreationContext;
use std::path::PathBuf;
use upload::UploadStore;

const UPLOAD_DIR: &str = "uploads";

fn main() {
    let store = match UploadStore::new(PathBuf::from(UPLOAD_DIR)) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to create upload directory '{}': {}", UPLOAD_DIR, e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([600.0, 700.0])
            .with_min_inner_size([400.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "Saras - AI Tutor",
        options,
        Box::new(move |cc: &CreationContext| Box::new(SarasTutor::new(cc, store))),
    ) {
        eprintln!("Failed to start UI: {}", e);
    }
}
