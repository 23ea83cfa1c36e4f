mod app;
mod generator;
mod history;
mod qr;
mod settings;
mod strength;
mod timer;

use app::PassForgeApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = NativeOptions::default();
    eframe::run_native(
        "PassForge",
        native_options,
        Box::new(|cc| Ok(Box::new(PassForgeApp::new(cc)))),
    )
}
