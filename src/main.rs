mod app;
mod config;
mod viewer;

use eframe::egui;

use crate::app::{App, APP_NAME, APP_WINDOW_HEIGHT, APP_WINDOW_WIDTH};
use crate::config::load_config;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = load_config();
    let application = App::new(&config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([APP_WINDOW_WIDTH, APP_WINDOW_HEIGHT]),
        ..Default::default()
    };
    eframe::run_native(
        format!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION")).as_str(),
        options,
        Box::new(|_cc| Ok(Box::new(application))),
    )
}
