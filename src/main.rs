mod domain;
mod infrastructure;
mod presentation;

use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([540.0, 680.0])
            .with_title("Bluetooth Browser"),
        ..Default::default()
    };

    eframe::run_native(
        "Bluetooth Browser",
        options,
        Box::new(|cc| Ok(Box::new(presentation::app::BrowserApp::new(cc)))),
    )
}
