use crate::presentation::app::BrowserApp;
use crate::presentation::components::Components;
use eframe::egui;

pub fn render(app: &mut BrowserApp, ui: &mut egui::Ui) {
    Components::heading(ui, "Settings");
    ui.add_space(16.0);

    if let Ok(mut settings) = app.settings.lock() {
        let settings_mut = settings.get_mut();

        Components::card(ui, "Scanning", |ui| {
            ui.checkbox(
                &mut settings_mut.show_unnamed_devices,
                "List devices that advertise no name",
            );
        });

        ui.add_space(10.0);

        Components::card(ui, "Logging", |ui| {
            ui.horizontal(|ui| {
                ui.label("Level:");
                egui::ComboBox::from_id_salt("log_level")
                    .selected_text(settings_mut.log_settings.level.clone())
                    .show_ui(ui, |ui| {
                        for level in ["trace", "debug", "info", "warn", "error"] {
                            ui.selectable_value(
                                &mut settings_mut.log_settings.level,
                                level.to_string(),
                                level,
                            );
                        }
                    });
            });
            ui.checkbox(
                &mut settings_mut.log_settings.file_logging_enabled,
                "Write log files",
            );
            ui.label(
                egui::RichText::new("Logging changes take effect on next launch.")
                    .small()
                    .weak(),
            );
        });

        ui.add_space(10.0);

        if ui.button("Save Settings").clicked() {
            if let Err(e) = settings.save() {
                tracing::error!("Failed to save settings: {}", e);
            }
        }
    }
}
