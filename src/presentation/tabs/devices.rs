use crate::domain::models::{
    AccessState, AdapterCommand, DeviceRecord, DiscoveryState, MessageSeverity,
};
use crate::presentation::app::BrowserApp;
use crate::presentation::components::Components;
use eframe::egui;

pub fn render(app: &mut BrowserApp, ui: &mut egui::Ui) {
    Components::heading(ui, "Bluetooth Browser");
    ui.add_space(16.0);

    ui_access_panel(app, ui);
    ui.add_space(12.0);

    ui_discovery_panel(app, ui);
    ui.add_space(12.0);

    ui_bonded_panel(app, ui);
    ui.add_space(12.0);

    ui_status_panel(app, ui);
}

fn ui_access_panel(app: &mut BrowserApp, ui: &mut egui::Ui) {
    Components::card(ui, "Adapter Access", |ui| {
        let (status_text, bg_color, text_color) = match app.access_state {
            AccessState::Allowed => (
                "ACCESS GRANTED",
                egui::Color32::from_rgb(0, 180, 0),
                egui::Color32::BLACK,
            ),
            AccessState::Denied => (
                "ACCESS DENIED",
                egui::Color32::from_rgb(255, 50, 50),
                egui::Color32::WHITE,
            ),
            AccessState::Unknown => (
                "ACCESS NOT REQUESTED",
                egui::Color32::from_gray(110),
                egui::Color32::WHITE,
            ),
        };
        Components::status_banner(ui, status_text, bg_color, text_color);

        ui.add_space(8.0);
        if ui.button("Request Access").clicked() {
            let _ = app.commands.send(AdapterCommand::RequestAccess);
        }
    });
}

fn ui_discovery_panel(app: &mut BrowserApp, ui: &mut egui::Ui) {
    let state = app.session.discovery_state();
    let discovered = app.session.discovered_devices();

    Components::card(ui, "Discovery", |ui| {
        let (status_text, bg_color, text_color) = match state {
            DiscoveryState::NotStarted => (
                "NOT STARTED",
                egui::Color32::from_gray(110),
                egui::Color32::WHITE,
            ),
            DiscoveryState::InProgress => (
                "SCANNING...",
                egui::Color32::from_rgb(255, 200, 0),
                egui::Color32::BLACK,
            ),
            DiscoveryState::Finished => (
                "FINISHED",
                egui::Color32::from_rgb(0, 180, 0),
                egui::Color32::BLACK,
            ),
        };
        Components::status_banner(ui, status_text, bg_color, text_color);

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Discover").clicked() {
                let _ = app.commands.send(AdapterCommand::StartScan);
            }
            if state == DiscoveryState::InProgress {
                if ui.button("Stop").clicked() {
                    let _ = app.commands.send(AdapterCommand::StopScan);
                }
                ui.spinner();
            }
        });

        if !discovered.is_empty() {
            ui.separator();
            ui.label(format!("Nearby devices ({}):", discovered.len()));
            device_list(ui, "discovered_list", &discovered);
        }
    });
}

fn ui_bonded_panel(app: &mut BrowserApp, ui: &mut egui::Ui) {
    let bonded = app.session.bonded_devices();

    Components::card(ui, "Bonded Devices", |ui| {
        if ui.button("Refresh Bonded").clicked() {
            let _ = app.commands.send(AdapterCommand::RefreshBonded);
        }

        if bonded.is_empty() {
            ui.label("No bonded devices listed.");
        } else {
            ui.separator();
            device_list(ui, "bonded_list", &bonded);
        }
    });
}

fn ui_status_panel(app: &mut BrowserApp, ui: &mut egui::Ui) {
    let current_msg = app.status_message.clone();
    if let Some(msg) = current_msg {
        Components::card(ui, "Status", |ui| {
            let color = match msg.severity {
                MessageSeverity::Info => egui::Color32::from_rgb(60, 120, 255),
                MessageSeverity::Success => egui::Color32::from_rgb(0, 150, 0),
                MessageSeverity::Warning => egui::Color32::from_rgb(200, 150, 0),
                MessageSeverity::Error => egui::Color32::RED,
            };

            ui.label(egui::RichText::new(&msg.message).color(color).strong());
        });
    }
}

fn device_list(ui: &mut egui::Ui, id: &str, devices: &[DeviceRecord]) {
    egui::ScrollArea::vertical()
        .id_salt(id)
        .max_height(140.0)
        .show(ui, |ui| {
            for device in devices {
                ui.horizontal(|ui| {
                    ui.label(device.display_name());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(device.address_string());
                    });
                });
            }
        });
}
