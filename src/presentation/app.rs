use crate::domain::discovery::DiscoverySession;
use crate::domain::models::{
    AccessState, AdapterCommand, AppEvent, MessageSeverity, StatusMessage, Tab,
};
use crate::domain::settings::SettingsService;
use crate::infrastructure::bluetooth::BluetoothService;
use eframe::egui;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

pub struct BrowserApp {
    // Services
    pub(crate) settings: Arc<Mutex<SettingsService>>,
    pub(crate) session: Arc<DiscoverySession>,

    // Bluetooth worker plumbing
    pub(crate) commands: mpsc::UnboundedSender<AdapterCommand>,
    app_events: mpsc::UnboundedReceiver<AppEvent>,

    // State
    pub(crate) access_state: AccessState,
    pub(crate) status_message: Option<StatusMessage>,

    // UI State
    pub(crate) selected_tab: Tab,
    pub(crate) is_dark_mode: bool,
    was_focused: bool,

    // Logging guard
    pub(crate) _logging_guard: Option<crate::infrastructure::logging::LoggingGuard>,
}

impl BrowserApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::new().expect("Failed to load settings");
        let is_dark_mode = settings_service.get().dark_mode;
        crate::presentation::theme::configure_theme(&cc.egui_ctx, is_dark_mode);

        let logging_guard =
            crate::infrastructure::logging::init_logger(&settings_service.get().log_settings)
                .map_err(|e| eprintln!("Failed to initialize logging: {}", e))
                .ok();

        tracing::info!("Starting Bluetooth Browser");

        let settings = Arc::new(Mutex::new(settings_service));
        let session = Arc::new(DiscoverySession::new());
        let (app_tx, app_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();

        let worker_session = session.clone();
        let worker_settings = settings.clone();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime for Bluetooth");

            rt.block_on(BluetoothService::new(worker_session, app_tx, worker_settings).run(cmd_rx));
        });

        Self {
            settings,
            session,
            commands: cmd_tx,
            app_events: app_rx,
            access_state: AccessState::Unknown,
            status_message: None,
            selected_tab: Tab::Devices,
            is_dark_mode,
            was_focused: false,
            _logging_guard: logging_guard,
        }
    }

    fn pump_events(&mut self) {
        while let Ok(event) = self.app_events.try_recv() {
            match event {
                AppEvent::AccessState(state) => {
                    self.access_state = state;
                    self.status_message = Some(match state {
                        AccessState::Allowed => StatusMessage {
                            message: "Radio access granted".to_string(),
                            severity: MessageSeverity::Success,
                        },
                        _ => StatusMessage {
                            message: "Radio access denied".to_string(),
                            severity: MessageSeverity::Warning,
                        },
                    });
                }
                AppEvent::LogMessage(msg) => self.status_message = Some(msg),
            }
        }
    }
}

impl eframe::App for BrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Window focus stands in for the foreground lifecycle: the event
        // subscription is bound while focused, unbound (and any scan
        // cancelled) while in the background.
        let focused = ctx.input(|i| i.raw.focused);
        if focused != self.was_focused {
            self.was_focused = focused;
            let _ = self.commands.send(if focused {
                AdapterCommand::Bind
            } else {
                AdapterCommand::Unbind
            });
        }

        self.pump_events();

        ctx.request_repaint();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.selectable_value(&mut self.selected_tab, Tab::Devices, "Devices");
                ui.selectable_value(&mut self.selected_tab, Tab::Settings, "Settings");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let switch_icon = if self.is_dark_mode {
                        "☀ Light"
                    } else {
                        "🌙 Dark"
                    };
                    if ui.button(switch_icon).clicked() {
                        self.is_dark_mode = !self.is_dark_mode;
                        crate::presentation::theme::configure_theme(ctx, self.is_dark_mode);
                        if let Ok(mut settings) = self.settings.lock() {
                            settings.get_mut().dark_mode = self.is_dark_mode;
                            let _ = settings.save();
                        }
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(520.0);
                    ui.add_space(20.0);

                    use crate::presentation::tabs;
                    match self.selected_tab {
                        Tab::Devices => tabs::devices::render(self, ui),
                        Tab::Settings => tabs::settings::render(self, ui),
                    }

                    ui.add_space(40.0);
                });
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let _ = self.commands.send(AdapterCommand::Unbind);
    }
}
