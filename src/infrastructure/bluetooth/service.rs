//! Bluetooth Service Module
//!
//! Worker-side coordinator: drains commands from the UI and drives the
//! platform backend. Every platform failure is absorbed here as a log line
//! plus a status message; nothing is retried and nothing escalates.

use crate::domain::discovery::DiscoverySession;
use crate::domain::models::{AdapterCommand, AppEvent, MessageSeverity, StatusMessage};
use crate::domain::settings::SettingsService;
use crate::infrastructure::bluetooth::PlatformBackend;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::error;

pub struct BluetoothService {
    backend: PlatformBackend,
    session: Arc<DiscoverySession>,
    app_events: mpsc::UnboundedSender<AppEvent>,
    settings: Arc<Mutex<SettingsService>>,
}

impl BluetoothService {
    pub fn new(
        session: Arc<DiscoverySession>,
        app_events: mpsc::UnboundedSender<AppEvent>,
        settings: Arc<Mutex<SettingsService>>,
    ) -> Self {
        Self {
            backend: PlatformBackend::new(session.clone()),
            session,
            app_events,
            settings,
        }
    }

    /// Run until the command channel closes (the UI dropped its sender).
    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<AdapterCommand>) {
        while let Some(command) = commands.recv().await {
            self.handle_command(command).await;
        }

        let _ = self.backend.cancel_scan();
    }

    async fn handle_command(&mut self, command: AdapterCommand) {
        match command {
            AdapterCommand::Bind => {
                self.session.bind();
            }
            AdapterCommand::Unbind => {
                // Foreground-paused: any running scan goes down with the
                // subscription.
                if let Err(e) = self.backend.cancel_scan() {
                    error!("Failed to cancel scan: {}", e);
                }
                self.session.unbind();
            }
            AdapterCommand::StartScan => {
                let show_unnamed = self
                    .settings
                    .lock()
                    .map(|s| s.get().show_unnamed_devices)
                    .unwrap_or(false);

                match self.backend.start_scan(show_unnamed) {
                    Ok(()) => self.status("Scanning for nearby devices...", MessageSeverity::Info),
                    Err(e) => {
                        error!("Failed to start scan: {}", e);
                        self.status(format!("Scan failed: {}", e), MessageSeverity::Error);
                    }
                }
            }
            AdapterCommand::StopScan => {
                if let Err(e) = self.backend.cancel_scan() {
                    error!("Failed to stop scan: {}", e);
                    self.status(format!("Stop failed: {}", e), MessageSeverity::Error);
                }
            }
            AdapterCommand::RefreshBonded => match self.backend.bonded_devices().await {
                Ok(snapshot) => {
                    let count = snapshot.as_ref().map(Vec::len);
                    self.session.apply_bonded(snapshot);
                    match count {
                        Some(n) => self
                            .status(format!("{} bonded device(s)", n), MessageSeverity::Success),
                        None => self.status(
                            "Bonded devices unavailable, keeping previous list",
                            MessageSeverity::Warning,
                        ),
                    }
                }
                Err(e) => {
                    // Query failure leaves the previous snapshot in place.
                    error!("Bonded device query failed: {}", e);
                    self.status(
                        format!("Bonded refresh failed: {}", e),
                        MessageSeverity::Error,
                    );
                }
            },
            AdapterCommand::RequestAccess => match PlatformBackend::request_access().await {
                Ok(state) => {
                    let _ = self.app_events.send(AppEvent::AccessState(state));
                }
                Err(e) => {
                    error!("Radio access request failed: {}", e);
                    self.status(
                        format!("Access request failed: {}", e),
                        MessageSeverity::Error,
                    );
                }
            },
        }
    }

    fn status(&self, message: impl Into<String>, severity: MessageSeverity) {
        let _ = self.app_events.send(AppEvent::LogMessage(StatusMessage {
            message: message.into(),
            severity,
        }));
    }
}
