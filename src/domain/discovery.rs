//! Discovery Session Manager
//!
//! Tracks the lifecycle of a Bluetooth scan as a small state machine fed by
//! platform events, and accumulates the devices those events report.
//!
//! The manager never transitions state on its own: `start`/`stop` requests go
//! to the adapter backend and state only moves when the platform confirms the
//! change through an event. Observers (the UI render loop) read cloned
//! snapshots, so a reader and the event pump can interleave freely.

use crate::domain::models::{DeviceRecord, DiscoveryState, ScanEvent};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

#[derive(Debug, Default)]
struct SessionState {
    discovery: DiscoveryState,
    discovered: Vec<DeviceRecord>,
    bonded: Vec<DeviceRecord>,
    bound: bool,
}

/// Canonical scan state, shared between the Bluetooth worker (writer) and the
/// UI (reader).
#[derive(Debug, Default)]
pub struct DiscoverySession {
    state: Mutex<SessionState>,
}

impl DiscoverySession {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().expect("session state poisoned")
    }

    /// Activate event ingestion. Safe to call repeatedly.
    pub fn bind(&self) {
        let mut state = self.state();
        if !state.bound {
            state.bound = true;
            debug!("Event subscription bound");
        }
    }

    /// Deactivate event ingestion. Events delivered while unbound are
    /// dropped without touching published state. Safe to call repeatedly,
    /// including before the first `bind`.
    pub fn unbind(&self) {
        let mut state = self.state();
        if state.bound {
            state.bound = false;
            debug!("Event subscription unbound");
        }
    }

    pub fn is_bound(&self) -> bool {
        self.state().bound
    }

    /// Ingest one platform event.
    pub fn handle_event(&self, event: ScanEvent) {
        let mut state = self.state();
        if !state.bound {
            debug!(?event, "Dropping scan event, subscription not bound");
            return;
        }

        match event {
            ScanEvent::Started => {
                state.discovery = DiscoveryState::InProgress;
                info!("Discovery in progress");
            }
            ScanEvent::Finished => {
                state.discovery = DiscoveryState::Finished;
                info!("Discovery finished");
            }
            ScanEvent::DeviceFound(device) => {
                // At most one entry per address; repeat sightings are dropped.
                if !state.discovered.iter().any(|d| d.address == device.address) {
                    info!(
                        address = %device.address_string(),
                        name = device.display_name(),
                        "Device found"
                    );
                    state.discovered.push(device);
                }
            }
        }
    }

    /// Replace the bonded list with a fresh platform snapshot. `None` means
    /// the platform had nothing to report and the previous list is kept.
    pub fn apply_bonded(&self, snapshot: Option<Vec<DeviceRecord>>) {
        if let Some(devices) = snapshot {
            let mut state = self.state();
            info!(count = devices.len(), "Bonded list refreshed");
            state.bonded = devices;
        } else {
            debug!("Bonded query returned nothing, keeping previous list");
        }
    }

    pub fn discovery_state(&self) -> DiscoveryState {
        self.state().discovery
    }

    pub fn discovered_devices(&self) -> Vec<DeviceRecord> {
        self.state().discovered.clone()
    }

    pub fn bonded_devices(&self) -> Vec<DeviceRecord> {
        self.state().bonded.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(address: u64, name: &str) -> DeviceRecord {
        DeviceRecord::new(address, name)
    }

    fn bound_session() -> DiscoverySession {
        let session = DiscoverySession::new();
        session.bind();
        session
    }

    #[test]
    fn test_duplicate_devices_are_deduplicated() {
        let session = bound_session();
        session.handle_event(ScanEvent::DeviceFound(device(1, "A")));
        session.handle_event(ScanEvent::DeviceFound(device(2, "B")));
        session.handle_event(ScanEvent::DeviceFound(device(1, "A")));
        session.handle_event(ScanEvent::DeviceFound(device(1, "A-renamed")));

        let discovered = session.discovered_devices();
        assert_eq!(discovered.len(), 2);
        assert_eq!(discovered[0], device(1, "A"));
        assert_eq!(discovered[1], device(2, "B"));
    }

    #[test]
    fn test_insertion_order_is_first_seen_order() {
        let session = bound_session();
        for address in [30, 10, 20, 10, 30] {
            session.handle_event(ScanEvent::DeviceFound(device(address, "")));
        }

        let order: Vec<u64> = session
            .discovered_devices()
            .iter()
            .map(|d| d.address)
            .collect();
        assert_eq!(order, vec![30, 10, 20]);
    }

    #[test]
    fn test_state_machine_transitions() {
        let session = bound_session();
        assert_eq!(session.discovery_state(), DiscoveryState::NotStarted);

        session.handle_event(ScanEvent::Started);
        assert_eq!(session.discovery_state(), DiscoveryState::InProgress);

        session.handle_event(ScanEvent::Finished);
        assert_eq!(session.discovery_state(), DiscoveryState::Finished);

        // A finished scan can be restarted.
        session.handle_event(ScanEvent::Started);
        assert_eq!(session.discovery_state(), DiscoveryState::InProgress);
    }

    #[test]
    fn test_duplicate_start_events_are_idempotent() {
        let session = bound_session();
        session.handle_event(ScanEvent::Started);
        session.handle_event(ScanEvent::Started);
        assert_eq!(session.discovery_state(), DiscoveryState::InProgress);
    }

    #[test]
    fn test_bonded_none_keeps_previous_list() {
        let session = bound_session();
        session.apply_bonded(Some(vec![device(1, "A"), device(2, "B")]));
        session.apply_bonded(None);

        let bonded = session.bonded_devices();
        assert_eq!(bonded, vec![device(1, "A"), device(2, "B")]);
    }

    #[test]
    fn test_bonded_refresh_replaces_not_accumulates() {
        let session = bound_session();
        session.apply_bonded(Some(vec![device(1, "A"), device(2, "B")]));
        session.apply_bonded(Some(vec![device(2, "B"), device(3, "C")]));

        let bonded = session.bonded_devices();
        assert_eq!(bonded, vec![device(2, "B"), device(3, "C")]);
    }

    #[test]
    fn test_events_ignored_while_unbound() {
        let session = DiscoverySession::new();
        session.handle_event(ScanEvent::Started);
        session.handle_event(ScanEvent::DeviceFound(device(1, "A")));
        assert_eq!(session.discovery_state(), DiscoveryState::NotStarted);
        assert!(session.discovered_devices().is_empty());

        session.bind();
        session.handle_event(ScanEvent::Started);
        session.unbind();
        session.handle_event(ScanEvent::Finished);
        session.handle_event(ScanEvent::DeviceFound(device(1, "A")));

        // The unbound tail had no observable effect.
        assert_eq!(session.discovery_state(), DiscoveryState::InProgress);
        assert!(session.discovered_devices().is_empty());
    }

    #[test]
    fn test_bind_unbind_idempotent_cycles() {
        let session = DiscoverySession::new();
        session.unbind();
        session.unbind();
        assert!(!session.is_bound());

        for _ in 0..3 {
            session.bind();
            session.bind();
            assert!(session.is_bound());
            session.unbind();
            session.unbind();
            assert!(!session.is_bound());
        }
    }
}
