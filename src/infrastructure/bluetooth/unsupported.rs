//! Fallback backend for platforms without a Bluetooth implementation.
//!
//! Scan requests fail with a descriptive error, the bonded query reports no
//! data (which leaves any previous snapshot untouched), and access requests
//! come back denied.

use crate::domain::discovery::DiscoverySession;
use crate::domain::models::{AccessState, DeviceRecord};
use anyhow::Result;
use std::sync::Arc;

pub struct UnsupportedBackend {
    _session: Arc<DiscoverySession>,
}

impl UnsupportedBackend {
    pub fn new(session: Arc<DiscoverySession>) -> Self {
        Self { _session: session }
    }

    pub fn start_scan(&mut self, _show_unnamed: bool) -> Result<()> {
        anyhow::bail!("Bluetooth discovery is not supported on this platform")
    }

    pub fn cancel_scan(&mut self) -> Result<()> {
        Ok(())
    }

    pub async fn bonded_devices(&self) -> Result<Option<Vec<DeviceRecord>>> {
        Ok(None)
    }

    pub async fn request_access() -> Result<AccessState> {
        Ok(AccessState::Denied)
    }
}
