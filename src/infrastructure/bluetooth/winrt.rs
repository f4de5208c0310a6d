//! WinRT Backend
//!
//! Talks to the Windows Bluetooth stack: advertisement watcher for
//! discovery, device enumeration for the bonded list, radio access for the
//! permission prompt. Watcher callbacks run on OS threads and feed the
//! discovery session directly.
//!
//! The watcher has no "started" callback of its own, so a `Started` event is
//! synthesized once `Start()` returns. The `Stopped` callback fires both for
//! natural teardown and for manual cancellation, which guarantees a
//! `Finished` event reaches the session in either case.

use crate::domain::discovery::DiscoverySession;
use crate::domain::models::{AccessState, DeviceRecord, ScanEvent};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use windows::Devices::Bluetooth::Advertisement::{
    BluetoothLEAdvertisementReceivedEventArgs, BluetoothLEAdvertisementWatcher,
    BluetoothLEAdvertisementWatcherStoppedEventArgs, BluetoothLEScanningMode,
};
use windows::Devices::Bluetooth::BluetoothDevice;
use windows::Devices::Enumeration::DeviceInformation;
use windows::Devices::Radios::{Radio, RadioAccessStatus};
use windows::Foundation::TypedEventHandler;

pub struct WinrtBackend {
    watcher: Option<BluetoothLEAdvertisementWatcher>,
    session: Arc<DiscoverySession>,
}

impl WinrtBackend {
    pub fn new(session: Arc<DiscoverySession>) -> Self {
        Self {
            watcher: None,
            session,
        }
    }

    /// Begin watching for advertisements.
    ///
    /// A scan already in progress is left running; the platform treats the
    /// repeated request as a no-op and no further `Started` event is sent.
    pub fn start_scan(&mut self, show_unnamed: bool) -> Result<()> {
        if self.watcher.is_some() {
            return Ok(());
        }

        info!("Starting Bluetooth scan");
        let watcher = BluetoothLEAdvertisementWatcher::new()?;
        watcher.SetScanningMode(BluetoothLEScanningMode::Active)?;

        let session = self.session.clone();
        let received = TypedEventHandler::new(
            move |_: windows::core::Ref<BluetoothLEAdvertisementWatcher>,
                  args: windows::core::Ref<BluetoothLEAdvertisementReceivedEventArgs>| {
                if let Some(args) = args.as_ref() {
                    let name = args.Advertisement()?.LocalName()?.to_string();
                    if !name.is_empty() || show_unnamed {
                        let address = args.BluetoothAddress()?;
                        session.handle_event(ScanEvent::DeviceFound(DeviceRecord::new(
                            address, name,
                        )));
                    }
                }
                Ok(())
            },
        );

        let session = self.session.clone();
        let stopped = TypedEventHandler::new(
            move |_: windows::core::Ref<BluetoothLEAdvertisementWatcher>,
                  _: windows::core::Ref<BluetoothLEAdvertisementWatcherStoppedEventArgs>| {
                session.handle_event(ScanEvent::Finished);
                Ok(())
            },
        );

        watcher.Received(&received)?;
        watcher.Stopped(&stopped)?;
        watcher.Start()?;
        self.watcher = Some(watcher);

        self.session.handle_event(ScanEvent::Started);
        Ok(())
    }

    /// Stop the watcher if one is running. The `Finished` event arrives
    /// through the `Stopped` callback, not synchronously here.
    pub fn cancel_scan(&mut self) -> Result<()> {
        if let Some(watcher) = self.watcher.take() {
            info!("Stopping Bluetooth scan");
            watcher.Stop()?;
        }
        Ok(())
    }

    /// Enumerate devices the platform has paired with. `None` is never
    /// returned here; a query failure propagates as an error instead.
    pub async fn bonded_devices(&self) -> Result<Option<Vec<DeviceRecord>>> {
        let selector = BluetoothDevice::GetDeviceSelectorFromPairingState(true)?;
        let infos = DeviceInformation::FindAllAsyncAqsFilter(&selector)?.await?;

        let mut devices = Vec::new();
        for i in 0..infos.Size()? {
            let info = infos.GetAt(i)?;
            let device = BluetoothDevice::FromIdAsync(&info.Id()?)?.await?;
            let name = device.Name()?.to_string();
            devices.push(DeviceRecord::new(device.BluetoothAddress()?, name));
        }

        Ok(Some(devices))
    }

    pub async fn request_access() -> Result<AccessState> {
        let status = Radio::RequestAccessAsync()?.await?;
        Ok(match status {
            RadioAccessStatus::Allowed => AccessState::Allowed,
            _ => AccessState::Denied,
        })
    }
}

impl Drop for WinrtBackend {
    fn drop(&mut self) {
        let _ = self.cancel_scan();
    }
}
