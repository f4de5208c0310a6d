/// A remote Bluetooth device as reported by the platform adapter.
///
/// The hardware address is the identity of a device; two records with the
/// same address describe the same peripheral. The display name is whatever
/// the radio reported at the time and may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    pub address: u64,
    pub name: Option<String>,
}

impl DeviceRecord {
    pub fn new(address: u64, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            address,
            name: if name.is_empty() { None } else { Some(name) },
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// Format the 48-bit address as `AA:BB:CC:DD:EE:FF`.
    pub fn address_string(&self) -> String {
        let b = self.address.to_be_bytes();
        format!(
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            b[2], b[3], b[4], b[5], b[6], b[7]
        )
    }
}

/// Scan lifecycle as confirmed by the platform, not as requested by us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscoveryState {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

/// Raw notifications delivered by the adapter backend's event subscription.
#[derive(Debug, Clone)]
pub enum ScanEvent {
    Started,
    Finished,
    DeviceFound(DeviceRecord),
}

/// Commands sent from the UI to the Bluetooth worker.
#[derive(Debug, Clone)]
pub enum AdapterCommand {
    RequestAccess,
    StartScan,
    StopScan,
    RefreshBonded,
    Bind,
    Unbind,
}

/// Result of asking the platform for radio access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessState {
    #[default]
    Unknown,
    Allowed,
    Denied,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    AccessState(AccessState),
    LogMessage(StatusMessage),
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub message: String,
    pub severity: MessageSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSeverity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Devices,
    Settings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_string() {
        let record = DeviceRecord::new(0x0000_AABB_CCDD_EEFF, "Headset");
        assert_eq!(record.address_string(), "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn test_empty_name_is_none() {
        let record = DeviceRecord::new(0x1234, "");
        assert_eq!(record.name, None);
        assert_eq!(record.display_name(), "Unknown");
    }
}
