//! Bluetooth Module
//!
//! Adapter-facing side of device discovery.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  BluetoothService                     │
//! │        (worker loop: drains UI commands)              │
//! └───────────────────────┬──────────────────────────────┘
//!                         │ drives
//!                         ▼
//!                  ┌─────────────┐   scan events   ┌──────────────────┐
//!                  │   backend   │ ──────────────▶ │ DiscoverySession │
//!                  │             │                 │                  │
//!                  │ - scan      │                 │ - state machine  │
//!                  │ - bonded    │                 │ - device lists   │
//!                  │ - access    │                 │   (domain layer) │
//!                  └─────────────┘                 └──────────────────┘
//! ```
//!
//! The backend is platform-selected at compile time: WinRT watchers on
//! Windows, a stub that reports the capability as unavailable elsewhere.
//! Its callbacks deliver raw [`crate::domain::models::ScanEvent`]s straight
//! into the session, which decides whether the subscription is bound before
//! touching any published state.

pub mod service;

#[cfg(windows)]
mod winrt;
#[cfg(windows)]
use winrt::WinrtBackend as PlatformBackend;

#[cfg(not(windows))]
mod unsupported;
#[cfg(not(windows))]
use unsupported::UnsupportedBackend as PlatformBackend;

// Re-export main service for convenience
pub use service::BluetoothService;
