//! Shared application state for axum handlers.

use std::sync::Arc;

use goveebridge_app::ports::VendorApi;
use goveebridge_app::services::device_service::DeviceService;

/// Application state shared across all axum handlers.
///
/// Generic over the vendor client to avoid dynamic dispatch.
/// `Clone` is implemented manually so the client itself does not need to be
/// `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<V> {
    /// Device use-cases.
    pub device_service: Arc<DeviceService<V>>,
}

impl<V> Clone for AppState<V> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
        }
    }
}

impl<V> AppState<V>
where
    V: VendorApi + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(device_service: DeviceService<V>) -> Self {
        Self {
            device_service: Arc::new(device_service),
        }
    }
}
