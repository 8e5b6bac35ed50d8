//! Device service — use-cases for vendor devices.

use goveebridge_domain::device::DeviceListing;
use goveebridge_domain::error::VendorError;
use goveebridge_domain::power::PowerState;
use goveebridge_domain::response::ApiResponse;

use crate::ports::VendorApi;

/// Application service in front of the vendor API.
///
/// Holds no state of its own; every call maps to exactly one vendor request.
pub struct DeviceService<V> {
    vendor: V,
}

impl<V: VendorApi> DeviceService<V> {
    /// Create a new service backed by the given vendor client.
    pub fn new(vendor: V) -> Self {
        Self { vendor }
    }

    /// List devices, trimmed to `sku`, `device` and `deviceName`.
    ///
    /// # Errors
    ///
    /// Returns [`VendorError`] when the vendor cannot be reached.
    #[tracing::instrument(skip(self))]
    pub async fn list_devices(&self) -> Result<DeviceListing, VendorError> {
        let response = self.vendor.list_devices().await?;
        let listing = DeviceListing::from_response(&response);
        tracing::debug!(
            count = listing.devices.len(),
            code = ?listing.code,
            "listed vendor devices"
        );
        Ok(listing)
    }

    /// Fetch the vendor's full state report for one device.
    ///
    /// # Errors
    ///
    /// Returns [`VendorError`] when the vendor cannot be reached.
    #[tracing::instrument(skip(self))]
    pub async fn device_state(
        &self,
        sku: &str,
        device_id: &str,
    ) -> Result<ApiResponse, VendorError> {
        self.vendor.get_device_state(sku, device_id).await
    }

    /// Switch a device to `state`. Repeating the call is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`VendorError`] when the vendor cannot be reached.
    #[tracing::instrument(skip(self))]
    pub async fn set_power(
        &self,
        sku: &str,
        device_id: &str,
        state: PowerState,
    ) -> Result<ApiResponse, VendorError> {
        self.vendor.set_power(sku, device_id, state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goveebridge_domain::error::VendorOperation;
    use serde_json::{Value, json};
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        State(String, String),
        Power(String, String, PowerState),
    }

    #[derive(Clone)]
    struct RecordingVendor {
        reply: Option<Value>,
        calls: Arc<Mutex<Vec<Call>>>,
    }

    impl RecordingVendor {
        fn replying(body: Value) -> Self {
            Self {
                reply: Some(body),
                calls: Arc::default(),
            }
        }

        fn unreachable() -> Self {
            Self {
                reply: None,
                calls: Arc::default(),
            }
        }

        fn respond(
            &self,
            call: Call,
            operation: VendorOperation,
        ) -> impl Future<Output = Result<ApiResponse, VendorError>> + Send {
            self.calls.lock().unwrap().push(call);
            let result = self
                .reply
                .clone()
                .map(ApiResponse::new)
                .ok_or_else(|| VendorError::unavailable(operation, "connection refused"));
            async { result }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl VendorApi for RecordingVendor {
        fn list_devices(&self) -> impl Future<Output = Result<ApiResponse, VendorError>> + Send {
            self.respond(Call::List, VendorOperation::ListDevices)
        }

        fn get_device_state(
            &self,
            sku: &str,
            device_id: &str,
        ) -> impl Future<Output = Result<ApiResponse, VendorError>> + Send {
            self.respond(
                Call::State(sku.to_string(), device_id.to_string()),
                VendorOperation::DeviceState,
            )
        }

        fn set_power(
            &self,
            sku: &str,
            device_id: &str,
            state: PowerState,
        ) -> impl Future<Output = Result<ApiResponse, VendorError>> + Send {
            self.respond(
                Call::Power(sku.to_string(), device_id.to_string(), state),
                VendorOperation::PowerControl,
            )
        }
    }

    #[tokio::test]
    async fn should_project_listed_devices() {
        let service = DeviceService::new(RecordingVendor::replying(json!({
            "code": 200,
            "data": [{ "sku": "S1", "device": "D1", "deviceName": "Lamp", "extra": "x" }]
        })));

        let listing = service.list_devices().await.unwrap();

        assert_eq!(listing.code, Some(200));
        assert_eq!(listing.devices.len(), 1);
        assert_eq!(listing.devices[0].sku, "S1");
        assert_eq!(listing.devices[0].device, "D1");
        assert_eq!(listing.devices[0].device_name, "Lamp");
    }

    #[tokio::test]
    async fn should_propagate_vendor_error_when_listing() {
        let service = DeviceService::new(RecordingVendor::unreachable());

        let err = service.list_devices().await.unwrap_err();

        assert_eq!(err.operation(), VendorOperation::ListDevices);
    }

    #[tokio::test]
    async fn should_return_device_state_unchanged() {
        let body = json!({ "code": 200, "payload": { "capabilities": [] } });
        let vendor = RecordingVendor::replying(body.clone());
        let service = DeviceService::new(vendor.clone());

        let response = service.device_state("S1", "D1").await.unwrap();

        assert_eq!(response.as_value(), &body);
        assert_eq!(
            vendor.calls(),
            vec![Call::State("S1".to_string(), "D1".to_string())]
        );
    }

    #[tokio::test]
    async fn should_forward_requested_power_state() {
        let vendor = RecordingVendor::replying(json!({ "code": 200 }));
        let service = DeviceService::new(vendor.clone());

        service.set_power("S1", "D1", PowerState::On).await.unwrap();
        service.set_power("S1", "D1", PowerState::Off).await.unwrap();

        assert_eq!(
            vendor.calls(),
            vec![
                Call::Power("S1".to_string(), "D1".to_string(), PowerState::On),
                Call::Power("S1".to_string(), "D1".to_string(), PowerState::Off),
            ]
        );
    }

    #[tokio::test]
    async fn should_propagate_vendor_error_when_switching() {
        let service = DeviceService::new(RecordingVendor::unreachable());

        let err = service
            .set_power("S1", "D1", PowerState::Off)
            .await
            .unwrap_err();

        assert_eq!(err.operation(), VendorOperation::PowerControl);
    }
}
