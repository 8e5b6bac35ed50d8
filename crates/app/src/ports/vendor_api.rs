//! Vendor API port — the cloud service that owns the devices.

use std::future::Future;

use goveebridge_domain::error::VendorError;
use goveebridge_domain::power::PowerState;
use goveebridge_domain::response::ApiResponse;

/// Client for the vendor's device REST API.
///
/// Every method returns the decoded vendor body as-is. Failures the vendor
/// reports through the body's `code` come back as `Ok`. A non-success HTTP
/// status, a transport failure or an undecodable body produces
/// [`VendorError`].
pub trait VendorApi {
    /// List every device registered to the account.
    fn list_devices(&self) -> impl Future<Output = Result<ApiResponse, VendorError>> + Send;

    /// Query the current state of one device.
    fn get_device_state(
        &self,
        sku: &str,
        device_id: &str,
    ) -> impl Future<Output = Result<ApiResponse, VendorError>> + Send;

    /// Switch a device on or off.
    fn set_power(
        &self,
        sku: &str,
        device_id: &str,
        state: PowerState,
    ) -> impl Future<Output = Result<ApiResponse, VendorError>> + Send;
}
