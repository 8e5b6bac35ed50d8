//! Device — a vendor-owned light or plug, addressed by `(sku, device)`.
//!
//! Devices are never stored here. The vendor reports them on every listing
//! and this module trims each report down to what callers need.

use serde::Serialize;
use serde_json::Value;

use crate::response::ApiResponse;

/// Identity and display name of a vendor device.
///
/// Values are copied from the vendor as they are, whatever their JSON type.
/// Fields the vendor omitted are `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSummary {
    /// Product model, e.g. `H6008`.
    pub sku: Value,
    /// Vendor device identifier (usually a MAC-like string).
    pub device: Value,
    pub device_name: Value,
}

impl DeviceSummary {
    /// Project one element of the vendor's device list, dropping every
    /// field other than `sku`, `device` and `deviceName`.
    #[must_use]
    pub fn from_vendor(item: &Value) -> Self {
        let field = |name: &str| item.get(name).cloned().unwrap_or(Value::Null);
        Self {
            sku: field("sku"),
            device: field("device"),
            device_name: field("deviceName"),
        }
    }
}

/// Device list as returned to callers, with the vendor's status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceListing {
    pub code: Option<i64>,
    pub devices: Vec<DeviceSummary>,
}

impl DeviceListing {
    #[must_use]
    pub fn from_response(response: &ApiResponse) -> Self {
        Self {
            code: response.code(),
            devices: response.data().iter().map(DeviceSummary::from_vendor).collect(),
        }
    }
}
