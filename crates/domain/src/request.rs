//! Outbound request envelopes for the vendor API.
//!
//! Every `POST` to the vendor carries a `requestId` alongside an
//! operation-specific `payload`. The id only helps vendor-side tracing;
//! nothing here relies on it being unique.

use serde::Serialize;

use crate::power::PowerState;

/// Capability type addressed when switching power.
pub const ON_OFF_CAPABILITY: &str = "devices.capabilities.on_off";

/// Capability instance addressed when switching power.
pub const POWER_SWITCH_INSTANCE: &str = "powerSwitch";

/// `{requestId, payload}` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest<P> {
    pub request_id: String,
    pub payload: P,
}

impl<P> ApiRequest<P> {
    /// Wrap `payload` with a freshly generated request id.
    #[must_use]
    pub fn new(payload: P) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            payload,
        }
    }
}

/// Payload of a device state query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatePayload {
    pub sku: String,
    pub device: String,
}

impl StatePayload {
    #[must_use]
    pub fn new(sku: impl Into<String>, device: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            device: device.into(),
        }
    }
}

/// Capability being changed by a control request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capability {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub instance: &'static str,
    pub value: PowerState,
}

impl Capability {
    /// The `powerSwitch` instance of the `on_off` capability.
    #[must_use]
    pub fn power_switch(state: PowerState) -> Self {
        Self {
            kind: ON_OFF_CAPABILITY,
            instance: POWER_SWITCH_INSTANCE,
            value: state,
        }
    }
}

/// Payload of a device control request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlPayload {
    pub sku: String,
    pub device: String,
    pub capability: Capability,
}

impl ControlPayload {
    /// Build a power switch command for one device.
    #[must_use]
    pub fn power(sku: impl Into<String>, device: impl Into<String>, state: PowerState) -> Self {
        Self {
            sku: sku.into(),
            device: device.into(),
            capability: Capability::power_switch(state),
        }
    }
}
