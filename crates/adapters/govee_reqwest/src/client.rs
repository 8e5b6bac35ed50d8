//! reqwest-backed implementation of the [`VendorApi`] port.

use goveebridge_app::ports::VendorApi;
use goveebridge_domain::error::{VendorError, VendorOperation};
use goveebridge_domain::power::PowerState;
use goveebridge_domain::request::{ApiRequest, ControlPayload, StatePayload};
use goveebridge_domain::response::ApiResponse;

use crate::config::GoveeConfig;

const API_KEY_HEADER: &str = "Govee-API-Key";
const DEVICES_PATH: &str = "/router/api/v1/user/devices";
const DEVICE_STATE_PATH: &str = "/router/api/v1/device/state";
const DEVICE_CONTROL_PATH: &str = "/router/api/v1/device/control";

/// Client for the Govee cloud API.
///
/// Stateless apart from the key and the connection pool inside
/// [`reqwest::Client`]; share one instance for the process lifetime.
pub struct GoveeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GoveeClient {
    /// Wrap an existing HTTP client. Prefer [`GoveeConfig::build`], which
    /// validates the configuration first.
    #[must_use]
    pub fn new(config: GoveeConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        operation: VendorOperation,
    ) -> Result<ApiResponse, VendorError> {
        let response = request
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|err| VendorError::unavailable(operation, err))?
            .error_for_status()
            .map_err(|err| {
                tracing::warn!(status = ?err.status(), "vendor responded with non-success status");
                VendorError::unavailable(operation, err)
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| VendorError::unavailable(operation, err))?;
        tracing::debug!(%status, bytes = body.len(), "vendor responded");

        serde_json::from_slice(&body).map_err(|err| VendorError::unavailable(operation, err))
    }
}

impl VendorApi for GoveeClient {
    #[tracing::instrument(skip(self))]
    async fn list_devices(&self) -> Result<ApiResponse, VendorError> {
        let request = self.http.get(self.endpoint(DEVICES_PATH));
        self.send(request, VendorOperation::ListDevices).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_device_state(
        &self,
        sku: &str,
        device_id: &str,
    ) -> Result<ApiResponse, VendorError> {
        let body = ApiRequest::new(StatePayload::new(sku, device_id));
        tracing::debug!(request_id = %body.request_id, "querying device state");

        let request = self.http.post(self.endpoint(DEVICE_STATE_PATH)).json(&body);
        self.send(request, VendorOperation::DeviceState).await
    }

    #[tracing::instrument(skip(self))]
    async fn set_power(
        &self,
        sku: &str,
        device_id: &str,
        state: PowerState,
    ) -> Result<ApiResponse, VendorError> {
        let body = ApiRequest::new(ControlPayload::power(sku, device_id, state));
        tracing::debug!(request_id = %body.request_id, "switching device power");

        let request = self
            .http
            .post(self.endpoint(DEVICE_CONTROL_PATH))
            .json(&body);
        self.send(request, VendorOperation::PowerControl).await
    }
}
