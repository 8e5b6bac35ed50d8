//! JSON handlers for vendor devices.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use goveebridge_app::ports::VendorApi;
use goveebridge_domain::device::DeviceSummary;
use goveebridge_domain::power::PowerState;
use goveebridge_domain::response::ApiResponse;

use crate::api::status_for;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(StatusCode, Json<Vec<DeviceSummary>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(status, json) => (status, json).into_response(),
        }
    }
}

/// Possible responses from the state and control endpoints.
pub enum RelayResponse {
    /// Vendor body, unchanged, under the vendor's status code.
    Relayed(StatusCode, Json<ApiResponse>),
}

impl RelayResponse {
    fn from_vendor(response: ApiResponse) -> Self {
        Self::Relayed(status_for(response.code()), Json(response))
    }
}

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Relayed(status, json) => (status, json).into_response(),
        }
    }
}

/// `GET /devices/list`
pub async fn list<V>(State(state): State<AppState<V>>) -> Result<ListResponse, ApiError>
where
    V: VendorApi + Send + Sync + 'static,
{
    let listing = state
        .device_service
        .list_devices()
        .await
        .map_err(ApiError::DeviceList)?;
    Ok(ListResponse::Ok(
        status_for(listing.code),
        Json(listing.devices),
    ))
}

/// `GET /devices/state/{sku}/{device_id}`
pub async fn device_state<V>(
    State(state): State<AppState<V>>,
    Path((sku, device_id)): Path<(String, String)>,
) -> Result<RelayResponse, ApiError>
where
    V: VendorApi + Send + Sync + 'static,
{
    let response = state
        .device_service
        .device_state(&sku, &device_id)
        .await
        .map_err(ApiError::Vendor)?;
    Ok(RelayResponse::from_vendor(response))
}

/// `GET /devices/control/{sku}/{device_id}/on`
pub async fn turn_on<V>(
    State(state): State<AppState<V>>,
    Path((sku, device_id)): Path<(String, String)>,
) -> Result<RelayResponse, ApiError>
where
    V: VendorApi + Send + Sync + 'static,
{
    switch(&state, &sku, &device_id, PowerState::On).await
}

/// `GET /devices/control/{sku}/{device_id}/off`
pub async fn turn_off<V>(
    State(state): State<AppState<V>>,
    Path((sku, device_id)): Path<(String, String)>,
) -> Result<RelayResponse, ApiError>
where
    V: VendorApi + Send + Sync + 'static,
{
    switch(&state, &sku, &device_id, PowerState::Off).await
}

async fn switch<V>(
    state: &AppState<V>,
    sku: &str,
    device_id: &str,
    power: PowerState,
) -> Result<RelayResponse, ApiError>
where
    V: VendorApi + Send + Sync + 'static,
{
    let response = state
        .device_service
        .set_power(sku, device_id, power)
        .await
        .map_err(ApiError::Vendor)?;
    Ok(RelayResponse::from_vendor(response))
}
