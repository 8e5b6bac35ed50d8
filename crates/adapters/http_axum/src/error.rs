//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use goveebridge_domain::error::VendorError;

/// Body returned when the device list cannot be fetched.
pub const DEVICE_LIST_FAILURE: &str = "Failed to fetch devices from the API";

/// Body returned when any other vendor call cannot be made.
pub const CONNECT_FAILURE: &str = "Failed to connect to the API";

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Maps [`VendorError`] to a `500` with a fixed, cause-free message.
///
/// The variant picks the message; the underlying error is only logged.
#[derive(Debug)]
pub enum ApiError {
    /// `GET /devices/list` failed.
    DeviceList(VendorError),
    /// A state or control call failed.
    Vendor(VendorError),
}

impl ApiError {
    fn message(&self) -> &'static str {
        match self {
            Self::DeviceList(_) => DEVICE_LIST_FAILURE,
            Self::Vendor(_) => CONNECT_FAILURE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.message();
        let (Self::DeviceList(err) | Self::Vendor(err)) = &self;
        tracing::error!(error = %err, cause = ?err, "vendor API unavailable");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { error: message }),
        )
            .into_response()
    }
}
