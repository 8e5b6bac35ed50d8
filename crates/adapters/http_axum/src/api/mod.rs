//! JSON handler modules and the device sub-router.

#[allow(clippy::missing_errors_doc)]
pub mod devices;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;

use goveebridge_app::ports::VendorApi;

use crate::state::AppState;

/// Build the `/devices` routes.
pub fn routes<V>() -> Router<AppState<V>>
where
    V: VendorApi + Send + Sync + 'static,
{
    Router::new()
        .route("/devices/list", get(devices::list::<V>))
        .route(
            "/devices/state/{sku}/{device_id}",
            get(devices::device_state::<V>),
        )
        .route(
            "/devices/control/{sku}/{device_id}/on",
            get(devices::turn_on::<V>),
        )
        .route(
            "/devices/control/{sku}/{device_id}/off",
            get(devices::turn_off::<V>),
        )
}

/// HTTP status to answer with, given the vendor's `code`.
///
/// A missing code means success. A code outside `100..=599` is answered with
/// `502 Bad Gateway`, since the vendor sent something this layer cannot relay
/// faithfully.
pub(crate) fn status_for(code: Option<i64>) -> StatusCode {
    let Some(code) = code else {
        return StatusCode::OK;
    };
    u16::try_from(code)
        .ok()
        .filter(|code| (100..=599).contains(code))
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or_else(|| {
            tracing::warn!(code, "vendor code is not an HTTP status");
            StatusCode::BAD_GATEWAY
        })
}
