//! # goveebridge-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the local JSON endpoints (`/devices/list`, `/devices/state/…`,
//!   `/devices/control/…/on|off`) plus a `/health` probe
//! - Map path parameters into [`DeviceService`](goveebridge_app::services::device_service::DeviceService)
//!   calls (driving adapter)
//! - Relay vendor bodies with the vendor's `code` as HTTP status, and turn an
//!   unreachable vendor into a fixed `500` body
//!
//! ## Dependency rule
//! Depends on `goveebridge-app` (for the port trait and services) and
//! `goveebridge-domain` (for response types). Never leaks axum types into the
//! domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
