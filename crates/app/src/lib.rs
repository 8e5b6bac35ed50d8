//! # goveebridge-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the driven port [`VendorApi`](ports::VendorApi) that the
//!   outbound HTTP adapter implements
//! - Provide [`DeviceService`](services::device_service::DeviceService), the
//!   use-cases the inbound HTTP adapter drives (list, query state, switch power)
//!
//! ## Dependency rule
//! Depends on `goveebridge-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
