//! # goveebridge-adapter-govee-reqwest
//!
//! Outbound adapter for the Govee cloud REST API, built on
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the [`VendorApi`](goveebridge_app::ports::VendorApi) port
//! - Attach the `Govee-API-Key` header to every request
//! - Serialize request envelopes and decode JSON response bodies
//! - Collapse every transport failure into
//!   [`VendorError::Unavailable`](goveebridge_domain::error::VendorError)
//!
//! ## Dependency rule
//! Depends on `goveebridge-app` (for the port trait) and `goveebridge-domain`
//! (for request and response types). Never leaks reqwest types past the port.

pub mod client;
pub mod config;
pub mod error;

pub use client::GoveeClient;
pub use config::GoveeConfig;
pub use error::ClientError;
