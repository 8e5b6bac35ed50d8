//! # goveebridge-domain
//!
//! Pure domain model for the goveebridge facade.
//!
//! ## Responsibilities
//! - Describe **Devices** as the vendor reports them, and the trimmed
//!   [`DeviceSummary`](device::DeviceSummary) this system hands out
//! - Define the two-valued [`PowerState`](power::PowerState) and its exact
//!   wire mapping
//! - Define the outbound **request envelopes** (`requestId` + payload)
//! - Wrap the untyped vendor **response** body
//! - Define the single error kind raised when the vendor cannot be reached
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod device;
pub mod error;
pub mod power;
pub mod request;
pub mod response;
