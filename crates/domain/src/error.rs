//! Error raised when the vendor API cannot be reached.
//!
//! Vendor-reported failures (an invalid device id, a rate limit, …) are not
//! errors at this level: they arrive as ordinary response bodies carrying
//! their own `code`. Only transport trouble ends up here.

use std::error::Error as StdError;
use std::fmt;

/// Boxed transport cause.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Operation that was being attempted against the vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorOperation {
    ListDevices,
    DeviceState,
    PowerControl,
}

impl fmt::Display for VendorOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListDevices => f.write_str("fetch devices"),
            Self::DeviceState => f.write_str("fetch device state"),
            Self::PowerControl => f.write_str("change device power state"),
        }
    }
}

/// Failure to talk to the vendor API.
///
/// Connection errors, timeouts, unreadable or non-JSON bodies all collapse
/// into [`VendorError::Unavailable`]; callers never need to tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum VendorError {
    #[error("vendor API unavailable, could not {operation}")]
    Unavailable {
        operation: VendorOperation,
        #[source]
        source: BoxError,
    },
}

impl VendorError {
    pub fn unavailable(operation: VendorOperation, source: impl Into<BoxError>) -> Self {
        Self::Unavailable {
            operation,
            source: source.into(),
        }
    }

    #[must_use]
    pub fn operation(&self) -> VendorOperation {
        match self {
            Self::Unavailable { operation, .. } => *operation,
        }
    }
}
