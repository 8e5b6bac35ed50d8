//! Power state — the on/off capability every controllable device exposes.

use serde::{Serialize, Serializer};

/// Requested power state of a device.
///
/// The vendor protocol encodes this as an integer: `1` for on, `0` for off.
/// Swapping the two silently inverts device control, so the mapping lives in
/// exactly one place ([`PowerState::wire_value`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerState {
    On,
    Off,
}

impl PowerState {
    /// Integer sent in the `value` field of an `on_off` capability.
    #[must_use]
    pub fn wire_value(self) -> u8 {
        match self {
            Self::On => 1,
            Self::Off => 0,
        }
    }
}

impl Serialize for PowerState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.wire_value())
    }
}
