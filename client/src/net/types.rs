//! Wire DTOs for the client/server boundary.
//!
//! Device records come from the shared `device-model` crate so both sides
//! serialize the same shape; only client-specific envelopes live here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use device_model::{Device, DeviceCreate, DeviceUpdate};

/// Error envelope returned by the REST API on non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason for the failure.
    pub detail: String,
}
