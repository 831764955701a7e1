//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the device repository selected at startup, type-erased so the
//! handlers never know which backend is live.

use std::sync::Arc;

use crate::services::device::DeviceRepository;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the repository is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub devices: Arc<dyn DeviceRepository>,
}

impl AppState {
    #[must_use]
    pub fn new(devices: Arc<dyn DeviceRepository>) -> Self {
        Self { devices }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
