//! Device service: validation, pagination, and the repository seam.
//!
//! DESIGN
//! ======
//! Routes call the free functions here, which normalize payloads against the
//! shared schema and then delegate to a `DeviceRepository`. The repository is
//! chosen at startup (`memory` or `postgres`) and only ever sees valid input.
//!
//! ERROR HANDLING
//! ==============
//! `DeviceError` is the single error type for the device API. Routes turn it
//! into an HTTP status plus `{ "detail": ... }` body.

use device_model::{Device, DeviceCreate, DeviceUpdate, ValidationError};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

pub const DEFAULT_PAGE_LIMIT: usize = 100;
pub const MAX_PAGE_LIMIT: usize = 1000;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("device not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("invalid pagination: {0}")]
    Pagination(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Offset pagination window for device listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: usize,
    pub limit: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self { skip: 0, limit: DEFAULT_PAGE_LIMIT }
    }
}

impl Page {
    /// Build a page from raw query values.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::Pagination`] for a negative `skip` or a `limit`
    /// outside `1..=MAX_PAGE_LIMIT`.
    pub fn from_query(skip: Option<i64>, limit: Option<i64>) -> Result<Self, DeviceError> {
        let skip = match skip {
            Some(raw) => {
                usize::try_from(raw).map_err(|_| DeviceError::Pagination(format!("skip must be >= 0, got {raw}")))?
            }
            None => 0,
        };
        let limit = match limit {
            Some(raw) => usize::try_from(raw)
                .ok()
                .filter(|limit| (1..=MAX_PAGE_LIMIT).contains(limit))
                .ok_or_else(|| DeviceError::Pagination(format!("limit must be in 1..={MAX_PAGE_LIMIT}, got {raw}")))?,
            None => DEFAULT_PAGE_LIMIT,
        };
        Ok(Self { skip, limit })
    }
}

// =============================================================================
// REPOSITORY
// =============================================================================

/// Storage backend for devices. Implementations receive normalized input.
#[async_trait::async_trait]
pub trait DeviceRepository: Send + Sync {
    /// Devices ordered newest `created_at` first, windowed by `page`.
    async fn list(&self, page: Page) -> Result<Vec<Device>, DeviceError>;

    /// Fetch one device.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotFound`] when no device has this id.
    async fn get(&self, id: &str) -> Result<Device, DeviceError>;

    /// Insert a new device with fresh id and timestamps.
    async fn create(&self, input: DeviceCreate) -> Result<Device, DeviceError>;

    /// Apply a partial update and bump `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotFound`] when no device has this id.
    async fn update(&self, id: &str, update: DeviceUpdate) -> Result<Device, DeviceError>;

    /// Remove a device.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotFound`] when no device has this id.
    async fn delete(&self, id: &str) -> Result<(), DeviceError>;
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// List devices.
///
/// # Errors
///
/// Propagates repository errors.
pub async fn list_devices(repo: &dyn DeviceRepository, page: Page) -> Result<Vec<Device>, DeviceError> {
    repo.list(page).await
}

/// Fetch one device by id.
///
/// # Errors
///
/// Returns [`DeviceError::NotFound`] for an unknown id.
pub async fn get_device(repo: &dyn DeviceRepository, id: &str) -> Result<Device, DeviceError> {
    repo.get(id).await
}

/// Validate and create a device.
///
/// # Errors
///
/// Returns a validation error for an invalid payload, or a repository error.
pub async fn create_device(repo: &dyn DeviceRepository, input: DeviceCreate) -> Result<Device, DeviceError> {
    let input = input.normalized()?;
    let device = repo.create(input).await?;
    info!(device_id = %device.id, name = %device.name, "device created");
    Ok(device)
}

/// Validate and apply a partial update.
///
/// # Errors
///
/// Returns a validation error for an invalid payload, or
/// [`DeviceError::NotFound`] for an unknown id.
pub async fn update_device(
    repo: &dyn DeviceRepository,
    id: &str,
    update: DeviceUpdate,
) -> Result<Device, DeviceError> {
    let update = update.normalized()?;
    let device = repo.update(id, update).await?;
    info!(device_id = %device.id, "device updated");
    Ok(device)
}

/// Delete a device.
///
/// # Errors
///
/// Returns [`DeviceError::NotFound`] for an unknown id.
pub async fn delete_device(repo: &dyn DeviceRepository, id: &str) -> Result<(), DeviceError> {
    repo.delete(id).await?;
    info!(device_id = %id, "device deleted");
    Ok(())
}

/// Render a timestamp the way the API exposes it (RFC 3339, UTC).
pub(crate) fn format_timestamp(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339).unwrap_or_else(|_| ts.unix_timestamp().to_string())
}

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;
