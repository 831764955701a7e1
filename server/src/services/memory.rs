//! In-memory device repository for tests and local development.
//!
//! DESIGN
//! ======
//! One `RwLock` guards the whole map, so every operation is a single critical
//! section and concurrent requests are linearized. Listing sorts by creation
//! time with an insertion sequence as tie-breaker, newest first.

use std::collections::HashMap;

use device_model::{Device, DeviceCreate, DeviceUpdate};
use time::{Duration, OffsetDateTime};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::device::{DeviceError, DeviceRepository, Page, format_timestamp};

/// Devices loaded by [`InMemoryDeviceRepository::seeded`].
pub const SEED_DEVICES: &[(&str, Option<&str>)] = &[
    ("Laptop-001", Some("Alice Johnson")),
    ("Monitor-01", None),
    ("iPhone-15", Some("Marketing Dept")),
];

#[derive(Debug, Clone)]
struct StoredDevice {
    id: String,
    name: String,
    assigned_to: Option<String>,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
    seq: u64,
}

impl StoredDevice {
    fn to_device(&self) -> Device {
        Device {
            id: self.id.clone(),
            name: self.name.clone(),
            assigned_to: self.assigned_to.clone(),
            created_at: format_timestamp(self.created_at),
            updated_at: format_timestamp(self.updated_at),
        }
    }
}

#[derive(Debug, Default)]
struct Store {
    devices: HashMap<String, StoredDevice>,
    next_seq: u64,
}

impl Store {
    fn insert(&mut self, input: DeviceCreate) -> Device {
        let now = OffsetDateTime::now_utc();
        let stored = StoredDevice {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            assigned_to: input.assigned_to,
            created_at: now,
            updated_at: now,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        let device = stored.to_device();
        self.devices.insert(stored.id.clone(), stored);
        device
    }
}

/// Device store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryDeviceRepository {
    store: RwLock<Store>,
}

impl InMemoryDeviceRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with [`SEED_DEVICES`].
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Store::default();
        for (name, assigned_to) in SEED_DEVICES {
            store.insert(DeviceCreate { name: (*name).to_owned(), assigned_to: assigned_to.map(str::to_owned) });
        }
        Self { store: RwLock::new(store) }
    }
}

#[async_trait::async_trait]
impl DeviceRepository for InMemoryDeviceRepository {
    async fn list(&self, page: Page) -> Result<Vec<Device>, DeviceError> {
        let store = self.store.read().await;
        let mut rows: Vec<&StoredDevice> = store.devices.values().collect();
        rows.sort_by(|a, b| (b.created_at, b.seq).cmp(&(a.created_at, a.seq)));
        Ok(rows
            .into_iter()
            .skip(page.skip)
            .take(page.limit)
            .map(StoredDevice::to_device)
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Device, DeviceError> {
        let store = self.store.read().await;
        store
            .devices
            .get(id)
            .map(StoredDevice::to_device)
            .ok_or_else(|| DeviceError::NotFound(id.to_owned()))
    }

    async fn create(&self, input: DeviceCreate) -> Result<Device, DeviceError> {
        let mut store = self.store.write().await;
        Ok(store.insert(input))
    }

    async fn update(&self, id: &str, update: DeviceUpdate) -> Result<Device, DeviceError> {
        let mut store = self.store.write().await;
        let stored = store.devices.get_mut(id).ok_or_else(|| DeviceError::NotFound(id.to_owned()))?;

        let mut device = stored.to_device();
        update.apply_to(&mut device);
        stored.name = device.name;
        stored.assigned_to = device.assigned_to;
        // Strictly increasing so every accepted update yields a new revision.
        stored.updated_at = OffsetDateTime::now_utc().max(stored.updated_at + Duration::nanoseconds(1));

        Ok(stored.to_device())
    }

    async fn delete(&self, id: &str) -> Result<(), DeviceError> {
        let mut store = self.store.write().await;
        store
            .devices
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DeviceError::NotFound(id.to_owned()))
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;
