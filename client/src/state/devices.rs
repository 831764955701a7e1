//! Authoritative device list owned by the devices page.
//!
//! DESIGN
//! ======
//! The form and list components only emit intents. This state holds what
//! they render (`items`, `editing`) and the transitions the page applies once
//! the server confirms a create, update, or delete.

#[cfg(test)]
#[path = "devices_test.rs"]
mod devices_test;

use device_model::Device;

/// Device inventory plus page-level status.
#[derive(Clone, Debug, Default)]
pub struct DevicesState {
    /// Devices in server order (newest first).
    pub items: Vec<Device>,
    /// Device currently loaded into the form, if any.
    pub editing: Option<Device>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DevicesState {
    /// Replace the list with a fresh fetch.
    pub fn set_loaded(&mut self, items: Vec<Device>) {
        self.items = items;
        self.loading = false;
    }

    /// Show a newly created device at the top of the list.
    pub fn apply_created(&mut self, device: Device) {
        self.items.retain(|d| d.id != device.id);
        self.items.insert(0, device);
    }

    /// Replace the row for an updated device in place and leave edit mode.
    pub fn apply_updated(&mut self, device: Device) {
        if self.editing.as_ref().is_some_and(|d| d.id == device.id) {
            self.editing = None;
        }
        match self.items.iter_mut().find(|d| d.id == device.id) {
            Some(slot) => *slot = device,
            None => self.items.insert(0, device),
        }
    }

    /// Drop a deleted device; leaves edit mode if it was the edit target.
    pub fn apply_deleted(&mut self, id: &str) {
        self.items.retain(|d| d.id != id);
        if self.editing.as_ref().is_some_and(|d| d.id == id) {
            self.editing = None;
        }
    }

    pub fn begin_edit(&mut self, device: Device) {
        self.editing = Some(device);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Record a failed request. Also ends any loading indicator.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Heading for the form section.
    #[must_use]
    pub fn form_heading(&self) -> &'static str {
        if self.editing.is_some() { "Edit Device" } else { "Add New Device" }
    }
}
