//! Transient text state behind the device create/edit form.
//!
//! DESIGN
//! ======
//! The form's reset-on-new-target behavior is an explicit key comparison
//! rather than a lifecycle hook: every time the supplied device is observed,
//! `sync` compares its key with the last one seen and reseeds the fields only
//! when it changed. The Leptos component drives this from an `Effect`, but the
//! rules here do not depend on any reactive runtime.

#[cfg(test)]
#[path = "device_form_test.rs"]
mod device_form_test;

use device_model::{Device, DeviceCreate, DeviceKey};

/// Field text for the device form plus the key of the device it was seeded from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeviceFormState {
    pub name: String,
    pub assigned_to: String,
    seeded_from: Option<DeviceKey>,
}

impl DeviceFormState {
    /// Form seeded from `device` (or blank when `None`).
    #[must_use]
    pub fn for_device(device: Option<&Device>) -> Self {
        let mut state = Self::default();
        state.sync(device);
        state
    }

    /// Reconcile with the currently supplied device.
    ///
    /// Returns `true` when the key changed and the fields were reset. Calling
    /// this repeatedly with the same device keeps any in-progress edits.
    pub fn sync(&mut self, device: Option<&Device>) -> bool {
        let key = device.map(Device::key);
        if key == self.seeded_from {
            return false;
        }
        self.seeded_from = key;
        match device {
            Some(device) => {
                self.name.clone_from(&device.name);
                self.assigned_to = device.assigned_to.clone().unwrap_or_default();
            }
            None => self.clear(),
        }
        true
    }

    /// Whether the form is editing an existing device.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.seeded_from.is_some()
    }

    /// Whether `submit` would produce a payload.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Build the normalized payload for the current fields.
    ///
    /// Returns `None` (and changes nothing) when the name is blank. In create
    /// mode the fields are cleared after a payload is produced; in edit mode
    /// they are kept.
    pub fn submit(&mut self) -> Option<DeviceCreate> {
        let payload = DeviceCreate::from_input(&self.name, &self.assigned_to)?;
        if !self.is_editing() {
            self.clear();
        }
        Some(payload)
    }

    fn clear(&mut self) {
        self.name.clear();
        self.assigned_to.clear();
    }
}

/// Primary button caption for the current mode.
#[must_use]
pub fn submit_label(editing: bool) -> &'static str {
    if editing { "Update Device" } else { "Add Device" }
}
