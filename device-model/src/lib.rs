//! Shared device record types for the inventory UI and its REST backend.
//!
//! This crate owns the JSON shape exchanged between `server` and `client`.
//! Normalization (trimming, blank-to-absent) lives here so the form and the
//! store agree on what a valid payload looks like.

use serde::{Deserialize, Deserializer, Serialize};

/// Maximum device name length, in characters.
pub const MAX_NAME_LEN: usize = 255;
/// Maximum assignee length, in characters.
pub const MAX_ASSIGNED_TO_LEN: usize = 255;

/// Error returned when a payload violates the store schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The name is empty or whitespace-only.
    #[error("device name must not be empty")]
    EmptyName,
    /// The trimmed name exceeds [`MAX_NAME_LEN`].
    #[error("device name is {0} characters, max is {max}", max = MAX_NAME_LEN)]
    NameTooLong(usize),
    /// The trimmed assignee exceeds [`MAX_ASSIGNED_TO_LEN`].
    #[error("assigned_to is {0} characters, max is {max}", max = MAX_ASSIGNED_TO_LEN)]
    AssignedToTooLong(usize),
}

/// A persisted inventory record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Store-assigned identifier (UUID string). Never changes.
    pub id: String,
    /// Display name; never empty.
    pub name: String,
    /// Person or department holding the device. `None` means unassigned.
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp of the last accepted update.
    pub updated_at: String,
}

impl Device {
    /// Key that changes whenever this record's identity or revision changes.
    #[must_use]
    pub fn key(&self) -> DeviceKey {
        DeviceKey { id: self.id.clone(), updated_at: self.updated_at.clone() }
    }

    /// Row caption for the assignee, e.g. `"Assigned to: Alice"`.
    #[must_use]
    pub fn assignment_label(&self) -> String {
        match self.assigned_to.as_deref() {
            Some(who) if !who.is_empty() => format!("Assigned to: {who}"),
            _ => "Not assigned".to_owned(),
        }
    }
}

/// Identity of a supplied device as seen by an editing form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeviceKey {
    pub id: String,
    pub updated_at: String,
}

/// Payload requesting a create, or a full update when paired with an id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCreate {
    pub name: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl DeviceCreate {
    /// Build a payload from raw form text.
    ///
    /// Returns `None` when the trimmed name is empty. The assignee is trimmed
    /// and collapsed to `None` when nothing is left.
    #[must_use]
    pub fn from_input(name: &str, assigned_to: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self { name: name.to_owned(), assigned_to: normalize_assignee(assigned_to) })
    }

    /// Trim fields and enforce the store schema.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for a blank or oversized name, or an
    /// oversized assignee.
    pub fn normalized(self) -> Result<Self, ValidationError> {
        let name = normalize_name(&self.name)?;
        let assigned_to = normalize_optional_assignee(self.assigned_to.as_deref())?;
        Ok(Self { name, assigned_to })
    }
}

/// Partial update accepted by the store.
///
/// `assigned_to` distinguishes three cases on the wire: field absent (leave
/// unchanged), `null` (clear), and a string (set).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Option<String>>,
}

impl DeviceUpdate {
    /// Trim provided fields and enforce the store schema.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a provided field is invalid.
    pub fn normalized(self) -> Result<Self, ValidationError> {
        let name = self.name.as_deref().map(normalize_name).transpose()?;
        let assigned_to = match self.assigned_to {
            Some(value) => Some(normalize_optional_assignee(value.as_deref())?),
            None => None,
        };
        Ok(Self { name, assigned_to })
    }

    /// Apply this update onto `device`. Does not touch timestamps.
    pub fn apply_to(&self, device: &mut Device) {
        if let Some(name) = &self.name {
            device.name.clone_from(name);
        }
        if let Some(assigned_to) = &self.assigned_to {
            device.assigned_to.clone_from(assigned_to);
        }
    }
}

impl From<DeviceCreate> for DeviceUpdate {
    fn from(value: DeviceCreate) -> Self {
        Self { name: Some(value.name), assigned_to: Some(value.assigned_to) }
    }
}

/// Trim an assignee; blank input becomes `None`.
#[must_use]
pub fn normalize_assignee(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

fn normalize_name(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let len = trimmed.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong(len));
    }
    Ok(trimmed.to_owned())
}

fn normalize_optional_assignee(raw: Option<&str>) -> Result<Option<String>, ValidationError> {
    let Some(value) = raw.and_then(normalize_assignee) else {
        return Ok(None);
    };
    let len = value.chars().count();
    if len > MAX_ASSIGNED_TO_LEN {
        return Err(ValidationError::AssignedToTooLong(len));
    }
    Ok(Some(value))
}

// Present-but-null must deserialize to `Some(None)`; `#[serde(default)]`
// covers the absent case.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
