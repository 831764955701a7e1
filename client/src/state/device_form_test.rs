use super::*;

fn device(id: &str, name: &str, assigned_to: Option<&str>) -> Device {
    Device {
        id: id.to_owned(),
        name: name.to_owned(),
        assigned_to: assigned_to.map(str::to_owned),
        created_at: "2026-01-01T00:00:00Z".to_owned(),
        updated_at: "2026-01-01T00:00:00Z".to_owned(),
    }
}

// =============================================================
// sync
// =============================================================

#[test]
fn default_state_is_blank_create_mode() {
    let state = DeviceFormState::default();
    assert_eq!(state.name, "");
    assert_eq!(state.assigned_to, "");
    assert!(!state.is_editing());
}

#[test]
fn sync_seeds_fields_from_device() {
    let mut state = DeviceFormState::default();
    assert!(state.sync(Some(&device("1", "Laptop", Some("Alice")))));
    assert_eq!(state.name, "Laptop");
    assert_eq!(state.assigned_to, "Alice");
    assert!(state.is_editing());
}

#[test]
fn sync_uses_empty_assignee_when_absent() {
    let state = DeviceFormState::for_device(Some(&device("1", "Laptop", None)));
    assert_eq!(state.name, "Laptop");
    assert_eq!(state.assigned_to, "");
}

#[test]
fn sync_same_device_keeps_in_progress_edits() {
    let target = device("1", "Laptop", None);
    let mut state = DeviceFormState::for_device(Some(&target));
    state.name = "Laptop Pro".to_owned();

    assert!(!state.sync(Some(&target.clone())));
    assert_eq!(state.name, "Laptop Pro");
}

#[test]
fn sync_switching_devices_discards_stale_input() {
    let mut state = DeviceFormState::for_device(Some(&device("1", "Laptop", Some("Alice"))));
    state.name = "half typed".to_owned();

    assert!(state.sync(Some(&device("2", "Monitor", None))));
    assert_eq!(state.name, "Monitor");
    assert_eq!(state.assigned_to, "");
}

#[test]
fn sync_to_none_clears_fields() {
    let mut state = DeviceFormState::for_device(Some(&device("1", "Laptop", Some("Alice"))));
    assert!(state.sync(None));
    assert_eq!(state.name, "");
    assert_eq!(state.assigned_to, "");
    assert!(!state.is_editing());
}

#[test]
fn sync_none_to_none_keeps_typed_text() {
    let mut state = DeviceFormState::default();
    state.name = "Keyboard".to_owned();
    assert!(!state.sync(None));
    assert_eq!(state.name, "Keyboard");
}

#[test]
fn sync_refreshed_copy_of_same_device_reseeds() {
    let original = device("1", "Laptop", None);
    let mut state = DeviceFormState::for_device(Some(&original));
    state.name = "stale".to_owned();

    let mut refreshed = original.clone();
    refreshed.name = "Laptop v2".to_owned();
    refreshed.updated_at = "2026-01-02T00:00:00Z".to_owned();
    assert!(state.sync(Some(&refreshed)));
    assert_eq!(state.name, "Laptop v2");
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_unchanged_edit_emits_existing_values() {
    let mut state = DeviceFormState::for_device(Some(&device("1", "Laptop", None)));
    let payload = state.submit().expect("payload");
    assert_eq!(payload, DeviceCreate { name: "Laptop".to_owned(), assigned_to: None });
}

#[test]
fn submit_in_create_mode_trims_and_resets() {
    let mut state = DeviceFormState::default();
    state.name = " Monitor ".to_owned();
    state.assigned_to = "  ".to_owned();

    let payload = state.submit().expect("payload");
    assert_eq!(payload, DeviceCreate { name: "Monitor".to_owned(), assigned_to: None });
    assert_eq!(state.name, "");
    assert_eq!(state.assigned_to, "");
}

#[test]
fn submit_trims_assignee() {
    let mut state = DeviceFormState::default();
    state.name = "Phone".to_owned();
    state.assigned_to = "  Marketing Dept ".to_owned();
    let payload = state.submit().expect("payload");
    assert_eq!(payload.assigned_to.as_deref(), Some("Marketing Dept"));
}

#[test]
fn submit_in_edit_mode_keeps_fields() {
    let mut state = DeviceFormState::for_device(Some(&device("1", "Laptop", None)));
    state.name = "  Laptop 2 ".to_owned();
    state.assigned_to = "Bob".to_owned();

    let payload = state.submit().expect("payload");
    assert_eq!(payload.name, "Laptop 2");
    assert_eq!(state.name, "  Laptop 2 ");
    assert_eq!(state.assigned_to, "Bob");
}

#[test]
fn submit_whitespace_name_is_suppressed_without_state_change() {
    for blank in ["", " ", "\t\n  "] {
        let mut state = DeviceFormState::default();
        state.name = blank.to_owned();
        state.assigned_to = "Alice".to_owned();
        let before = state.clone();

        assert!(!state.can_submit());
        assert_eq!(state.submit(), None);
        assert_eq!(state, before);
    }
}

#[test]
fn submit_label_depends_on_mode() {
    assert_eq!(submit_label(false), "Add Device");
    assert_eq!(submit_label(true), "Update Device");
}
