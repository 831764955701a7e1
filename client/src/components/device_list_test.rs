use std::sync::{Arc, Mutex};

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

#[derive(Debug, PartialEq)]
enum Intent {
    Edit(Device),
    Delete(String),
}

fn recorders() -> (Callback<Device>, Callback<String>, Arc<Mutex<Vec<Intent>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let edit_log = Arc::clone(&log);
    let delete_log = Arc::clone(&log);
    let on_edit = Callback::new(move |d: Device| edit_log.lock().expect("lock").push(Intent::Edit(d)));
    let on_delete = Callback::new(move |id: String| delete_log.lock().expect("lock").push(Intent::Delete(id)));
    (on_edit, on_delete, log)
}

#[test]
fn each_row_dispatches_its_own_record() {
    let owner = Owner::new();
    owner.with(|| {
        let devices = vec![
            device("a", "Laptop-001", Some("Alice Johnson")),
            device("b", "Monitor-01", None),
            device("c", "iPhone-15", Some("Marketing Dept")),
        ];
        let (on_edit, on_delete, log) = recorders();

        for d in &devices {
            dispatch_row_action(d, RowAction::Edit, on_edit, on_delete);
            dispatch_row_action(d, RowAction::Delete, on_edit, on_delete);
        }

        let log = log.lock().expect("lock");
        assert_eq!(log.len(), devices.len() * 2);
        for (i, d) in devices.iter().enumerate() {
            assert_eq!(log[i * 2], Intent::Edit(d.clone()));
            assert_eq!(log[i * 2 + 1], Intent::Delete(d.id.clone()));
        }
    });
}

#[test]
fn row_key_is_the_device_id_across_revisions() {
    let d = device("a", "Laptop", None);
    let mut renamed = d.clone();
    renamed.name = "Laptop 2".to_owned();
    renamed.updated_at = "2026-01-02T00:00:00Z".to_owned();
    assert_eq!(row_key(&d), "a");
    assert_eq!(row_key(&d), row_key(&renamed));
    assert_ne!(row_key(&d), row_key(&device("b", "Laptop", None)));
}

#[test]
fn row_signal_follows_updates_to_its_record() {
    let owner = Owner::new();
    owner.with(|| {
        let list = RwSignal::new(vec![device("a", "Laptop", None), device("b", "Monitor", None)]);
        let row = row_signal(Signal::from(list), device("a", "Laptop", None));

        list.update(|items| {
            items[0].name = "Laptop Pro".to_owned();
            items[0].assigned_to = Some("Bob".to_owned());
            items[0].updated_at = "2026-01-02T00:00:00Z".to_owned();
        });
        let current = row.get_untracked();
        assert_eq!(current.name, "Laptop Pro");
        assert_eq!(current.assignment_label(), "Assigned to: Bob");

        list.update(|items| items.retain(|d| d.id != "a"));
        assert_eq!(row.get_untracked().name, "Laptop");
    });
}

#[test]
fn empty_state_message_matches_copy() {
    assert_eq!(EMPTY_STATE_MESSAGE, "No devices found. Add your first device!");
}

#[cfg(feature = "ssr")]
mod render {
    use super::*;

    fn render(devices: Vec<Device>) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let (on_edit, on_delete, _) = recorders();
            let devices = Signal::stored(devices);
            view! { <DeviceList devices=devices on_edit=on_edit on_delete=on_delete/> }.to_html()
        })
    }

    #[test]
    fn empty_collection_renders_only_empty_state() {
        let html = render(Vec::new());
        assert!(html.contains("empty-state"));
        assert!(html.contains(EMPTY_STATE_MESSAGE));
        assert!(!html.contains("device-item"));
    }

    #[test]
    fn renders_one_row_per_device_in_order() {
        let html = render(vec![
            device("a", "Laptop-001", Some("Alice Johnson")),
            device("b", "Monitor-01", None),
        ]);
        assert_eq!(html.matches("class=\"device-item\"").count(), 2);
        assert!(!html.contains("empty-state"));
        assert!(html.contains("Assigned to: Alice Johnson"));
        assert!(html.contains("Not assigned"));
        let laptop = html.find("Laptop-001").expect("laptop row");
        let monitor = html.find("Monitor-01").expect("monitor row");
        assert!(laptop < monitor);
    }
}
