//! Read-only device list with per-row edit and delete actions.

#[cfg(test)]
#[path = "device_list_test.rs"]
mod device_list_test;

use device_model::Device;
use leptos::prelude::*;

pub const EMPTY_STATE_MESSAGE: &str = "No devices found. Add your first device!";

/// Action exposed on each row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

/// Renders `devices` in input order. Edit hands the whole record to
/// `on_edit`; delete hands only the id to `on_delete`.
#[component]
pub fn DeviceList(
    #[prop(into)] devices: Signal<Vec<Device>>,
    on_edit: Callback<Device>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || devices.with(|items| !items.is_empty())
            fallback=|| {
                view! {
                    <div class="empty-state">
                        <p>{EMPTY_STATE_MESSAGE}</p>
                    </div>
                }
            }
        >
            <div class="device-list">
                <For each=move || devices.get() key=row_key let:device>
                    <DeviceRow device=row_signal(devices, device) on_edit=on_edit on_delete=on_delete/>
                </For>
            </div>
        </Show>
    }
}

#[component]
fn DeviceRow(device: Signal<Device>, on_edit: Callback<Device>, on_delete: Callback<String>) -> impl IntoView {
    view! {
        <div class="device-item">
            <div class="device-info">
                <h3>{move || device.with(|d| d.name.clone())}</h3>
                <p>{move || device.with(Device::assignment_label)}</p>
            </div>
            <div class="device-actions">
                <button
                    class="btn-edit"
                    on:click=move |_| {
                        device.with_untracked(|d| dispatch_row_action(d, RowAction::Edit, on_edit, on_delete));
                    }
                >
                    "Edit"
                </button>
                <button
                    class="btn-delete"
                    on:click=move |_| {
                        device.with_untracked(|d| dispatch_row_action(d, RowAction::Delete, on_edit, on_delete));
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

/// Row key. Stable for the life of the record, so an edit updates the row's
/// text in place instead of replacing its DOM nodes.
fn row_key(device: &Device) -> String {
    device.id.clone()
}

/// Live view of one row's record, looked up by id in the current list.
/// Falls back to the record the row was created with once it leaves the list.
fn row_signal(devices: Signal<Vec<Device>>, initial: Device) -> Signal<Device> {
    Signal::derive(move || {
        devices
            .with(|items| items.iter().find(|d| d.id == initial.id).cloned())
            .unwrap_or_else(|| initial.clone())
    })
}

fn dispatch_row_action(device: &Device, action: RowAction, on_edit: Callback<Device>, on_delete: Callback<String>) {
    match action {
        RowAction::Edit => on_edit.run(device.clone()),
        RowAction::Delete => on_delete.run(device.id.clone()),
    }
}
