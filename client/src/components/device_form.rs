//! Create/edit form for a single device.
//!
//! DESIGN
//! ======
//! Field text lives in a component-local `DeviceFormState`. The supplied
//! `device` signal is reconciled from an `Effect`, so switching the edit
//! target (or clearing it) always discards stale input. The form never talks
//! to the network; it hands a normalized `DeviceCreate` to `on_submit`.

#[cfg(test)]
#[path = "device_form_test.rs"]
mod device_form_test;

use device_model::{Device, DeviceCreate};
use leptos::prelude::*;

use crate::state::device_form::{DeviceFormState, submit_label};

const NAME_PLACEHOLDER: &str = "e.g., Laptop, iPhone, Monitor";
const ASSIGNED_TO_PLACEHOLDER: &str = "e.g., John Doe, Marketing Dept";

/// Device form. Pass `device` to edit an existing record; leave it `None`
/// to create. `on_cancel` adds a secondary Cancel button when supplied.
#[component]
pub fn DeviceForm(
    #[prop(into)] device: Signal<Option<Device>>,
    on_submit: Callback<DeviceCreate>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let form = RwSignal::new(DeviceFormState::for_device(device.get_untracked().as_ref()));

    Effect::new(move || sync_with_supplied(form, device));

    let editing = move || device.with(Option::is_some);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_form(form, on_submit);
    };

    view! {
        <form class="device-form" on:submit=on_form_submit>
            <div class="form-group">
                <label for="name">"Device Name *"</label>
                <input
                    type="text"
                    id="name"
                    placeholder=NAME_PLACEHOLDER
                    required=true
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.name = value);
                    }
                />
            </div>

            <div class="form-group">
                <label for="assignedTo">"Assigned To"</label>
                <input
                    type="text"
                    id="assignedTo"
                    placeholder=ASSIGNED_TO_PLACEHOLDER
                    prop:value=move || form.with(|f| f.assigned_to.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.assigned_to = value);
                    }
                />
            </div>

            <div class="form-actions">
                <button type="submit" class="btn-primary">
                    {move || submit_label(editing())}
                </button>
                {on_cancel.map(|cancel| {
                    view! {
                        <button type="button" class="btn-secondary" on:click=move |_| cancel.run(())>
                            "Cancel"
                        </button>
                    }
                })}
            </div>
        </form>
    }
}

/// Track the supplied device and reconcile the form with its current value.
fn sync_with_supplied(form: RwSignal<DeviceFormState>, device: Signal<Option<Device>>) {
    device.with(|current| sync_form(form, current.as_ref()));
}

/// Reseed the form if the supplied device's key changed.
fn sync_form(form: RwSignal<DeviceFormState>, device: Option<&Device>) {
    // Only notify subscribers when the fields were actually reset.
    form.maybe_update(|f| f.sync(device));
}

/// Run the submission contract: emit at most one payload, never on a blank name.
fn submit_form(form: RwSignal<DeviceFormState>, on_submit: Callback<DeviceCreate>) {
    if !form.with_untracked(DeviceFormState::can_submit) {
        return;
    }
    if let Some(payload) = form.try_update(DeviceFormState::submit).flatten() {
        on_submit.run(payload);
    }
}
