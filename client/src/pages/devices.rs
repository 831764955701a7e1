//! Device management page: owns the inventory and wires form + list to the API.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It loads devices once on mount, routes form
//! submissions to create or update based on the current edit target, and
//! confirms deletes with the browser dialog before calling the API.
//!
//! ERROR HANDLING
//! ==============
//! Request failures land in `DevicesState::error` and render as a banner;
//! the list keeps its last known contents.

#[cfg(test)]
#[path = "devices_test.rs"]
mod devices_test;

use device_model::{Device, DeviceCreate};
use leptos::prelude::*;

use crate::components::device_form::DeviceForm;
use crate::components::device_list::DeviceList;
use crate::state::devices::DevicesState;

pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this device?";

/// Submission routing decided by the current edit target.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SubmitTarget {
    Create,
    Update(String),
}

fn submit_target(state: &DevicesState) -> SubmitTarget {
    match state.editing.as_ref() {
        Some(device) => SubmitTarget::Update(device.id.clone()),
        None => SubmitTarget::Create,
    }
}

#[component]
pub fn DevicesPage() -> impl IntoView {
    let state = RwSignal::new(DevicesState { loading: true, ..DevicesState::default() });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_devices().await {
            Ok(items) => state.update(|s| s.set_loaded(items)),
            Err(e) => {
                log::warn!("device list failed: {e}");
                state.update(|s| s.set_error(e));
            }
        }
    });

    let editing = Memo::new(move |_| state.with(|s| s.editing.clone()));
    let is_editing = Memo::new(move |_| editing.with(Option::is_some));
    let items = Memo::new(move |_| state.with(|s| s.items.clone()));

    let on_submit = Callback::new(move |payload: DeviceCreate| {
        let target = state.with_untracked(submit_target);
        state.update(|s| s.error = None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match &target {
                SubmitTarget::Create => crate::net::api::create_device(&payload)
                    .await
                    .map(|device| state.update(|s| s.apply_created(device))),
                SubmitTarget::Update(id) => crate::net::api::update_device(id, &payload)
                    .await
                    .map(|device| state.update(|s| s.apply_updated(device))),
            };
            if let Err(e) = result {
                state.update(|s| s.set_error(e));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (target, payload);
    });

    let on_cancel = Callback::new(move |()| state.update(DevicesState::cancel_edit));
    let on_edit = Callback::new(move |device: Device| state.update(|s| s.begin_edit(device)));

    let on_delete = Callback::new(move |id: String| {
        if !confirm_delete() {
            return;
        }
        state.update(|s| s.error = None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_device(&id).await {
                Ok(()) => state.update(|s| s.apply_deleted(&id)),
                Err(e) => state.update(|s| s.set_error(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Device Management"</h1>
            </header>

            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="error-message">{move || state.with(|s| s.error.clone().unwrap_or_default())}</div>
            </Show>

            <main class="app-main">
                <section class="form-section">
                    <h2>{move || state.with(DevicesState::form_heading)}</h2>
                    // Rebuilt only when the mode flips; switching between
                    // devices is handled by the form's own sync.
                    {move || {
                        if is_editing.get() {
                            view! { <DeviceForm device=editing on_submit=on_submit on_cancel=on_cancel/> }
                                .into_any()
                        } else {
                            view! { <DeviceForm device=editing on_submit=on_submit/> }.into_any()
                        }
                    }}
                </section>

                <section class="list-section">
                    <h2>"Devices"</h2>
                    <Show
                        when=move || !state.with(|s| s.loading)
                        fallback=|| view! { <div class="loading">"Loading devices..."</div> }
                    >
                        <DeviceList devices=items on_edit=on_edit on_delete=on_delete/>
                    </Show>
                </section>
            </main>
        </div>
    }
}

/// Ask the user to confirm a delete. Always declines outside the browser.
fn confirm_delete() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(DELETE_CONFIRM_MESSAGE).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
