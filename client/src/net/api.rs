//! REST helpers for the `/api/devices` endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these calls are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>` with a message suitable for the
//! page's error banner, so a failed request never panics hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Device, DeviceCreate};
#[cfg(feature = "hydrate")]
use super::types::{DeviceUpdate, ErrorBody};

#[cfg(any(test, feature = "hydrate"))]
const DEVICES_ENDPOINT: &str = "/api/devices";

#[cfg(any(test, feature = "hydrate"))]
fn device_endpoint(id: &str) -> String {
    format!("{DEVICES_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!("{action} failed: {status} ({detail})"),
        _ => format!("{action} failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn failure(action: &str, resp: gloo_net::http::Response) -> String {
    let detail = resp.json::<ErrorBody>().await.ok().map(|body| body.detail);
    request_failed_message(action, resp.status(), detail.as_deref())
}

/// Fetch all devices via `GET /api/devices`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn list_devices() -> Result<Vec<Device>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(DEVICES_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("load devices", resp).await);
        }
        resp.json::<Vec<Device>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a device via `POST /api/devices`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the payload.
pub async fn create_device(payload: &DeviceCreate) -> Result<Device, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(DEVICES_ENDPOINT)
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("create device", resp).await);
        }
        resp.json::<Device>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Update a device via `PUT /api/devices/{id}`.
///
/// Both fields are always sent, so a `None` assignee clears the assignment.
///
/// # Errors
///
/// Returns an error string if the request fails, the device is gone, or the
/// server rejects the payload.
pub async fn update_device(id: &str, payload: &DeviceCreate) -> Result<Device, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = DeviceUpdate::from(payload.clone());
        let resp = gloo_net::http::Request::put(&device_endpoint(id))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("update device", resp).await);
        }
        resp.json::<Device>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err("not available on server".to_owned())
    }
}

/// Delete a device via `DELETE /api/devices/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the device is gone.
pub async fn delete_device(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&device_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("delete device", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
