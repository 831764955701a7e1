//! Device REST handlers.
//!
//! `GET/POST /api/devices` and `GET/PUT/DELETE /api/devices/{id}`. Every
//! failure is a `DeviceError`, rendered as a status code plus
//! `{ "detail": ... }` JSON body.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use device_model::{Device, DeviceCreate, DeviceUpdate};
use serde::Deserialize;

use crate::services::device::{self, DeviceError, Page};
use crate::state::AppState;

pub(crate) fn device_error_to_status(err: &DeviceError) -> StatusCode {
    match err {
        DeviceError::NotFound(_) => StatusCode::NOT_FOUND,
        DeviceError::Validation(_) | DeviceError::Pagination(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DeviceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for DeviceError {
    fn into_response(self) -> Response {
        let status = device_error_to_status(&self);
        let detail = match &self {
            DeviceError::NotFound(_) => "Device not found".to_owned(),
            DeviceError::Database(e) => {
                tracing::error!(error = %e, "device store failure");
                "internal error".to_owned()
            }
            other => other.to_string(),
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// `GET /api/devices`: newest first, windowed by `skip`/`limit`.
pub async fn list_devices(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Device>>, DeviceError> {
    let page = Page::from_query(query.skip, query.limit)?;
    let devices = device::list_devices(state.devices.as_ref(), page).await?;
    Ok(Json(devices))
}

/// `POST /api/devices`: create a device.
pub async fn create_device(
    State(state): State<AppState>,
    Json(body): Json<DeviceCreate>,
) -> Result<(StatusCode, Json<Device>), DeviceError> {
    let device = device::create_device(state.devices.as_ref(), body).await?;
    Ok((StatusCode::CREATED, Json(device)))
}

/// `GET /api/devices/{id}`: fetch one device.
pub async fn get_device(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Device>, DeviceError> {
    let device = device::get_device(state.devices.as_ref(), &id).await?;
    Ok(Json(device))
}

/// `PUT /api/devices/{id}`: partial update; absent fields are left as-is.
pub async fn update_device(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<DeviceUpdate>,
) -> Result<Json<Device>, DeviceError> {
    let device = device::update_device(state.devices.as_ref(), &id, body).await?;
    Ok(Json(device))
}

/// `DELETE /api/devices/{id}`: remove a device.
pub async fn delete_device(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, DeviceError> {
    device::delete_device(state.devices.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "devices_test.rs"]
mod tests;
