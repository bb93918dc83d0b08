//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use devreg_app::ports::KeyedStore;
use devreg_domain::device::Device;
use devreg_domain::view::DeviceView;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a device.
#[derive(Deserialize)]
pub struct CreateDeviceRequest {
    pub identifier: String,
    pub name: String,
    pub device_type: String,
    pub controller_name: String,
    pub room_identifier: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<DeviceView>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<DeviceView>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<DeviceView>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/devices`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: KeyedStore + Send + Sync + 'static,
{
    let devices = state.device_service.list().await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /api/devices/{identifier}`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(identifier): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: KeyedStore + Send + Sync + 'static,
{
    let device = state.device_service.get(&identifier).await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `POST /api/devices`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateDeviceRequest>,
) -> Result<CreateResponse, ApiError>
where
    S: KeyedStore + Send + Sync + 'static,
{
    let device = Device::builder()
        .identifier(req.identifier)
        .name(req.name)
        .device_type(req.device_type)
        .controller_name(req.controller_name)
        .room_identifier(req.room_identifier)
        .build()?;

    let created = state.device_service.register(device).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /api/devices/{identifier}`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path(identifier): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: KeyedStore + Send + Sync + 'static,
{
    state.device_service.delete(&identifier).await?;
    Ok(DeleteResponse::NoContent)
}
