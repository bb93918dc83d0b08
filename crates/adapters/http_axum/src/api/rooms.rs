//! JSON REST handlers for rooms.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use devreg_app::ports::KeyedStore;
use devreg_domain::room::Room;
use devreg_domain::view::RoomView;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a room.
#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub identifier: String,
    pub name: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<RoomView>>),
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
    Ok(Json<RoomView>),
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
    Created(Json<RoomView>),
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

/// `GET /api/rooms`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: KeyedStore + Send + Sync + 'static,
{
    let rooms = state.room_service.list().await?;
    Ok(ListResponse::Ok(Json(rooms)))
}

/// `GET /api/rooms/{identifier}`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(identifier): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: KeyedStore + Send + Sync + 'static,
{
    let room = state.room_service.get(&identifier).await?;
    Ok(GetResponse::Ok(Json(room)))
}

/// `POST /api/rooms`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateRoomRequest>,
) -> Result<CreateResponse, ApiError>
where
    S: KeyedStore + Send + Sync + 'static,
{
    let room = Room::builder()
        .identifier(req.identifier)
        .name(req.name)
        .build()?;

    let created = state.room_service.register(room).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /api/rooms/{identifier}`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path(identifier): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: KeyedStore + Send + Sync + 'static,
{
    state.room_service.delete(&identifier).await?;
    Ok(DeleteResponse::NoContent)
}
