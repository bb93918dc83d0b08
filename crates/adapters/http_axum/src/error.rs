//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use devreg_domain::error::RegistryError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`RegistryError`] to an HTTP response with appropriate status code.
pub struct ApiError(RegistryError);

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RegistryError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            RegistryError::Referential(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            RegistryError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            RegistryError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
