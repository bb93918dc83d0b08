//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use devreg_app::ports::KeyedStore;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the JSON API under `/api` and exposes `/health`. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: KeyedStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use devreg_app::repository::Repository;
    use devreg_app::services::device_service::DeviceService;
    use devreg_app::services::room_service::RoomService;
    use devreg_domain::error::{NotFoundError, RegistryError};
    use devreg_domain::record::Record;
    use tower::ServiceExt;

    #[derive(Clone)]
    struct StubStore;

    impl KeyedStore for StubStore {
        async fn get(&self, _key: &str) -> Result<Option<Record>, RegistryError> {
            Ok(None)
        }
        async fn set(&self, _key: &str, _record: &Record) -> Result<(), RegistryError> {
            Ok(())
        }
        async fn delete(&self, key: &str) -> Result<(), RegistryError> {
            Err(NotFoundError {
                entity: "record",
                id: key.to_string(),
            }
            .into())
        }
        async fn keys(&self) -> Result<Vec<String>, RegistryError> {
            Ok(vec![])
        }
    }

    fn test_state() -> AppState<StubStore> {
        AppState::new(
            DeviceService::new(
                Repository::new(StubStore, "device"),
                Repository::new(StubStore, "room"),
            ),
            RoomService::new(
                Repository::new(StubStore, "room"),
                Repository::new(StubStore, "device"),
            ),
        )
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_devices() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/devices")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_room() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/rooms/attic")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
