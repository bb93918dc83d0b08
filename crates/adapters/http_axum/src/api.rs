//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;

use axum::Router;
use axum::routing::get;

use devreg_app::ports::KeyedStore;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: KeyedStore + Send + Sync + 'static,
{
    Router::new()
        // Devices
        .route(
            "/devices",
            get(devices::list::<S>).post(devices::create::<S>),
        )
        .route(
            "/devices/{identifier}",
            get(devices::get::<S>).delete(devices::delete::<S>),
        )
        // Rooms
        .route("/rooms", get(rooms::list::<S>).post(rooms::create::<S>))
        .route(
            "/rooms/{identifier}",
            get(rooms::get::<S>).delete(rooms::delete::<S>),
        )
}
