//! Shared application state for axum handlers.

use std::sync::Arc;

use devreg_app::ports::KeyedStore;
use devreg_app::services::device_service::DeviceService;
use devreg_app::services::room_service::RoomService;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the store itself does not need to be `Clone` —
/// only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    /// Device registration/lookup service.
    pub device_service: Arc<DeviceService<S>>,
    /// Room registration/lookup service.
    pub room_service: Arc<RoomService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
            room_service: Arc::clone(&self.room_service),
        }
    }
}

impl<S> AppState<S>
where
    S: KeyedStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(device_service: DeviceService<S>, room_service: RoomService<S>) -> Self {
        Self {
            device_service: Arc::new(device_service),
            room_service: Arc::new(room_service),
        }
    }
}
