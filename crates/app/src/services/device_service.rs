//! Device service — use-cases for managing devices.

use devreg_domain::device::Device;
use devreg_domain::error::{NotFoundError, ReferentialError, RegistryError};
use devreg_domain::room::Room;
use devreg_domain::view::DeviceView;

use crate::decorate;
use crate::ports::KeyedStore;
use crate::repository::Repository;

/// Application service for device registration and lookup.
///
/// Holds both repositories: devices for its own collection, rooms to resolve
/// and validate the `room_identifier` reference.
pub struct DeviceService<S> {
    devices: Repository<S>,
    rooms: Repository<S>,
}

impl<S: KeyedStore> DeviceService<S> {
    /// Create a new service backed by the given repositories.
    pub fn new(devices: Repository<S>, rooms: Repository<S>) -> Self {
        Self { devices, rooms }
    }

    /// Register a device, validating the room reference first.
    ///
    /// The existence check and the write are two separate store operations;
    /// the store offers no isolation between them, so a concurrent room
    /// deletion can slip in between. Registering an identifier twice
    /// overwrites the previous record.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if a field is empty,
    /// [`RegistryError::Referential`] when `room_identifier` does not match
    /// an existing room, or a storage error. Nothing is written unless
    /// validation passes.
    #[tracing::instrument(skip(self, device), fields(device_id = %device.identifier))]
    pub async fn register(&self, device: Device) -> Result<DeviceView, RegistryError> {
        device.validate()?;

        let Some(room) = self.rooms.find(&device.room_identifier).await? else {
            return Err(ReferentialError::UnknownRoom(device.room_identifier).into());
        };
        let room = Room::from_record(&room)?;

        self.devices.save(&device.to_record()).await?;
        tracing::info!(device_id = %device.identifier, "registered device");

        Ok(DeviceView::new(device, Some(room)))
    }

    /// Look up a device by identifier, decorated with its room.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no device with `identifier`
    /// exists, or a storage error.
    pub async fn get(&self, identifier: &str) -> Result<DeviceView, RegistryError> {
        let record = self.devices.find(identifier).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: identifier.to_string(),
            }
        })?;
        let device = Device::from_record(&record)?;
        decorate::device_view(&self.rooms, device).await
    }

    /// List every device, each decorated with its room.
    ///
    /// # Errors
    ///
    /// Returns a storage error, or a validation error when a stored record
    /// is malformed.
    pub async fn list(&self) -> Result<Vec<DeviceView>, RegistryError> {
        let records = self.devices.find_all().await?;
        let mut views = Vec::with_capacity(records.len());
        for record in &records {
            let device = Device::from_record(record)?;
            views.push(decorate::device_view(&self.rooms, device).await?);
        }
        Ok(views)
    }

    /// Delete a device by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when the device does not exist,
    /// or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, identifier: &str) -> Result<(), RegistryError> {
        if self.devices.find(identifier).await?.is_none() {
            return Err(NotFoundError {
                entity: "Device",
                id: identifier.to_string(),
            }
            .into());
        }
        self.devices.delete(identifier).await?;
        tracing::info!("deleted device");
        Ok(())
    }
}
