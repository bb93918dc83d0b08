//! Room service — use-cases for managing rooms.

use devreg_domain::error::{NotFoundError, ReferentialError, RegistryError};
use devreg_domain::room::Room;
use devreg_domain::view::RoomView;

use crate::decorate;
use crate::ports::KeyedStore;
use crate::repository::Repository;

/// Application service for room registration and lookup.
///
/// Holds both repositories: rooms for its own collection, devices to guard
/// deletion and to decorate read results.
pub struct RoomService<S> {
    rooms: Repository<S>,
    devices: Repository<S>,
}

impl<S: KeyedStore> RoomService<S> {
    /// Create a new service backed by the given repositories.
    pub fn new(rooms: Repository<S>, devices: Repository<S>) -> Self {
        Self { rooms, devices }
    }

    /// Register a room. Registering an identifier twice overwrites.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if a field is empty, or a
    /// storage error.
    #[tracing::instrument(skip(self, room), fields(room_id = %room.identifier))]
    pub async fn register(&self, room: Room) -> Result<RoomView, RegistryError> {
        room.validate()?;
        self.rooms.save(&room.to_record()).await?;
        tracing::info!(room_id = %room.identifier, "registered room");
        decorate::room_view(&self.devices, room).await
    }

    /// Look up a room by identifier, decorated with its devices.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no room with `identifier`
    /// exists, or a storage error.
    pub async fn get(&self, identifier: &str) -> Result<RoomView, RegistryError> {
        let record = self.rooms.find(identifier).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Room",
                id: identifier.to_string(),
            }
        })?;
        let room = Room::from_record(&record)?;
        decorate::room_view(&self.devices, room).await
    }

    /// List every room, each decorated with its devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error, or a validation error when a stored record
    /// is malformed.
    pub async fn list(&self) -> Result<Vec<RoomView>, RegistryError> {
        let records = self.rooms.find_all().await?;
        let mut views = Vec::with_capacity(records.len());
        for record in &records {
            let room = Room::from_record(record)?;
            views.push(decorate::room_view(&self.devices, room).await?);
        }
        Ok(views)
    }

    /// Delete a room, provided no device still references it.
    ///
    /// The guard scan and the delete are separate store operations with no
    /// isolation between them; a device registered concurrently can slip in.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when the room does not exist,
    /// [`RegistryError::Referential`] while devices reference it, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, identifier: &str) -> Result<(), RegistryError> {
        if self.rooms.find(identifier).await?.is_none() {
            return Err(NotFoundError {
                entity: "Room",
                id: identifier.to_string(),
            }
            .into());
        }

        let occupants = self
            .devices
            .find_by("room_identifier", identifier)
            .await?;
        if !occupants.is_empty() {
            return Err(ReferentialError::RoomHasDevices(identifier.to_string()).into());
        }

        self.rooms.delete(identifier).await?;
        tracing::info!("deleted room");
        Ok(())
    }
}
