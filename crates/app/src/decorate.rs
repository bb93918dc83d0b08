//! Read-time decoration — stitching devices and rooms together.
//!
//! The persisted records only carry the `room_identifier` foreign key. At
//! the read boundary that key is resolved into the related entity and a
//! fresh view value is built; the stored records are never touched.

use devreg_domain::device::Device;
use devreg_domain::error::RegistryError;
use devreg_domain::room::Room;
use devreg_domain::view::{DeviceSummary, DeviceView, RoomView};

use crate::ports::KeyedStore;
use crate::repository::Repository;

/// Resolve a device's room and build its presentation view.
///
/// One point lookup per device. A dangling `room_identifier` (the room was
/// deleted out from under the device) yields `room: None` rather than an
/// error.
///
/// # Errors
///
/// Returns a storage error from the room lookup, or a validation error when
/// the stored room record is malformed.
pub async fn device_view<S: KeyedStore>(
    rooms: &Repository<S>,
    device: Device,
) -> Result<DeviceView, RegistryError> {
    let room = match rooms.find(&device.room_identifier).await? {
        Some(record) => Some(Room::from_record(&record)?),
        None => None,
    };
    Ok(DeviceView::new(device, room))
}

/// Collect a room's devices and build its presentation view.
///
/// Costs a full device-collection scan per room; decorating a list of rooms
/// is quadratic in the registry size. Fine at the scale this registry is
/// built for.
///
/// # Errors
///
/// Returns a storage error from the device scan, or a validation error when
/// a stored device record is malformed.
pub async fn room_view<S: KeyedStore>(
    devices: &Repository<S>,
    room: Room,
) -> Result<RoomView, RegistryError> {
    let records = devices
        .find_by("room_identifier", &room.identifier)
        .await?;

    let mut embedded = Vec::with_capacity(records.len());
    for record in &records {
        embedded.push(DeviceSummary::from(Device::from_record(record)?));
    }
    Ok(RoomView::new(room, embedded))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    use devreg_domain::error::NotFoundError;
    use devreg_domain::record::Record;

    use super::*;

    #[derive(Clone, Default)]
    struct InMemoryStore {
        map: Arc<Mutex<HashMap<String, Record>>>,
    }

    impl KeyedStore for InMemoryStore {
        fn get(
            &self,
            key: &str,
        ) -> impl Future<Output = Result<Option<Record>, RegistryError>> + Send {
            let result = self.map.lock().unwrap().get(key).cloned();
            async { Ok(result) }
        }

        fn set(
            &self,
            key: &str,
            record: &Record,
        ) -> impl Future<Output = Result<(), RegistryError>> + Send {
            self.map
                .lock()
                .unwrap()
                .insert(key.to_string(), record.clone());
            async { Ok(()) }
        }

        fn delete(&self, key: &str) -> impl Future<Output = Result<(), RegistryError>> + Send {
            let removed = self.map.lock().unwrap().remove(key);
            let result = removed.map(|_| ()).ok_or_else(|| {
                NotFoundError {
                    entity: "record",
                    id: key.to_string(),
                }
                .into()
            });
            async { result }
        }

        fn keys(&self) -> impl Future<Output = Result<Vec<String>, RegistryError>> + Send {
            let keys = self.map.lock().unwrap().keys().cloned().collect();
            async { Ok(keys) }
        }
    }

    fn living_room() -> Room {
        Room::builder()
            .identifier("living-room")
            .name("Living Room")
            .build()
            .unwrap()
    }

    fn lamp() -> Device {
        Device::builder()
            .identifier("lamp-1")
            .name("Ceiling Lamp")
            .device_type("switch")
            .controller_name("hue")
            .room_identifier("living-room")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_embed_room_and_drop_foreign_key() {
        let store = InMemoryStore::default();
        let rooms = Repository::new(store.clone(), "room");
        rooms.save(&living_room().to_record()).await.unwrap();

        let view = device_view(&rooms, lamp()).await.unwrap();

        assert_eq!(view.identifier, "lamp-1");
        assert_eq!(view.room, Some(living_room()));
    }

    #[tokio::test]
    async fn should_embed_null_room_when_reference_dangles() {
        let store = InMemoryStore::default();
        let rooms = Repository::new(store, "room");

        let view = device_view(&rooms, lamp()).await.unwrap();
        assert!(view.room.is_none());
    }

    #[tokio::test]
    async fn should_embed_only_devices_of_the_room() {
        let store = InMemoryStore::default();
        let devices = Repository::new(store.clone(), "device");
        devices.save(&lamp().to_record()).await.unwrap();
        let elsewhere = Device::builder()
            .identifier("heater-1")
            .name("Heater")
            .device_type("climate")
            .controller_name("zwave")
            .room_identifier("bedroom")
            .build()
            .unwrap();
        devices.save(&elsewhere.to_record()).await.unwrap();

        let view = room_view(&devices, living_room()).await.unwrap();

        assert_eq!(view.devices, vec![DeviceSummary::from(lamp())]);
    }

    #[tokio::test]
    async fn should_not_mutate_persisted_records_while_decorating() {
        let store = InMemoryStore::default();
        let devices = Repository::new(store.clone(), "device");
        let rooms = Repository::new(store, "room");
        devices.save(&lamp().to_record()).await.unwrap();
        rooms.save(&living_room().to_record()).await.unwrap();

        room_view(&devices, living_room()).await.unwrap();
        device_view(&rooms, lamp()).await.unwrap();

        // Foreign key still present on the stored record.
        let stored = devices.find("lamp-1").await.unwrap().unwrap();
        assert_eq!(stored.get("room_identifier"), Some("living-room"));
    }
}
