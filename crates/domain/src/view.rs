//! Read-side composite views.
//!
//! Views are what the API returns: the `room_identifier` foreign key is
//! replaced by the related entity itself. They are built fresh on every read
//! and never written back, so decorating a response can never corrupt a
//! persisted record.

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::room::Room;

/// A device with its room embedded.
///
/// `room` is `None` (serialized as `null`) when the referenced room no
/// longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceView {
    pub identifier: String,
    pub name: String,
    pub device_type: String,
    pub controller_name: String,
    pub room: Option<Room>,
}

impl DeviceView {
    /// Combine a device with the room it was resolved against.
    #[must_use]
    pub fn new(device: Device, room: Option<Room>) -> Self {
        Self {
            identifier: device.identifier,
            name: device.name,
            device_type: device.device_type,
            controller_name: device.controller_name,
            room,
        }
    }
}

/// A device as embedded inside a [`RoomView`] — no foreign key, no room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSummary {
    pub identifier: String,
    pub name: String,
    pub device_type: String,
    pub controller_name: String,
}

impl From<Device> for DeviceSummary {
    fn from(device: Device) -> Self {
        Self {
            identifier: device.identifier,
            name: device.name,
            device_type: device.device_type,
            controller_name: device.controller_name,
        }
    }
}

/// A room with the devices it contains embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomView {
    pub identifier: String,
    pub name: String,
    pub devices: Vec<DeviceSummary>,
}

impl RoomView {
    /// Combine a room with the devices registered into it.
    #[must_use]
    pub fn new(room: Room, devices: Vec<DeviceSummary>) -> Self {
        Self {
            identifier: room.identifier,
            name: room.name,
            devices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn should_drop_foreign_key_when_building_device_view() {
        let view = DeviceView::new(lamp(), None);
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("room_identifier").is_none());
        assert!(json.get("room").unwrap().is_null());
    }

    #[test]
    fn should_embed_room_when_present() {
        let room = Room::builder()
            .identifier("living-room")
            .name("Living Room")
            .build()
            .unwrap();
        let view = DeviceView::new(lamp(), Some(room.clone()));
        assert_eq!(view.room, Some(room));
    }

    #[test]
    fn should_strip_foreign_key_from_embedded_devices() {
        let room = Room::builder()
            .identifier("living-room")
            .name("Living Room")
            .build()
            .unwrap();
        let view = RoomView::new(room, vec![DeviceSummary::from(lamp())]);
        let json = serde_json::to_value(&view).unwrap();
        let embedded = &json.get("devices").unwrap()[0];
        assert_eq!(embedded.get("identifier").unwrap(), "lamp-1");
        assert!(embedded.get("room_identifier").is_none());
    }
}
