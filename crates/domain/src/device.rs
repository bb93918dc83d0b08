//! Device — a registered thing that lives in a room.

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, ValidationError};
use crate::record::{IDENTIFIER, Record};

/// A registered device. `room_identifier` must point at an existing
/// [`Room`](crate::room::Room) when the device is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub identifier: String,
    pub name: String,
    pub device_type: String,
    pub controller_name: String,
    pub room_identifier: String,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] when any required field is empty.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for (field, value) in [
            (IDENTIFIER, &self.identifier),
            ("name", &self.name),
            ("device_type", &self.device_type),
            ("controller_name", &self.controller_name),
            ("room_identifier", &self.room_identifier),
        ] {
            if value.is_empty() {
                return Err(ValidationError::EmptyField(field).into());
            }
        }
        Ok(())
    }

    /// Flatten into the generic persisted shape.
    #[must_use]
    pub fn to_record(&self) -> Record {
        Record::new()
            .with(IDENTIFIER, &self.identifier)
            .with("name", &self.name)
            .with("device_type", &self.device_type)
            .with("controller_name", &self.controller_name)
            .with("room_identifier", &self.room_identifier)
    }

    /// Rebuild from the generic persisted shape.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when a required field is
    /// absent from the record.
    pub fn from_record(record: &Record) -> Result<Self, ValidationError> {
        Ok(Self {
            identifier: record.require(IDENTIFIER)?.to_string(),
            name: record.require("name")?.to_string(),
            device_type: record.require("device_type")?.to_string(),
            controller_name: record.require("controller_name")?.to_string(),
            room_identifier: record.require("room_identifier")?.to_string(),
        })
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    identifier: Option<String>,
    name: Option<String>,
    device_type: Option<String>,
    controller_name: Option<String>,
    room_identifier: Option<String>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = Some(device_type.into());
        self
    }

    #[must_use]
    pub fn controller_name(mut self, controller_name: impl Into<String>) -> Self {
        self.controller_name = Some(controller_name.into());
        self
    }

    #[must_use]
    pub fn room_identifier(mut self, room_identifier: impl Into<String>) -> Self {
        self.room_identifier = Some(room_identifier.into());
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if any field is missing or empty.
    pub fn build(self) -> Result<Device, RegistryError> {
        let device = Device {
            identifier: self.identifier.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            device_type: self.device_type.unwrap_or_default(),
            controller_name: self.controller_name.unwrap_or_default(),
            room_identifier: self.room_identifier.unwrap_or_default(),
        };
        device.validate()?;
        Ok(device)
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
    fn should_build_valid_device_when_all_fields_provided() {
        let device = lamp();
        assert_eq!(device.identifier, "lamp-1");
        assert_eq!(device.room_identifier, "living-room");
    }

    #[test]
    fn should_return_validation_error_when_field_missing() {
        let result = Device::builder().identifier("lamp-1").build();
        assert!(matches!(
            result,
            Err(RegistryError::Validation(ValidationError::EmptyField(
                "name"
            )))
        ));
    }

    #[test]
    fn should_roundtrip_through_record() {
        let device = lamp();
        let record = device.to_record();
        assert_eq!(record.identifier(), Some("lamp-1"));
        let rebuilt = Device::from_record(&record).unwrap();
        assert_eq!(rebuilt, device);
    }

    #[test]
    fn should_fail_from_record_when_field_absent() {
        let record = Record::new().with("identifier", "lamp-1");
        let result = Device::from_record(&record);
        assert_eq!(result, Err(ValidationError::MissingField("name")));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let device = lamp();
        let json = serde_json::to_string(&device).unwrap();
        let parsed: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, device);
    }
}
