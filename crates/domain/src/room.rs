//! Room — a location that contains devices.

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, ValidationError};
use crate::record::{IDENTIFIER, Record};

/// A room devices can be registered into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub identifier: String,
    pub name: String,
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] when `identifier` or `name` is
    /// empty.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.identifier.is_empty() {
            return Err(ValidationError::EmptyField(IDENTIFIER).into());
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        Ok(())
    }

    /// Flatten into the generic persisted shape.
    #[must_use]
    pub fn to_record(&self) -> Record {
        Record::new()
            .with(IDENTIFIER, &self.identifier)
            .with("name", &self.name)
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
        })
    }
}

/// Step-by-step builder for [`Room`].
#[derive(Debug, Default)]
pub struct RoomBuilder {
    identifier: Option<String>,
    name: Option<String>,
}

impl RoomBuilder {
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

    /// Consume the builder, validate, and return a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if a field is missing or empty.
    pub fn build(self) -> Result<Room, RegistryError> {
        let room = Room {
            identifier: self.identifier.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
        };
        room.validate()?;
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_room_when_fields_provided() {
        let room = Room::builder()
            .identifier("living-room")
            .name("Living Room")
            .build()
            .unwrap();
        assert_eq!(room.identifier, "living-room");
        assert_eq!(room.name, "Living Room");
    }

    #[test]
    fn should_return_validation_error_when_identifier_missing() {
        let result = Room::builder().name("Living Room").build();
        assert!(matches!(
            result,
            Err(RegistryError::Validation(ValidationError::EmptyField(
                "identifier"
            )))
        ));
    }

    #[test]
    fn should_roundtrip_through_record() {
        let room = Room::builder()
            .identifier("kitchen")
            .name("Kitchen")
            .build()
            .unwrap();
        let rebuilt = Room::from_record(&room.to_record()).unwrap();
        assert_eq!(rebuilt, room);
    }

    #[test]
    fn should_fail_from_record_when_name_absent() {
        let record = Record::new().with(IDENTIFIER, "kitchen");
        assert_eq!(
            Room::from_record(&record),
            Err(ValidationError::MissingField("name"))
        );
    }
}
