//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RegistryError`] via `#[from]`. Absence of a record is **not** an error
//! at the repository layer — lookups return `Option` and callers branch on
//! it. [`RegistryError::NotFound`] is reserved for operations that require
//! the record to exist (service-layer gets, deletes).

/// Top-level error for the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A record or request failed invariant checks.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A record that must exist does not.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// A cross-collection reference would be left dangling.
    #[error("referential integrity violation")]
    Referential(#[from] ReferentialError),

    /// The storage layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations on records and entities.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is absent from a record.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A required field is present but empty.
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),
}

/// A record that was required to exist could not be found.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} `{id}` not found")]
pub struct NotFoundError {
    /// Kind of entity that was looked up (e.g. `"Device"`).
    pub entity: &'static str,
    /// Identifier that was probed.
    pub id: String,
}

/// Cross-collection integrity violations, raised before any mutation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReferentialError {
    /// A device points at a room that does not exist.
    #[error("room `{0}` does not exist")]
    UnknownRoom(String),

    /// A room cannot be deleted while devices still reference it.
    #[error("room `{0}` still has devices")]
    RoomHasDevices(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Device",
            id: "lamp-1".to_string(),
        };
        assert_eq!(err.to_string(), "Device `lamp-1` not found");
    }

    #[test]
    fn should_convert_validation_error_into_registry_error() {
        let err: RegistryError = ValidationError::MissingField("identifier").into();
        assert!(matches!(
            err,
            RegistryError::Validation(ValidationError::MissingField("identifier"))
        ));
    }

    #[test]
    fn should_convert_referential_error_into_registry_error() {
        let err: RegistryError = ReferentialError::UnknownRoom("attic".to_string()).into();
        assert!(matches!(err, RegistryError::Referential(_)));
    }
}
