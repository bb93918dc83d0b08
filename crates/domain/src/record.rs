//! Record — the generic persisted shape.
//!
//! A record is a flat mapping of field name to string value. Every persisted
//! record carries an `identifier` field; the storage key is derived from it
//! by the repository layer. Records are deliberately schemaless so one store
//! can hold any collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Field name every record must carry.
pub const IDENTIFIER: &str = "identifier";

/// A flat field-name to value mapping representing one persisted entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, String>);

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field value.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Set a field value, replacing any previous one.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// The record's `identifier` field, if populated.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.get(IDENTIFIER).filter(|id| !id.is_empty())
    }

    /// Read a field, failing with a typed error when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when the field is not set.
    pub fn require(&self, field: &'static str) -> Result<&str, ValidationError> {
        self.get(field).ok_or(ValidationError::MissingField(field))
    }
}
