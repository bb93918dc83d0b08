//! Generic repository — a typed view of one collection in the shared store.
//!
//! Every collection (devices, rooms) lives in the same flat key space. A
//! repository scopes itself with a `<collection>:` prefix on every key, so
//! identifiers only need to be unique within their own collection.

use devreg_domain::error::{RegistryError, ValidationError};
use devreg_domain::record::Record;

use crate::ports::KeyedStore;

/// A view of one logical collection within a shared [`KeyedStore`].
pub struct Repository<S> {
    store: S,
    prefix: String,
}

impl<S: KeyedStore> Repository<S> {
    /// Create a repository over `store` scoped to `collection`.
    pub fn new(store: S, collection: &str) -> Self {
        Self {
            store,
            prefix: format!("{collection}:"),
        }
    }

    fn key(&self, identifier: &str) -> String {
        format!("{}{identifier}", self.prefix)
    }

    /// Return every record in this collection, in no guaranteed order.
    ///
    /// Scans the whole store's key space and keeps the keys carrying this
    /// repository's prefix, so cost is proportional to the total number of
    /// keys in the store, not the collection size.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn find_all(&self) -> Result<Vec<Record>, RegistryError> {
        let mut records = Vec::new();
        for key in self.store.keys().await? {
            if !key.starts_with(&self.prefix) {
                continue;
            }
            // A key can disappear between the scan and the probe; skip it.
            if let Some(record) = self.store.get(&key).await? {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Point lookup by identifier. Absence is `Ok(None)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn find(&self, identifier: &str) -> Result<Option<Record>, RegistryError> {
        self.store.get(&self.key(identifier)).await
    }

    /// Return the records whose `field` equals `value` exactly.
    ///
    /// Linear scan over [`find_all`](Self::find_all). A record that does not
    /// carry `field` at all is treated as a non-match, so collections with a
    /// mixed schema stay queryable.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn find_by(&self, field: &str, value: &str) -> Result<Vec<Record>, RegistryError> {
        let mut records = self.find_all().await?;
        records.retain(|record| record.get(field) == Some(value));
        Ok(records)
    }

    /// Insert or replace a record at its identifier.
    ///
    /// No validation beyond the identifier is performed here; shaping the
    /// record is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] when the record has no populated
    /// `identifier` field, or a storage error from the store.
    pub async fn save(&self, record: &Record) -> Result<(), RegistryError> {
        let identifier = record
            .identifier()
            .ok_or(ValidationError::MissingField("identifier"))?;
        self.store.set(&self.key(identifier), record).await
    }

    /// Remove a record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] (propagated from the store) when
    /// no record exists under the identifier, or a storage error.
    pub async fn delete(&self, identifier: &str) -> Result<(), RegistryError> {
        self.store.delete(&self.key(identifier)).await
    }
}
