//! Storage port — the durable key-value mapping the registry sits on.

use std::future::Future;

use devreg_domain::error::RegistryError;
use devreg_domain::record::Record;

/// A durable mapping from string key to [`Record`].
///
/// The namespace is flat and shared: every collection lives in the same key
/// space and the [`Repository`](crate::repository::Repository) partitions it
/// with a collection prefix. Implementations provide no transactional
/// guarantees across calls; each operation is independently durable once it
/// returns. Whether concurrent writers to the same key are serialised is up
/// to the backing store.
pub trait KeyedStore {
    /// Look up a record by key. Absence is `Ok(None)`, never an error.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Record>, RegistryError>> + Send;

    /// Insert or replace the record stored under `key`.
    fn set(
        &self,
        key: &str,
        record: &Record,
    ) -> impl Future<Output = Result<(), RegistryError>> + Send;

    /// Remove the record stored under `key`.
    ///
    /// Unlike [`get`](Self::get), deleting a missing key is a hard failure:
    /// implementations return [`RegistryError::NotFound`].
    fn delete(&self, key: &str) -> impl Future<Output = Result<(), RegistryError>> + Send;

    /// Enumerate every key currently stored, in no guaranteed order.
    fn keys(&self) -> impl Future<Output = Result<Vec<String>, RegistryError>> + Send;
}
