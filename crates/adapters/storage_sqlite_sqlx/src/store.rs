//! `SQLite` implementation of the `KeyedStore` port.
//!
//! Every record lives in the single `records` table as a JSON object of
//! string fields. Each operation runs one statement on a pooled connection
//! acquired for its own duration, so a statement is durable once the call
//! returns and the connection is released on every exit path.

use std::future::Future;

use sqlx::SqlitePool;

use devreg_app::ports::KeyedStore;
use devreg_domain::error::{NotFoundError, RegistryError};
use devreg_domain::record::Record;

use crate::error::StorageError;

const SELECT_BY_KEY: &str = "SELECT fields FROM records WHERE key = ?";
const UPSERT: &str =
    "INSERT INTO records (key, fields) VALUES (?, ?) ON CONFLICT(key) DO UPDATE SET fields = excluded.fields";
const DELETE_BY_KEY: &str = "DELETE FROM records WHERE key = ?";
const SELECT_KEYS: &str = "SELECT key FROM records";

/// `SQLite`-backed keyed store.
#[derive(Clone)]
pub struct SqliteKeyedStore {
    pool: SqlitePool,
}

impl SqliteKeyedStore {
    /// Create a new store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl KeyedStore for SqliteKeyedStore {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Record>, RegistryError>> + Send {
        let pool = self.pool.clone();
        let key = key.to_string();
        async move {
            let row: Option<(String,)> = sqlx::query_as(SELECT_BY_KEY)
                .bind(&key)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            row.map(|(fields,)| serde_json::from_str(&fields))
                .transpose()
                .map_err(|err| StorageError::from(err).into())
        }
    }

    fn set(
        &self,
        key: &str,
        record: &Record,
    ) -> impl Future<Output = Result<(), RegistryError>> + Send {
        let pool = self.pool.clone();
        let key = key.to_string();
        let fields = serde_json::to_string(record).map_err(StorageError::from);
        async move {
            sqlx::query(UPSERT)
                .bind(&key)
                .bind(fields?)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn delete(&self, key: &str) -> impl Future<Output = Result<(), RegistryError>> + Send {
        let pool = self.pool.clone();
        let key = key.to_string();
        async move {
            let result = sqlx::query(DELETE_BY_KEY)
                .bind(&key)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError {
                    entity: "record",
                    id: key,
                }
                .into());
            }
            Ok(())
        }
    }

    fn keys(&self) -> impl Future<Output = Result<Vec<String>, RegistryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<(String,)> = sqlx::query_as(SELECT_KEYS)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|(key,)| key).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteKeyedStore {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteKeyedStore::new(db.pool().clone())
    }

    fn lamp_record() -> Record {
        Record::new()
            .with("identifier", "lamp-1")
            .with("name", "Ceiling Lamp")
    }

    #[tokio::test]
    async fn should_roundtrip_record_through_set_and_get() {
        let store = setup().await;
        store.set("device:lamp-1", &lamp_record()).await.unwrap();

        let fetched = store.get("device:lamp-1").await.unwrap();
        assert_eq!(fetched, Some(lamp_record()));
    }

    #[tokio::test]
    async fn should_return_none_when_key_absent() {
        let store = setup().await;
        assert!(store.get("device:ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_replace_record_on_second_set() {
        let store = setup().await;
        store.set("device:lamp-1", &lamp_record()).await.unwrap();
        let renamed = lamp_record().with("name", "Floor Lamp");
        store.set("device:lamp-1", &renamed).await.unwrap();

        let keys = store.keys().await.unwrap();
        assert_eq!(keys, ["device:lamp-1"]);
        let fetched = store.get("device:lamp-1").await.unwrap().unwrap();
        assert_eq!(fetched.get("name"), Some("Floor Lamp"));
    }

    #[tokio::test]
    async fn should_enumerate_all_keys_across_collections() {
        let store = setup().await;
        store.set("device:lamp-1", &lamp_record()).await.unwrap();
        store
            .set("room:kitchen", &Record::new().with("identifier", "kitchen"))
            .await
            .unwrap();

        let mut keys = store.keys().await.unwrap();
        keys.sort();
        assert_eq!(keys, ["device:lamp-1", "room:kitchen"]);
    }

    #[tokio::test]
    async fn should_fail_delete_when_key_absent() {
        let store = setup().await;
        let result = store.delete("device:ghost").await;
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_existing_key() {
        let store = setup().await;
        store.set("device:lamp-1", &lamp_record()).await.unwrap();

        store.delete("device:lamp-1").await.unwrap();
        assert!(store.get("device:lamp-1").await.unwrap().is_none());
        assert!(store.keys().await.unwrap().is_empty());
    }
}
