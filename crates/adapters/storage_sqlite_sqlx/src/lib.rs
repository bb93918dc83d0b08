//! # devreg-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `KeyedStore` port defined in `devreg-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between records and the single `records(key, fields)` table
//!
//! ## Dependency rule
//! Depends on `devreg-app` (for the port trait) and `devreg-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod error;
pub mod pool;
pub mod store;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use store::SqliteKeyedStore;
