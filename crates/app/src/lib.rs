//! # devreg-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **storage port** adapters must implement (driven/outbound):
//!   - `KeyedStore` — durable string-key to record mapping
//! - Provide the generic [`Repository`](repository::Repository): a typed
//!   view of one collection inside the shared store
//! - Provide [`decorate`] — read-time composition of devices and rooms
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DeviceService` — register, list, get, delete devices
//!   - `RoomService` — register, list, get, delete rooms
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `devreg-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod decorate;
pub mod ports;
pub mod repository;
pub mod services;
