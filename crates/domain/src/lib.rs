//! # devreg-domain
//!
//! Pure domain model for the devreg device registry.
//!
//! ## Responsibilities
//! - Define **Records** (the generic persisted field-to-value shape)
//! - Define **Devices** (registered things, each living in a room)
//! - Define **Rooms** (locations that contain devices)
//! - Define **Views** (read-side composites that embed related entities)
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod record;

pub mod device;
pub mod room;
pub mod view;
