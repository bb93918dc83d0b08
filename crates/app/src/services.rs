//! Use-case services — the registry's inbound ports.

pub mod device_service;
pub mod room_service;

pub use device_service::DeviceService;
pub use room_service::RoomService;
