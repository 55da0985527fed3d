//! Domain models
//!
//! Entities and wire payloads for the booking API. The Appointment Store
//! and Inventory Ledger are the systems of record; these types mirror
//! their contracts.

pub mod appointment;
pub mod inventory;
pub mod service;
pub mod staff;

pub use appointment::{Appointment, AppointmentStatus, AppointmentUpdate};
pub use inventory::{InventoryItem, UsageRecordCreate};
pub use service::{MIN_SERVICE_DURATION_MIN, Service, ServiceCategory};
pub use staff::Staff;
