//! Pawdesk Flow - appointment lifecycle workflow
//!
//! Validates and applies edits to appointments and records consumable
//! usage when an appointment completes. All I/O goes through the
//! collaborator traits in [`traits`]; the crate knows nothing about HTTP
//! transports or UI rendering, so every operation is testable against
//! in-memory collaborators.

pub mod actions;
pub mod conflict;
pub mod error;
pub mod notify;
pub mod schedule;
pub mod totals;
pub mod traits;
pub mod validate;

pub use actions::{CompleteAppointmentAction, EditAppointmentAction, UsageLine};
pub use error::{FlowError, FlowResult};
pub use notify::{Notification, NotificationKind};
pub use traits::{ActorMetadata, AppointmentStore, FlowContext, InventoryLedger, ServiceCatalog};
