//! Workflow actions
//!
//! Each user-initiated operation is a self-contained action struct with
//! an `execute` method taking the flow context. Actions validate first,
//! then talk to the collaborators; a validation failure never reaches
//! the network.

mod complete_appointment;
mod edit_appointment;

#[cfg(test)]
pub(crate) mod test_support;

pub use complete_appointment::{CompleteAppointmentAction, UsageLine};
pub use edit_appointment::EditAppointmentAction;
