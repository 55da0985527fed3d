//! EditAppointment action
//!
//! Validates a proposed edit (schedule, status, services, groomer,
//! notes), recomputes the derived totals, and issues a single update
//! call to the appointment store. No inventory interaction happens on an
//! edit; completion side effects live in
//! [`CompleteAppointmentAction`](super::CompleteAppointmentAction).

use serde::Deserialize;

use crate::conflict::find_conflict;
use crate::error::{FlowError, FlowResult};
use crate::notify::Notification;
use crate::schedule::combine_schedule;
use crate::totals::selection_totals;
use crate::traits::FlowContext;
use crate::validate::{MAX_NOTE_LEN, validate_optional_text};
use shared::models::{AppointmentStatus, AppointmentUpdate};

/// EditAppointment action
///
/// `status` is schema-validated at deserialization: a form payload with
/// a value outside the enumerated set never becomes an action.
#[derive(Debug, Clone, Deserialize)]
pub struct EditAppointmentAction {
    pub appointment_id: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    /// Calendar date field (YYYY-MM-DD)
    pub date: String,
    /// Wall-clock time field (HH:MM)
    pub time: String,
    /// New groomer assignment; keeps the stored one when absent
    #[serde(default)]
    pub groomer_id: Option<String>,
    /// New service selection; keeps the stored one when absent
    #[serde(default)]
    pub services: Option<Vec<String>>,
}

impl EditAppointmentAction {
    pub async fn execute(&self, ctx: &FlowContext) -> FlowResult<Notification> {
        // 1. Validate free-text fields
        validate_optional_text(&self.notes, "notes", MAX_NOTE_LEN)?;

        // 2. Combine date and time; abort before any network call on failure
        let scheduled_at = combine_schedule(&self.date, &self.time)?;

        // 3. Load the current appointment
        let current = ctx.store.fetch(&self.appointment_id).await?;

        // 4. Resolve effective groomer and service selection
        let groomer_id = self.groomer_id.clone().or(current.groomer_id);
        let services = self
            .services
            .clone()
            .unwrap_or(current.services);

        // 5. Recompute derived totals from the effective selection
        let catalog = ctx.catalog.list_services().await?;
        let totals = selection_totals(&catalog, &services);

        // 6. Slot conflict check (per groomer, half-open intervals).
        //    Cancelling never competes for the slot.
        if let Some(groomer) = &groomer_id
            && self.status != AppointmentStatus::Cancelled
        {
            let existing = ctx.store.list_for_groomer(groomer).await?;
            if let Some(conflict) =
                find_conflict(&existing, scheduled_at, totals.duration, &self.appointment_id)
            {
                return Err(FlowError::SchedulingConflict(format!(
                    "groomer {} is booked for appointment {} at that time",
                    groomer, conflict.id
                )));
            }
        }

        // 7. Issue the single update call with the derived fields
        let update = AppointmentUpdate {
            status: self.status,
            notes: self.notes.clone(),
            appointment_date: self.date.clone(),
            appointment_time: self.time.clone(),
            groomer_id,
            services: Some(services),
            total_duration: totals.duration,
            total_price: totals.price,
        };
        ctx.store.update(&self.appointment_id, &update).await?;

        tracing::info!(
            appointment_id = %self.appointment_id,
            command_id = %ctx.actor.command_id,
            "appointment updated"
        );
        Ok(Notification::success(
            "Appointment updated",
            format!("Appointment {} was updated", self.appointment_id),
        ))
    }
}
