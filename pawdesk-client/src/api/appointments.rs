//! Appointment endpoints

use super::{expect_ok, unwrap_data};
use crate::{ClientResult, HttpClient};
use shared::error::ApiResponse;
use shared::models::{Appointment, AppointmentUpdate};

impl HttpClient {
    /// Fetch a single appointment
    pub async fn get_appointment(&self, appointment_id: &str) -> ClientResult<Appointment> {
        let resp: ApiResponse<Appointment> = self
            .get(&format!("api/appointments/{}", appointment_id))
            .await?;
        unwrap_data(resp)
    }

    /// List appointments assigned to a groomer
    pub async fn list_appointments_for_groomer(
        &self,
        groomer_id: &str,
    ) -> ClientResult<Vec<Appointment>> {
        let resp: ApiResponse<Vec<Appointment>> = self
            .get(&format!("api/appointments?groomer_id={}", groomer_id))
            .await?;
        unwrap_data(resp)
    }

    /// Persist a validated appointment edit
    pub async fn update_appointment(
        &self,
        appointment_id: &str,
        update: &AppointmentUpdate,
    ) -> ClientResult<()> {
        let resp: ApiResponse<()> = self
            .post(&format!("api/appointments/{}", appointment_id), update)
            .await?;
        expect_ok(resp)
    }
}
