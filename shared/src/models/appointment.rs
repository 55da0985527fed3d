//! Appointment Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Appointment status
///
/// Intended lifecycle: pending → confirmed → completed, with any
/// non-terminal status → cancelled. Cancellation is a status value,
/// never a record deletion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Terminal statuses accept no further lifecycle transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Appointment entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    /// Customer reference (String ID)
    pub customer_id: String,
    /// Pet reference (String ID)
    pub pet_id: String,
    /// Selected service references (String IDs, ordered)
    pub services: Vec<String>,
    /// Groomer reference (String ID)
    pub groomer_id: Option<String>,
    /// Scheduled start instant (UTC)
    pub scheduled_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    /// Derived: sum of selected services' durations in minutes
    #[serde(default)]
    pub total_duration: i64,
    /// Derived: sum of selected services' prices in currency unit
    #[serde(default)]
    pub total_price: f64,
    pub created_at: Option<String>,
}

/// Update appointment payload (POST /api/appointments/:id)
///
/// Field names follow the booking API contract (camelCase on the wire).
/// totalDuration and totalPrice are recomputed from the service
/// selection before submission, never taken from user input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    /// Calendar date (YYYY-MM-DD)
    pub appointment_date: String,
    /// Wall-clock time (HH:MM)
    pub appointment_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groomer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
    pub total_duration: i64,
    pub total_price: f64,
}
