//! Staff Model

use serde::{Deserialize, Serialize};

/// Staff member (read-only reference data for the workflow)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    pub name: String,
    /// Whether this staff member performs grooming services
    pub is_groomer: bool,
    /// Daily appointment cap; carried for display, not enforced here
    pub daily_appointment_cap: Option<i32>,
    pub is_active: bool,
}
