//! Grooming Service Model

use serde::{Deserialize, Serialize};

/// Minimum bookable service duration in minutes
pub const MIN_SERVICE_DURATION_MIN: i64 = 15;

/// Service category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ServiceCategory {
    Service,
    Addon,
    Package,
}

/// Grooming service (immutable reference data)
///
/// Consumed read-only by the workflow to populate selection and compute
/// appointment totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Duration in minutes (>= 15; absent on the wire counts as 0)
    #[serde(default)]
    pub duration: i64,
    /// Price in currency unit (>= 0; absent on the wire counts as 0)
    #[serde(default)]
    pub price: f64,
    pub category: ServiceCategory,
}

impl Service {
    /// Whether this service meets the minimum bookable duration
    pub fn meets_minimum_duration(&self) -> bool {
        self.duration >= MIN_SERVICE_DURATION_MIN
    }
}
