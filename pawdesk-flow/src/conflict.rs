//! Slot conflict detection
//!
//! A candidate slot conflicts when its half-open interval
//! `[start, start + duration)` overlaps another non-cancelled
//! appointment for the same groomer. Back-to-back slots (one ending
//! exactly where the next starts) do not conflict.

use chrono::{DateTime, Duration, Utc};
use shared::models::{Appointment, AppointmentStatus};

/// Find the first appointment conflicting with the candidate slot.
///
/// `existing` is the groomer's appointment list. `exclude_id` is the
/// appointment being edited; it never conflicts with itself. Cancelled
/// appointments hold no slot, and zero-length intervals on either side
/// never conflict.
pub fn find_conflict<'a>(
    existing: &'a [Appointment],
    start: DateTime<Utc>,
    duration_min: i64,
    exclude_id: &str,
) -> Option<&'a Appointment> {
    if duration_min <= 0 {
        return None;
    }
    let end = start + Duration::minutes(duration_min);

    existing.iter().find(|other| {
        if other.id == exclude_id || other.status == AppointmentStatus::Cancelled {
            return false;
        }
        if other.total_duration <= 0 {
            return false;
        }
        let other_end = other.scheduled_at + Duration::minutes(other.total_duration);
        start < other_end && other.scheduled_at < end
    })
}
