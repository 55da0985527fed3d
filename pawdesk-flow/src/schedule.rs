//! Schedule field helpers
//!
//! The booking forms edit the date and time as separate fields while the
//! store keeps a single UTC instant. Both directions of the conversion
//! live here so they round-trip exactly.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::{FlowError, FlowResult};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

fn invalid_schedule() -> FlowError {
    FlowError::Validation("Invalid appointment date or time".to_string())
}

/// Parse a calendar date field (YYYY-MM-DD)
pub fn parse_date(date: &str) -> FlowResult<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| invalid_schedule())
}

/// Parse a wall-clock time field (HH:MM)
pub fn parse_time(time: &str) -> FlowResult<NaiveTime> {
    NaiveTime::parse_from_str(time, TIME_FORMAT).map_err(|_| invalid_schedule())
}

/// Combine separate date and time fields into the stored UTC instant
pub fn combine_schedule(date: &str, time: &str) -> FlowResult<DateTime<Utc>> {
    let date = parse_date(date)?;
    let time = parse_time(time)?;
    Ok(NaiveDateTime::new(date, time).and_utc())
}

/// Decompose a stored instant back into the two form fields
pub fn decompose_schedule(at: DateTime<Utc>) -> (String, String) {
    (
        at.format(DATE_FORMAT).to_string(),
        at.format(TIME_FORMAT).to_string(),
    )
}
