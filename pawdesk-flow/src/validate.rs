//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! workflow actions. The remote API enforces nothing client-side; these
//! limits keep obviously broken payloads off the wire.

use crate::error::{FlowError, FlowResult};

/// Notes, usage annotations
pub const MAX_NOTE_LEN: usize = 500;

/// Identifiers and denormalized entity names
pub const MAX_NAME_LEN: usize = 200;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> FlowResult<()> {
    if value.trim().is_empty() {
        return Err(FlowError::Validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(FlowError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> FlowResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(FlowError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}
