//! Workflow error types

use thiserror::Error;

/// Workflow error type
///
/// Every user-initiated operation converts one of these into a single
/// notification at the top level; no structured error code propagates
/// back into the data model.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Malformed input, caught locally before any network call
    #[error("{0}")]
    Validation(String),

    /// Requested slot overlaps another appointment for the groomer
    #[error("Scheduling conflict: {0}")]
    SchedulingConflict(String),

    /// Token missing or expired after the client's single refresh cycle
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource missing in the remote system of record
    #[error("Not found: {0}")]
    NotFound(String),

    /// Non-2xx response from the Appointment Store or Inventory Ledger
    #[error("Remote call failed: {message}")]
    Remote {
        code: Option<u16>,
        message: String,
    },

    /// One or more usage-record calls failed during completion.
    ///
    /// Lines recorded before the failure stay recorded; there is no
    /// rollback.
    #[error("Recording consumable usage failed for items: {failed_items:?}")]
    UsageRecording { failed_items: Vec<String> },
}

/// Result type for workflow operations
pub type FlowResult<T> = Result<T, FlowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_displays_bare_message() {
        let err = FlowError::Validation("Invalid appointment date or time".to_string());
        assert_eq!(format!("{}", err), "Invalid appointment date or time");
    }

    #[test]
    fn test_usage_recording_names_failed_items() {
        let err = FlowError::UsageRecording {
            failed_items: vec!["item-2".to_string(), "item-5".to_string()],
        };
        let message = format!("{}", err);
        assert!(message.contains("item-2"));
        assert!(message.contains("item-5"));
    }
}
