//! Notification events produced by workflow operations
//!
//! Toast-style side effects are modeled as returned values, decoupled
//! from any rendering concern, so the workflow is testable without a
//! presentation layer.

use crate::error::FlowError;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// User-facing notification produced by a workflow operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    /// Create a success notification
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Create an error notification
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Single failure notification for a workflow error
    pub fn from_error(title: impl Into<String>, err: &FlowError) -> Self {
        Self::error(title, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_error_carries_message() {
        let err = FlowError::Validation("Invalid appointment date or time".to_string());
        let notification = Notification::from_error("Update failed", &err);
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.title, "Update failed");
        assert_eq!(notification.message, "Invalid appointment date or time");
    }
}
