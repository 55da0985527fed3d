//! HTTP status mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the HTTP status code the booking API uses for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorCode::Success => StatusCode::OK,

            // General
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidRequest
            | ErrorCode::InvalidFormat
            | ErrorCode::RequiredField
            | ErrorCode::ValueOutOfRange => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::AlreadyExists => StatusCode::CONFLICT,
            ErrorCode::Unknown => StatusCode::INTERNAL_SERVER_ERROR,

            // Auth
            ErrorCode::NotAuthenticated
            | ErrorCode::InvalidCredentials
            | ErrorCode::TokenExpired
            | ErrorCode::TokenInvalid
            | ErrorCode::SessionExpired
            | ErrorCode::RefreshFailed => StatusCode::UNAUTHORIZED,

            // Permission
            ErrorCode::PermissionDenied | ErrorCode::RoleRequired => StatusCode::FORBIDDEN,

            // Appointment
            ErrorCode::AppointmentNotFound => StatusCode::NOT_FOUND,
            ErrorCode::AppointmentAlreadyCompleted
            | ErrorCode::AppointmentAlreadyCancelled
            | ErrorCode::SchedulingConflict => StatusCode::CONFLICT,
            ErrorCode::InvalidSchedule => StatusCode::BAD_REQUEST,

            // Inventory
            ErrorCode::InventoryItemNotFound => StatusCode::NOT_FOUND,
            ErrorCode::UsageRecordFailed => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InsufficientStock => StatusCode::UNPROCESSABLE_ENTITY,

            // Service catalog
            ErrorCode::ServiceNotFound => StatusCode::NOT_FOUND,
            ErrorCode::ServiceInvalidDuration | ErrorCode::ServiceInvalidPrice => {
                StatusCode::UNPROCESSABLE_ENTITY
            }

            // Staff
            ErrorCode::StaffNotFound => StatusCode::NOT_FOUND,
            ErrorCode::NotAGroomer => StatusCode::UNPROCESSABLE_ENTITY,

            // System
            ErrorCode::InternalError
            | ErrorCode::DatabaseError
            | ErrorCode::NetworkError
            | ErrorCode::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::TimeoutError => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}
