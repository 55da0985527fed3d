//! Shared types for the Pawdesk back-office
//!
//! Common types used across the client and workflow crates: domain
//! models, error types, and API response structures.

pub mod client;
pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
