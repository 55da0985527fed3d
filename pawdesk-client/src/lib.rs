//! Pawdesk Client - HTTP client for the booking API
//!
//! Provides authenticated REST calls to the appointment store, service
//! catalog, staff directory and inventory ledger, and implements the
//! workflow collaborator traits on top of them. Every request carries
//! the session's bearer token; a 401 triggers exactly one
//! refresh-and-retry cycle before the failure surfaces.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

mod workflow;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{CurrentUserResponse, LoginResponse, UserInfo};
pub use shared::error::ApiResponse;
