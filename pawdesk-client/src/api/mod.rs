//! Typed endpoints over the generic HTTP verbs
//!
//! One module per resource, mirroring the booking API surface the
//! workflow consumes: appointments, service catalog, staff directory,
//! and inventory.

mod appointments;
mod catalog;
mod inventory;
mod staff;

use crate::{ClientError, ClientResult};
use shared::error::ApiResponse;

/// Unwrap a response envelope into its data payload
pub(crate) fn unwrap_data<T>(resp: ApiResponse<T>) -> ClientResult<T> {
    match resp.code {
        Some(0) | None => resp
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing response data".to_string())),
        Some(code) => Err(ClientError::Api {
            code,
            message: resp.message,
            details: resp.details,
        }),
    }
}

/// Check an empty response envelope for success
pub(crate) fn expect_ok(resp: ApiResponse<()>) -> ClientResult<()> {
    match resp.code {
        Some(0) | None => Ok(()),
        Some(code) => Err(ClientError::Api {
            code,
            message: resp.message,
            details: resp.details,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_data_on_success() {
        let resp = ApiResponse::success(7);
        assert_eq!(unwrap_data(resp).unwrap(), 7);
    }

    #[test]
    fn test_unwrap_data_missing_payload() {
        let resp = ApiResponse::<i32> {
            code: Some(0),
            message: "OK".to_string(),
            data: None,
            details: None,
        };
        assert!(matches!(
            unwrap_data(resp),
            Err(ClientError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_unwrap_data_error_envelope() {
        let resp = ApiResponse::<i32> {
            code: Some(4001),
            message: "Appointment not found".to_string(),
            data: None,
            details: None,
        };
        match unwrap_data(resp) {
            Err(ClientError::Api { code, message, .. }) => {
                assert_eq!(code, 4001);
                assert_eq!(message, "Appointment not found");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_expect_ok() {
        assert!(expect_ok(ApiResponse::ok()).is_ok());

        let resp = ApiResponse::<()> {
            code: Some(5002),
            message: "Usage record could not be stored".to_string(),
            data: None,
            details: None,
        };
        assert!(matches!(expect_ok(resp), Err(ClientError::Api { .. })));
    }
}
