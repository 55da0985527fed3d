//! Collaborator-trait implementations backed by the HTTP client
//!
//! Bridges the workflow's store/catalog/ledger seams onto the typed
//! endpoints, mapping client errors into the workflow taxonomy.

use async_trait::async_trait;

use crate::{ClientError, HttpClient};
use pawdesk_flow::error::{FlowError, FlowResult};
use pawdesk_flow::traits::{AppointmentStore, InventoryLedger, ServiceCatalog};
use shared::models::{Appointment, AppointmentUpdate, Service, UsageRecordCreate};

/// Map a client error into the workflow error taxonomy
fn to_flow_error(err: ClientError) -> FlowError {
    match err {
        ClientError::Unauthorized => FlowError::Authentication("Session expired".to_string()),
        ClientError::NotFound(resource) => FlowError::NotFound(resource),
        ClientError::Validation(message) => FlowError::Validation(message),
        ClientError::Api { code, message, .. } => FlowError::Remote {
            code: Some(code),
            message,
        },
        other => FlowError::Remote {
            code: None,
            message: other.to_string(),
        },
    }
}

#[async_trait]
impl AppointmentStore for HttpClient {
    async fn fetch(&self, appointment_id: &str) -> FlowResult<Appointment> {
        self.get_appointment(appointment_id)
            .await
            .map_err(to_flow_error)
    }

    async fn update(&self, appointment_id: &str, update: &AppointmentUpdate) -> FlowResult<()> {
        self.update_appointment(appointment_id, update)
            .await
            .map_err(to_flow_error)
    }

    async fn list_for_groomer(&self, groomer_id: &str) -> FlowResult<Vec<Appointment>> {
        self.list_appointments_for_groomer(groomer_id)
            .await
            .map_err(to_flow_error)
    }
}

#[async_trait]
impl ServiceCatalog for HttpClient {
    async fn list_services(&self) -> FlowResult<Vec<Service>> {
        HttpClient::list_services(self).await.map_err(to_flow_error)
    }
}

#[async_trait]
impl InventoryLedger for HttpClient {
    async fn record_usage(&self, record: &UsageRecordCreate) -> FlowResult<()> {
        HttpClient::record_usage(self, record)
            .await
            .map_err(to_flow_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_maps_to_authentication() {
        let err = to_flow_error(ClientError::Unauthorized);
        assert!(matches!(err, FlowError::Authentication(_)));
    }

    #[test]
    fn test_api_error_maps_to_remote_with_server_message() {
        let err = to_flow_error(ClientError::Api {
            code: 5002,
            message: "Usage record could not be stored".to_string(),
            details: None,
        });
        match err {
            FlowError::Remote { code, message } => {
                assert_eq!(code, Some(5002));
                assert_eq!(message, "Usage record could not be stored");
            }
            other => panic!("Expected Remote error, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_and_validation_map_directly() {
        assert!(matches!(
            to_flow_error(ClientError::NotFound("appointment appt-1".to_string())),
            FlowError::NotFound(_)
        ));
        assert!(matches!(
            to_flow_error(ClientError::Validation("bad payload".to_string())),
            FlowError::Validation(_)
        ));
    }

    #[test]
    fn test_other_errors_map_to_remote_without_code() {
        let err = to_flow_error(ClientError::Internal("boom".to_string()));
        assert!(matches!(err, FlowError::Remote { code: None, .. }));
    }
}
