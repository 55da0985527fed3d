//! Service catalog endpoints

use super::unwrap_data;
use crate::{ClientResult, HttpClient};
use shared::error::ApiResponse;
use shared::models::Service;

impl HttpClient {
    /// List all grooming services (reference data for totals)
    pub async fn list_services(&self) -> ClientResult<Vec<Service>> {
        let resp: ApiResponse<Vec<Service>> = self.get("api/services").await?;
        unwrap_data(resp)
    }
}
