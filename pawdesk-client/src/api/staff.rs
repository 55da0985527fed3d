//! Staff directory endpoints

use super::unwrap_data;
use crate::{ClientResult, HttpClient};
use shared::error::ApiResponse;
use shared::models::Staff;

impl HttpClient {
    /// List all staff members
    pub async fn list_staff(&self) -> ClientResult<Vec<Staff>> {
        let resp: ApiResponse<Vec<Staff>> = self.get("api/staff").await?;
        unwrap_data(resp)
    }

    /// List active groomers only
    pub async fn list_groomers(&self) -> ClientResult<Vec<Staff>> {
        let staff = self.list_staff().await?;
        Ok(staff
            .into_iter()
            .filter(|s| s.is_groomer && s.is_active)
            .collect())
    }
}
