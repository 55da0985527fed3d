//! Inventory endpoints

use super::{expect_ok, unwrap_data};
use crate::{ClientResult, HttpClient};
use shared::error::ApiResponse;
use shared::models::{InventoryItem, UsageRecordCreate};

impl HttpClient {
    /// List all inventory items
    pub async fn list_inventory_items(&self) -> ClientResult<Vec<InventoryItem>> {
        let resp: ApiResponse<Vec<InventoryItem>> = self.get("api/inventory/items").await?;
        unwrap_data(resp)
    }

    /// Record one consumable usage event
    pub async fn record_usage(&self, record: &UsageRecordCreate) -> ClientResult<()> {
        let resp: ApiResponse<()> = self.post("api/inventory/usage", record).await?;
        expect_ok(resp)
    }
}
