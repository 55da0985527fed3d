//! Inventory Model

use serde::{Deserialize, Serialize};

/// Inventory item (consumable stock)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    /// On-hand quantity
    #[serde(default)]
    pub quantity: i32,
    pub unit: Option<String>,
}

/// Usage record payload (one consumable line per call)
///
/// Field names follow the inventory API contract (snake_case on the
/// wire). The Ledger owns stock decrement and the audit trail; callers
/// issue exactly one call per line and do not retry or deduplicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageRecordCreate {
    /// Item reference (String ID)
    pub item_id: String,
    /// Quantity consumed (> 0)
    pub quantity_used: i32,
    /// Service reference (String ID)
    pub service_id: String,
    /// Appointment reference (String ID)
    pub appointment_id: String,
    /// Actor who recorded the usage (String ID)
    pub used_by: String,
    pub notes: Option<String>,
}
