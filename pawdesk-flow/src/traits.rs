//! Workflow collaborator traits and invocation context
//!
//! The Appointment Store and Inventory Ledger are remote systems of
//! record; the workflow reaches them only through these seams. The HTTP
//! client implements them for production, tests use in-memory stand-ins.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::FlowResult;
use shared::models::{Appointment, AppointmentUpdate, Service, UsageRecordCreate};

/// System of record for appointments
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Fetch a single appointment
    async fn fetch(&self, appointment_id: &str) -> FlowResult<Appointment>;

    /// Persist a validated edit
    async fn update(&self, appointment_id: &str, update: &AppointmentUpdate) -> FlowResult<()>;

    /// List a groomer's appointments (conflict scan input)
    async fn list_for_groomer(&self, groomer_id: &str) -> FlowResult<Vec<Appointment>>;
}

/// Read-only service reference data
#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    async fn list_services(&self) -> FlowResult<Vec<Service>>;
}

/// System of record for stock levels and usage history
#[async_trait]
pub trait InventoryLedger: Send + Sync {
    /// Record one usage event. The ledger owns the stock decrement and
    /// the audit trail; callers issue one call per line and never retry.
    async fn record_usage(&self, record: &UsageRecordCreate) -> FlowResult<()>;
}

/// Metadata describing the actor behind a workflow invocation
#[derive(Debug, Clone)]
pub struct ActorMetadata {
    /// Client-generated command identifier
    pub command_id: String,
    /// Acting staff member (String ID)
    pub actor_id: String,
    pub actor_name: String,
    /// Invocation timestamp (Unix millis)
    pub timestamp: i64,
}

impl ActorMetadata {
    pub fn new(actor_id: impl Into<String>, actor_name: impl Into<String>) -> Self {
        Self {
            command_id: Uuid::new_v4().to_string(),
            actor_id: actor_id.into(),
            actor_name: actor_name.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

/// Explicit workflow context
///
/// Collaborators and actor identity travel together instead of living in
/// ambient globals; every operation takes the context it runs against.
#[derive(Clone)]
pub struct FlowContext {
    pub store: Arc<dyn AppointmentStore>,
    pub catalog: Arc<dyn ServiceCatalog>,
    pub ledger: Arc<dyn InventoryLedger>,
    pub actor: ActorMetadata,
}

impl FlowContext {
    pub fn new(
        store: Arc<dyn AppointmentStore>,
        catalog: Arc<dyn ServiceCatalog>,
        ledger: Arc<dyn InventoryLedger>,
        actor: ActorMetadata,
    ) -> Self {
        Self {
            store,
            catalog,
            ledger,
            actor,
        }
    }
}
