//! In-memory collaborators for action tests

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{FlowError, FlowResult};
use crate::traits::{ActorMetadata, AppointmentStore, FlowContext, InventoryLedger, ServiceCatalog};
use shared::models::{
    Appointment, AppointmentStatus, AppointmentUpdate, Service, ServiceCategory, UsageRecordCreate,
};

/// In-memory appointment store recording every call
#[derive(Default)]
pub(crate) struct MockStore {
    pub appointments: Mutex<Vec<Appointment>>,
    pub updates: Mutex<Vec<(String, AppointmentUpdate)>>,
    pub fetch_calls: AtomicUsize,
}

impl MockStore {
    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments: Mutex::new(appointments),
            ..Default::default()
        }
    }

    pub fn network_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst) + self.updates.lock().unwrap().len()
    }
}

#[async_trait]
impl AppointmentStore for MockStore {
    async fn fetch(&self, appointment_id: &str) -> FlowResult<Appointment> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.appointments
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == appointment_id)
            .cloned()
            .ok_or_else(|| FlowError::NotFound(format!("appointment {}", appointment_id)))
    }

    async fn update(&self, appointment_id: &str, update: &AppointmentUpdate) -> FlowResult<()> {
        self.updates
            .lock()
            .unwrap()
            .push((appointment_id.to_string(), update.clone()));
        Ok(())
    }

    async fn list_for_groomer(&self, groomer_id: &str) -> FlowResult<Vec<Appointment>> {
        Ok(self
            .appointments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.groomer_id.as_deref() == Some(groomer_id))
            .cloned()
            .collect())
    }
}

/// Fixed service catalog
#[derive(Default)]
pub(crate) struct MockCatalog {
    pub services: Vec<Service>,
}

#[async_trait]
impl ServiceCatalog for MockCatalog {
    async fn list_services(&self) -> FlowResult<Vec<Service>> {
        Ok(self.services.clone())
    }
}

/// In-memory ledger with per-item failure injection
#[derive(Default)]
pub(crate) struct MockLedger {
    pub records: Mutex<Vec<UsageRecordCreate>>,
    pub fail_items: HashSet<String>,
}

impl MockLedger {
    pub fn failing_for(items: &[&str]) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait]
impl InventoryLedger for MockLedger {
    async fn record_usage(&self, record: &UsageRecordCreate) -> FlowResult<()> {
        if self.fail_items.contains(&record.item_id) {
            return Err(FlowError::Remote {
                code: Some(9001),
                message: format!("ledger rejected item {}", record.item_id),
            });
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

pub(crate) fn test_actor() -> ActorMetadata {
    ActorMetadata {
        command_id: "cmd-1".to_string(),
        actor_id: "staff-7".to_string(),
        actor_name: "Test Groomer".to_string(),
        timestamp: 1234567890,
    }
}

pub(crate) fn test_context(
    store: Arc<MockStore>,
    catalog: Arc<MockCatalog>,
    ledger: Arc<MockLedger>,
) -> FlowContext {
    FlowContext::new(store, catalog, ledger, test_actor())
}

pub(crate) fn service(id: &str, duration: i64, price: f64) -> Service {
    Service {
        id: id.to_string(),
        name: format!("Service {}", id),
        duration,
        price,
        category: ServiceCategory::Service,
    }
}

pub(crate) fn appointment(id: &str, groomer_id: Option<&str>, scheduled_at: &str) -> Appointment {
    Appointment {
        id: id.to_string(),
        customer_id: "cust-1".to_string(),
        pet_id: "pet-1".to_string(),
        services: vec!["svc-1".to_string()],
        groomer_id: groomer_id.map(|g| g.to_string()),
        scheduled_at: scheduled_at.parse().unwrap(),
        status: AppointmentStatus::Pending,
        notes: None,
        total_duration: 30,
        total_price: 35.0,
        created_at: None,
    }
}
