//! CompleteAppointment action
//!
//! Records consumable usage for a completed appointment: one ledger call
//! per consumed line, dispatched concurrently with no ordering guarantee.
//! There is no rollback — lines recorded before a failure stay recorded,
//! and the aggregate error names every line that failed.

use futures::future::join_all;
use serde::Deserialize;

use crate::error::{FlowError, FlowResult};
use crate::notify::Notification;
use crate::traits::FlowContext;
use crate::validate::{MAX_NAME_LEN, validate_required_text};
use shared::models::UsageRecordCreate;

/// One consumable line, owned by the completion form until submission
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UsageLine {
    /// Item reference (String ID)
    pub item_id: String,
    /// Item name snapshot for the audit note
    pub item_name: String,
    /// Quantity consumed; lines with <= 0 are dropped, not errors
    pub quantity: i32,
}

/// CompleteAppointment action
#[derive(Debug, Clone, Deserialize)]
pub struct CompleteAppointmentAction {
    pub appointment_id: String,
    /// Service the consumables were used for (String ID)
    pub service_id: String,
    pub consumables: Vec<UsageLine>,
}

impl CompleteAppointmentAction {
    /// Record usage for every consumed line, then invoke `on_completed`.
    ///
    /// The callback runs only when every record call succeeded.
    pub async fn execute<F>(&self, ctx: &FlowContext, on_completed: F) -> FlowResult<Notification>
    where
        F: FnOnce(),
    {
        // 1. Validate references
        validate_required_text(&self.appointment_id, "appointment_id", MAX_NAME_LEN)?;
        validate_required_text(&self.service_id, "service_id", MAX_NAME_LEN)?;

        // 2. Drop empty lines; quantities <= 0 are not errors
        let lines: Vec<&UsageLine> = self
            .consumables
            .iter()
            .filter(|line| line.quantity > 0)
            .collect();

        // 3. One record call per line, all in flight at once
        let calls = lines.iter().map(|line| {
            let record = UsageRecordCreate {
                item_id: line.item_id.clone(),
                quantity_used: line.quantity,
                service_id: self.service_id.clone(),
                appointment_id: self.appointment_id.clone(),
                used_by: ctx.actor.actor_id.clone(),
                notes: Some(format!(
                    "{} used during appointment {}",
                    line.item_name, self.appointment_id
                )),
            };
            let ledger = ctx.ledger.clone();
            async move { ledger.record_usage(&record).await }
        });
        let results = join_all(calls).await;

        // 4. Aggregate failures; already-recorded lines are not rolled back
        let failed_items: Vec<String> = lines
            .iter()
            .zip(results.iter())
            .filter(|(_, result)| result.is_err())
            .map(|(line, _)| line.item_id.clone())
            .collect();
        if !failed_items.is_empty() {
            for (line, result) in lines.iter().zip(&results) {
                if let Err(err) = result {
                    tracing::warn!(
                        appointment_id = %self.appointment_id,
                        item_id = %line.item_id,
                        %err,
                        "usage record failed"
                    );
                }
            }
            return Err(FlowError::UsageRecording { failed_items });
        }

        tracing::info!(
            appointment_id = %self.appointment_id,
            recorded = lines.len(),
            command_id = %ctx.actor.command_id,
            "appointment completed"
        );
        on_completed();
        Ok(Notification::success(
            "Appointment completed",
            format!("Recorded usage for {} item(s)", lines.len()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::{MockCatalog, MockLedger, MockStore, test_context};
    use crate::notify::NotificationKind;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn line(item_id: &str, item_name: &str, quantity: i32) -> UsageLine {
        UsageLine {
            item_id: item_id.to_string(),
            item_name: item_name.to_string(),
            quantity,
        }
    }

    fn complete_action(consumables: Vec<UsageLine>) -> CompleteAppointmentAction {
        CompleteAppointmentAction {
            appointment_id: "appt-1".to_string(),
            service_id: "svc-1".to_string(),
            consumables,
        }
    }

    fn context_with(ledger: MockLedger) -> (Arc<MockLedger>, FlowContext) {
        let ledger = Arc::new(ledger);
        let ctx = test_context(
            Arc::new(MockStore::default()),
            Arc::new(MockCatalog::default()),
            ledger.clone(),
        );
        (ledger, ctx)
    }

    #[tokio::test]
    async fn test_zero_and_negative_quantities_are_filtered() {
        let (ledger, ctx) = context_with(MockLedger::default());
        let action = complete_action(vec![
            line("item-a", "Oatmeal shampoo", 2),
            line("item-b", "Nail file", 0),
            line("item-c", "Ear wipes", -1),
        ]);

        action.execute(&ctx, || {}).await.unwrap();

        let records = ledger.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].item_id, "item-a");
        assert_eq!(records[0].quantity_used, 2);
    }

    #[tokio::test]
    async fn test_one_record_per_line_with_generated_note() {
        let (ledger, ctx) = context_with(MockLedger::default());
        let action = complete_action(vec![
            line("item-a", "Oatmeal shampoo", 2),
            line("item-b", "Ear wipes", 5),
        ]);

        let callback_fired = AtomicBool::new(false);
        let notification = action
            .execute(&ctx, || callback_fired.store(true, Ordering::SeqCst))
            .await
            .unwrap();

        assert!(callback_fired.load(Ordering::SeqCst));
        assert_eq!(notification.kind, NotificationKind::Success);

        let records = ledger.records.lock().unwrap();
        assert_eq!(records.len(), 2);
        let shampoo = records.iter().find(|r| r.item_id == "item-a").unwrap();
        assert_eq!(
            shampoo.notes.as_deref(),
            Some("Oatmeal shampoo used during appointment appt-1")
        );
        assert_eq!(shampoo.service_id, "svc-1");
        assert_eq!(shampoo.appointment_id, "appt-1");
        assert_eq!(shampoo.used_by, "staff-7");
    }

    #[tokio::test]
    async fn test_failure_aggregates_and_keeps_recorded_lines() {
        let (ledger, ctx) = context_with(MockLedger::failing_for(&["item-b"]));
        let action = complete_action(vec![
            line("item-a", "Oatmeal shampoo", 2),
            line("item-b", "Nail file", 1),
            line("item-c", "Ear wipes", 3),
        ]);

        let callback_fired = AtomicBool::new(false);
        let result = action
            .execute(&ctx, || callback_fired.store(true, Ordering::SeqCst))
            .await;

        // One aggregated error, callback never invoked
        match result {
            Err(FlowError::UsageRecording { failed_items }) => {
                assert_eq!(failed_items, vec!["item-b".to_string()]);
            }
            other => panic!("Expected UsageRecording error, got {:?}", other),
        }
        assert!(!callback_fired.load(Ordering::SeqCst));

        // Already-resolved calls remain applied; no rollback
        let records = ledger.records.lock().unwrap();
        let mut recorded: Vec<String> = records.iter().map(|r| r.item_id.clone()).collect();
        recorded.sort_unstable();
        assert_eq!(recorded, vec!["item-a".to_string(), "item-c".to_string()]);
    }

    #[tokio::test]
    async fn test_every_failed_line_is_named() {
        let (_, ctx) = context_with(MockLedger::failing_for(&["item-a", "item-c"]));
        let action = complete_action(vec![
            line("item-a", "Oatmeal shampoo", 1),
            line("item-b", "Nail file", 1),
            line("item-c", "Ear wipes", 1),
        ]);

        match action.execute(&ctx, || {}).await {
            Err(FlowError::UsageRecording { mut failed_items }) => {
                failed_items.sort_unstable();
                assert_eq!(failed_items, vec!["item-a".to_string(), "item-c".to_string()]);
            }
            other => panic!("Expected UsageRecording error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_nothing_to_record_still_completes() {
        let (ledger, ctx) = context_with(MockLedger::default());
        let action = complete_action(vec![line("item-a", "Nail file", 0)]);

        let callback_fired = AtomicBool::new(false);
        action
            .execute(&ctx, || callback_fired.store(true, Ordering::SeqCst))
            .await
            .unwrap();

        assert!(callback_fired.load(Ordering::SeqCst));
        assert!(ledger.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_references_fail_before_any_ledger_call() {
        let (ledger, ctx) = context_with(MockLedger::default());
        let mut action = complete_action(vec![line("item-a", "Oatmeal shampoo", 1)]);
        action.appointment_id = "  ".to_string();

        let callback_fired = AtomicBool::new(false);
        let result = action
            .execute(&ctx, || callback_fired.store(true, Ordering::SeqCst))
            .await;

        assert!(matches!(result, Err(FlowError::Validation(_))));
        assert!(!callback_fired.load(Ordering::SeqCst));
        assert!(ledger.records.lock().unwrap().is_empty());
    }
}
