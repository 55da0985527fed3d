//! Reschedule an appointment end to end against a running booking API.
//!
//! Usage:
//!   PAWDESK_URL=http://localhost:8080 PAWDESK_USER=... PAWDESK_PASS=... \
//!   cargo run -p pawdesk-client --example reschedule -- <appointment-id> <date> <time>

use std::sync::Arc;

use anyhow::Context;
use pawdesk_client::{ClientConfig, HttpClient};
use pawdesk_flow::{ActorMetadata, EditAppointmentAction, FlowContext, Notification};
use shared::models::AppointmentStatus;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let appointment_id = args.next().context("missing appointment id")?;
    let date = args.next().context("missing date (YYYY-MM-DD)")?;
    let time = args.next().context("missing time (HH:MM)")?;

    let base_url =
        std::env::var("PAWDESK_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let username = std::env::var("PAWDESK_USER").context("PAWDESK_USER not set")?;
    let password = std::env::var("PAWDESK_PASS").context("PAWDESK_PASS not set")?;

    let client = HttpClient::new(&ClientConfig::new(base_url))?;
    let login = client.login(&username, &password).await?;
    tracing::info!(user = %login.user.username, "logged in");

    let client = Arc::new(client);
    let ctx = FlowContext::new(
        client.clone(),
        client.clone(),
        client.clone(),
        ActorMetadata::new(login.user.id, login.user.username),
    );

    let action = EditAppointmentAction {
        appointment_id,
        status: AppointmentStatus::Confirmed,
        notes: None,
        date,
        time,
        groomer_id: None,
        services: None,
    };

    let notification: Notification = match action.execute(&ctx).await {
        Ok(notification) => notification,
        Err(err) => Notification::from_error("Update failed", &err),
    };
    println!("{}: {}", notification.title, notification.message);

    Ok(())
}
