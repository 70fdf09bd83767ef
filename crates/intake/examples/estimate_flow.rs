// Example: Full intake submit flow
// Shows a rejected submit, a fixed-up accepted submit, and the timed reset

use std::sync::Arc;
use std::time::Duration;

use intake::{
    ContactMethod, FieldKey, FileMeta, FormSession, IntakeConfig, LogSink, ServiceType,
    SubmitConfig, SubmitOutcome,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== Intake Submit Flow Demo ===\n");

    // Short reset delay so the demo does not sit around for 3 seconds
    let config = IntakeConfig {
        submit: SubmitConfig {
            reset_delay_ms: 500,
            id_prefix: "EST".to_string(),
        },
    };

    let session = FormSession::new(
        &config,
        Arc::new(LogSink::new("fulfillment")),
        Arc::new(LogSink::new("customer-confirmation")),
    );

    // Test 1: Submitting a half-filled form
    println!("Test 1: Half-filled form");
    session
        .update(|form| {
            form.full_name = "Dana Smith".to_string();
            form.email = "dana@".to_string();
        })
        .await;

    match session.submit().await? {
        SubmitOutcome::Rejected(report) => {
            println!("✗ Rejected ({} errors):", report.get_errors().len());
            for (key, message) in report.get_errors() {
                println!("  - {}: {}", key, message);
            }
            println!("  banner: {}\n", session.status().await.message());
        }
        other => println!("unexpected outcome: {other:?}\n"),
    }

    // Test 2: Filling the rest and attaching photos
    println!("Test 2: Completed form");
    session
        .update(|form| {
            form.email = "dana@example.com".to_string();
            form.phone = "(555) 123-4567".to_string();
            form.contact_method = Some(ContactMethod::Email);
            form.service_type = Some(ServiceType::Repair);
            form.notes = "Leaky faucet in the upstairs bathroom".to_string();
            form.zip = "62704".to_string();
            form.property_confirmed = true;
            form.attachments = vec![
                FileMeta::new("faucet.jpg", "image/jpeg", 120_000),
                FileMeta::new("ceiling-stain.jpg", "image/jpeg", 95_000),
            ];
        })
        .await;

    println!("  attachments: {}", session.file_summary().await);
    if let Some(error) = session.field_error(FieldKey::Email).await {
        println!("  email still flagged from last attempt: {error}");
    }

    match session.submit().await? {
        SubmitOutcome::Accepted(payload) => {
            println!("✓ Accepted as {}", payload.request_id);
            println!("  banner: {}", session.status().await.message());
            println!(
                "  submit enabled: {}\n",
                session.is_submit_enabled().await
            );
        }
        other => println!("unexpected outcome: {other:?}\n"),
    }

    // Test 3: The delayed reset returns the form to idle
    println!("Test 3: Waiting for the reset");
    tokio::time::sleep(Duration::from_millis(700)).await;

    println!("  submit enabled: {}", session.is_submit_enabled().await);
    println!("  attachments: {}", session.file_summary().await);
    println!(
        "  banner cleared: {}\n",
        session.status().await.is_clear()
    );

    println!("=== Demo Complete ===");
    Ok(())
}
