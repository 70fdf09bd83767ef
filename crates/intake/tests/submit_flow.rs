//! Integration tests for the intake submit flow
//!
//! Covers the end-to-end lifecycle:
//! - Rejection of an unfilled form and per-field error reporting
//! - Acceptance: request id format, sink fan-out and ordering
//! - Wire contract of the serialized payload
//! - Timed reset after a successful submit
//! - Ignored submits while disabled and the explicit cancel path

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use regex::Regex;
use tokio::sync::Mutex;

use intake::{
    ContactMethod, EstimateForm, FieldKey, FileMeta, FormSession, IntakeConfig, RecordingSink,
    RequestPayload, ServiceType, StatusKind, SubmitConfig, SubmitOutcome, SubmitSink,
    EMPTY_FILE_SUMMARY, INVALID_SUBMIT_MESSAGE, SUCCESS_MESSAGE,
};

/// Sink that tags every delivery into a shared order log
struct TaggedSink {
    label: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
}

#[async_trait]
impl SubmitSink for TaggedSink {
    async fn accept(&self, _payload: &RequestPayload) -> Result<()> {
        self.log.lock().await.push(self.label);
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.label
    }
}

fn config(delay_ms: u64) -> IntakeConfig {
    IntakeConfig {
        submit: SubmitConfig {
            reset_delay_ms: delay_ms,
            id_prefix: "EST".to_string(),
        },
    }
}

fn recording_session(delay_ms: u64) -> (FormSession, RecordingSink, RecordingSink) {
    let fulfillment = RecordingSink::new();
    let confirmation = RecordingSink::new();
    let session = FormSession::new(
        &config(delay_ms),
        Arc::new(fulfillment.clone()),
        Arc::new(confirmation.clone()),
    );
    (session, fulfillment, confirmation)
}

fn fill_valid(form: &mut EstimateForm) {
    form.full_name = "Dana Smith".to_string();
    form.email = "dana@example.com".to_string();
    form.phone = "(555) 123-4567".to_string();
    form.contact_method = Some(ContactMethod::Phone);
    form.service_type = Some(ServiceType::Inspection);
    form.notes = "Annual inspection before the roof work starts".to_string();
    form.street = "12 Oak Street".to_string();
    form.city = "Springfield".to_string();
    form.state = "IL".to_string();
    form.zip = "62704".to_string();
    form.property_confirmed = true;
}

#[tokio::test]
async fn test_unfilled_form_is_rejected_with_field_errors() {
    let (session, fulfillment, confirmation) = recording_session(3000);

    let outcome = session.submit().await.unwrap();

    let report = match outcome {
        SubmitOutcome::Rejected(report) => report,
        other => panic!("expected rejection, got {other:?}"),
    };

    for key in [
        FieldKey::FullName,
        FieldKey::Email,
        FieldKey::Phone,
        FieldKey::ContactMethod,
        FieldKey::ServiceType,
        FieldKey::Notes,
        FieldKey::PropertyConfirm,
    ] {
        assert!(report.has_error(key), "missing error for {key}");
    }

    let status = session.status().await;
    assert_eq!(status.message(), INVALID_SUBMIT_MESSAGE);
    assert_eq!(status.kind(), StatusKind::Error);

    assert_eq!(fulfillment.size().await, 0);
    assert_eq!(confirmation.size().await, 0);
}

#[tokio::test]
async fn test_accepted_submit_produces_well_formed_payload() {
    let (session, fulfillment, confirmation) = recording_session(60_000);

    session
        .update(|form| {
            fill_valid(form);
            form.attachments = vec![
                FileMeta::new("roof.jpg", "image/jpeg", 120_000),
                FileMeta::new("gutter.png", "image/png", 80_000),
            ];
        })
        .await;

    let outcome = session.submit().await.unwrap();
    let payload = match outcome {
        SubmitOutcome::Accepted(payload) => payload,
        other => panic!("expected acceptance, got {other:?}"),
    };

    let id_pattern = Regex::new(r"^EST-\d{8}-\d{4}$").unwrap();
    assert!(
        id_pattern.is_match(&payload.request_id),
        "unexpected request id {:?}",
        payload.request_id
    );
    assert_eq!(payload.files.len(), 2);

    // Both sinks saw the identical payload
    assert_eq!(fulfillment.received().await, vec![payload.clone()]);
    assert_eq!(confirmation.received().await, vec![payload]);
}

#[tokio::test]
async fn test_fulfillment_sink_is_delivered_first() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let session = FormSession::new(
        &config(60_000),
        Arc::new(TaggedSink {
            label: "fulfillment",
            log: Arc::clone(&log),
        }),
        Arc::new(TaggedSink {
            label: "confirmation",
            log: Arc::clone(&log),
        }),
    );

    session.update(fill_valid).await;
    session.submit().await.unwrap();

    assert_eq!(*log.lock().await, vec!["fulfillment", "confirmation"]);
}

#[tokio::test]
async fn test_payload_wire_contract() {
    let (session, fulfillment, _confirmation) = recording_session(60_000);

    session
        .update(|form| {
            fill_valid(form);
            form.full_name = "  Dana Smith  ".to_string();
            form.attachments = vec![FileMeta::new("roof.jpg", "image/jpeg", 120_000)];
        })
        .await;
    session.submit().await.unwrap();

    let payload = fulfillment.received().await.remove(0);
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["fullName"], "Dana Smith");
    assert_eq!(json["contactMethod"], "phone");
    assert_eq!(json["serviceType"], "inspection");
    assert_eq!(json["propertyConfirmed"], true);
    assert_eq!(json["address"]["street"], "12 Oak Street");
    assert_eq!(json["address"]["zip"], "62704");
    assert_eq!(json["files"][0]["name"], "roof.jpg");
    assert_eq!(json["files"][0]["type"], "image/jpeg");
    assert_eq!(json["files"][0]["size"], 120_000);

    // Snake-case spellings never reach the wire
    assert!(json.get("full_name").is_none());
    assert!(json["files"][0].get("content_type").is_none());
}

#[tokio::test]
async fn test_success_status_until_reset_fires() {
    let (session, _fulfillment, _confirmation) = recording_session(30);

    session
        .update(|form| {
            fill_valid(form);
            form.attachments = vec![FileMeta::new("roof.jpg", "image/jpeg", 120_000)];
        })
        .await;
    session.submit().await.unwrap();

    let status = session.status().await;
    assert_eq!(status.message(), SUCCESS_MESSAGE);
    assert_eq!(status.kind(), StatusKind::Success);
    assert!(!session.is_submit_enabled().await);
    assert_eq!(
        session.file_summary().await,
        "1 file selected: roof.jpg"
    );

    tokio::time::sleep(Duration::from_millis(150)).await;

    assert!(session.is_submit_enabled().await);
    assert_eq!(session.form().await, EstimateForm::default());
    assert_eq!(session.file_summary().await, EMPTY_FILE_SUMMARY);
    assert!(session.status().await.is_clear());
}

#[tokio::test]
async fn test_submit_while_reset_pending_is_ignored() {
    let (session, fulfillment, confirmation) = recording_session(60_000);

    session.update(fill_valid).await;
    session.submit().await.unwrap();

    let outcome = session.submit().await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Ignored));

    assert_eq!(fulfillment.size().await, 1);
    assert_eq!(confirmation.size().await, 1);
}

#[tokio::test]
async fn test_reset_now_cancels_the_pending_reset() {
    let (session, _fulfillment, _confirmation) = recording_session(60_000);

    session.update(fill_valid).await;
    session.submit().await.unwrap();
    assert!(session.has_pending_reset().await);

    session.reset_now().await;

    assert!(!session.has_pending_reset().await);
    assert!(session.is_submit_enabled().await);
    assert_eq!(session.form().await, EstimateForm::default());

    // The aborted task must not fire later and disturb a fresh edit
    session.update(|form| form.full_name = "Riley Chen".to_string()).await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(session.form().await.full_name, "Riley Chen");
}

#[tokio::test]
async fn test_fix_after_rejection_then_accept() {
    let (session, fulfillment, _confirmation) = recording_session(60_000);

    session
        .update(|form| {
            fill_valid(form);
            form.email = "not-an-email".to_string();
        })
        .await;

    let outcome = session.submit().await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert_eq!(
        session.field_error(FieldKey::Email).await.as_deref(),
        Some("Enter a valid email address.")
    );

    session
        .update(|form| form.email = "dana@example.com".to_string())
        .await;

    let outcome = session.submit().await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
    assert_eq!(fulfillment.size().await, 1);
    assert!(session.field_error(FieldKey::Email).await.is_none());
}
