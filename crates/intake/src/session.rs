// File: src/session.rs
// Purpose: Form session - owns form state and the submit/reset lifecycle

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::config::IntakeConfig;
use crate::field::FieldKey;
use crate::files::{file_summary, EMPTY_FILE_SUMMARY};
use crate::form::EstimateForm;
use crate::payload::{PayloadBuilder, RequestPayload};
use crate::sink::SubmitSink;
use crate::status::{StatusKind, StatusLine};
use crate::validation::{validate_form, ValidationReport, INVALID_SUBMIT_MESSAGE};

/// Banner shown after a successful submit
pub const SUCCESS_MESSAGE: &str = "Request submitted. We'll contact you soon.";

/// Result of one submit attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation passed and the payload reached both sinks
    Accepted(RequestPayload),
    /// Validation failed; the report holds the per-field errors
    Rejected(ValidationReport),
    /// Submission was disabled while a reset is pending
    Ignored,
}

struct SessionState {
    form: EstimateForm,
    report: ValidationReport,
    status: StatusLine,
    file_summary: String,
    submit_enabled: bool,
    reset_task: Option<JoinHandle<()>>,
}

impl SessionState {
    fn new() -> Self {
        Self {
            form: EstimateForm::default(),
            report: ValidationReport::default(),
            status: StatusLine::default(),
            file_summary: EMPTY_FILE_SUMMARY.to_string(),
            submit_enabled: true,
            reset_task: None,
        }
    }

    /// Idempotent return to the idle state
    fn apply_reset(&mut self) {
        self.form.reset();
        self.report = ValidationReport::default();
        self.status.clear();
        self.file_summary = EMPTY_FILE_SUMMARY.to_string();
        self.submit_enabled = true;
    }
}

/// One intake form's live state and submit lifecycle
///
/// Wires the validator, payload builder, and status handling together:
/// edits go through `update`, `submit` runs the whole flow, and a
/// successful submit schedules the delayed reset. Clones share the same
/// session.
pub struct FormSession {
    state: Arc<RwLock<SessionState>>,
    builder: PayloadBuilder,
    fulfillment: Arc<dyn SubmitSink>,
    confirmation: Arc<dyn SubmitSink>,
    reset_delay: Duration,
}

impl FormSession {
    /// Create a session delivering accepted payloads to the two sinks
    pub fn new(
        config: &IntakeConfig,
        fulfillment: Arc<dyn SubmitSink>,
        confirmation: Arc<dyn SubmitSink>,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::new())),
            builder: PayloadBuilder::new(config.submit.id_prefix.clone()),
            fulfillment,
            confirmation,
            reset_delay: config.submit.reset_delay(),
        }
    }

    /// Snapshot of the current form values
    pub async fn form(&self) -> EstimateForm {
        self.state.read().await.form.clone()
    }

    /// Edit the form in place
    ///
    /// The attachment summary is refreshed after every edit, so changing
    /// `attachments` here is all a file-picker integration needs to do.
    pub async fn update<F>(&self, edit: F)
    where
        F: FnOnce(&mut EstimateForm),
    {
        let mut state = self.state.write().await;
        edit(&mut state.form);
        state.file_summary = file_summary(&state.form.attachments);
    }

    /// Current attachment summary line
    pub async fn file_summary(&self) -> String {
        self.state.read().await.file_summary.clone()
    }

    /// Current status banner
    pub async fn status(&self) -> StatusLine {
        self.state.read().await.status.clone()
    }

    /// Validation report from the last submit attempt
    pub async fn report(&self) -> ValidationReport {
        self.state.read().await.report.clone()
    }

    /// Error recorded for one field by the last submit attempt
    pub async fn field_error(&self, key: FieldKey) -> Option<String> {
        self.state
            .read()
            .await
            .report
            .get_error(key)
            .map(str::to_string)
    }

    /// Whether a submit attempt would currently be processed
    pub async fn is_submit_enabled(&self) -> bool {
        self.state.read().await.submit_enabled
    }

    /// Whether a delayed reset is outstanding
    pub async fn has_pending_reset(&self) -> bool {
        self.state.read().await.reset_task.is_some()
    }

    /// Run one submit attempt end to end
    ///
    /// Validation failure sets the error banner and the per-field report.
    /// Success builds the payload, hands it to the fulfillment sink and
    /// then the confirmation sink, sets the success banner, disables
    /// submission, and arms the delayed reset. A sink failure propagates
    /// and leaves submission enabled so the caller can retry.
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let snapshot = {
            let mut state = self.state.write().await;

            if !state.submit_enabled {
                tracing::debug!("submit ignored while reset pending");
                return Ok(SubmitOutcome::Ignored);
            }

            state.status.clear();

            let report = validate_form(&state.form);
            if !report.is_valid() {
                tracing::debug!(
                    errors = report.get_errors().len(),
                    "submit rejected by validation"
                );
                state.status.set(INVALID_SUBMIT_MESSAGE, StatusKind::Error);
                state.report = report.clone();
                return Ok(SubmitOutcome::Rejected(report));
            }

            state.report = ValidationReport::default();
            state.form.clone()
        };

        // Build and deliver outside the lock
        let payload = self.builder.build(&snapshot)?;
        self.fulfillment.accept(&payload).await?;
        self.confirmation.accept(&payload).await?;

        tracing::info!(
            request_id = %payload.request_id,
            fulfillment = self.fulfillment.name(),
            confirmation = self.confirmation.name(),
            "request accepted"
        );

        {
            let mut state = self.state.write().await;
            state.status.set(SUCCESS_MESSAGE, StatusKind::Success);
            state.submit_enabled = false;
        }

        self.schedule_reset().await;

        Ok(SubmitOutcome::Accepted(payload))
    }

    /// Cancel any pending reset and return to idle immediately
    pub async fn reset_now(&self) {
        let mut state = self.state.write().await;
        if let Some(task) = state.reset_task.take() {
            task.abort();
        }
        state.apply_reset();
    }

    /// Arm the delayed reset, replacing a stale pending one
    ///
    /// The state lock is held while spawning so the task cannot fire before
    /// its own handle is stored.
    async fn schedule_reset(&self) {
        let mut state = self.state.write().await;

        let shared = Arc::clone(&self.state);
        let delay = self.reset_delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = shared.write().await;
            state.apply_reset();
            state.reset_task = None;
        });

        if let Some(stale) = state.reset_task.replace(task) {
            stale.abort();
        }
    }
}

impl Clone for FormSession {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            builder: self.builder.clone(),
            fulfillment: Arc::clone(&self.fulfillment),
            confirmation: Arc::clone(&self.confirmation),
            reset_delay: self.reset_delay,
        }
    }
}
