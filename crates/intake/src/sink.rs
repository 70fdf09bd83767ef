// File: src/sink.rs
// Purpose: Submit sinks - consumers of completed request payloads

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::payload::RequestPayload;

/// Consumer of completed payloads
///
/// One accepted request fans out to two of these: the fulfillment hand-off
/// and the customer confirmation.
#[async_trait]
pub trait SubmitSink: Send + Sync {
    /// Accept one completed request payload
    async fn accept(&self, payload: &RequestPayload) -> Result<()>;

    /// Sink name for logs
    fn name(&self) -> &'static str;
}

/// Logging sink
///
/// Stands in for a real transport: serializes the payload and emits it on
/// the log stream, tagged with the recipient it is meant for.
pub struct LogSink {
    recipient: String,
}

impl LogSink {
    /// Create a logging sink for one recipient
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }
}

#[async_trait]
impl SubmitSink for LogSink {
    async fn accept(&self, payload: &RequestPayload) -> Result<()> {
        let body = serde_json::to_string(payload)?;
        tracing::info!(
            recipient = %self.recipient,
            request_id = %payload.request_id,
            payload = %body,
            "request payload handed off"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

/// In-memory recording sink
///
/// Keeps every accepted payload in arrival order so tests can assert on
/// delivery. Clones share the same buffer.
#[derive(Clone)]
pub struct RecordingSink {
    received: Arc<RwLock<Vec<RequestPayload>>>,
}

impl RecordingSink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self {
            received: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of payloads accepted so far
    pub async fn size(&self) -> usize {
        self.received.read().await.len()
    }

    /// Snapshot of every payload accepted so far
    pub async fn received(&self) -> Vec<RequestPayload> {
        self.received.read().await.clone()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmitSink for RecordingSink {
    async fn accept(&self, payload: &RequestPayload) -> Result<()> {
        let mut received = self.received.write().await;
        received.push(payload.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
