// File: src/payload.rs
// Purpose: Request payload wire shape and the builder that assembles it

use anyhow::{Context, Result};
use chrono::{Local, SecondsFormat, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::files::FileMeta;
use crate::form::{ContactMethod, EstimateForm, ServiceType};

/// Default prefix of generated request ids
pub const DEFAULT_ID_PREFIX: &str = "EST";

/// Postal address block of the payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// One attached file as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub size: u64,
}

impl From<&FileMeta> for FileDescriptor {
    fn from(meta: &FileMeta) -> Self {
        Self {
            name: meta.name.clone(),
            content_type: meta.content_type.clone(),
            size: meta.size,
        }
    }
}

/// One completed service request, ready for hand-off
///
/// The serde projection is the wire contract a receiving service accepts:
/// camelCase keys, `type` for the file content type, all text trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    pub request_id: String,
    pub timestamp: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub contact_method: ContactMethod,
    pub service_type: ServiceType,
    pub notes: String,
    pub address: Address,
    pub files: Vec<FileDescriptor>,
    pub property_confirmed: bool,
}

/// Assembles request payloads from validated form snapshots
#[derive(Debug, Clone)]
pub struct PayloadBuilder {
    id_prefix: String,
}

impl PayloadBuilder {
    /// Create a builder stamping ids with the given prefix
    pub fn new(id_prefix: impl Into<String>) -> Self {
        Self {
            id_prefix: id_prefix.into(),
        }
    }

    /// Assemble the wire payload from a validated form snapshot
    ///
    /// Callers validate first; a form that still has no contact method or
    /// service type selected is an error here, not a validation failure.
    pub fn build(&self, form: &EstimateForm) -> Result<RequestPayload> {
        let contact_method = form
            .contact_method
            .context("contact method missing from validated form")?;
        let service_type = form
            .service_type
            .context("service type missing from validated form")?;

        Ok(RequestPayload {
            request_id: self.next_request_id(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            full_name: form.full_name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            contact_method,
            service_type,
            notes: form.notes.trim().to_string(),
            address: Address {
                street: form.street.trim().to_string(),
                city: form.city.trim().to_string(),
                state: form.state.trim().to_string(),
                zip: form.zip.trim().to_string(),
            },
            files: form.attachments.iter().map(FileDescriptor::from).collect(),
            property_confirmed: form.property_confirmed,
        })
    }

    /// Date-stamped, human-readable request label: `EST-20250114-4821`
    ///
    /// Local calendar date plus a 4-digit random suffix in [1000, 9999].
    /// Uniqueness is advisory; the label is for humans, not for keying.
    pub fn next_request_id(&self) -> String {
        let date = Local::now().format("%Y%m%d");
        let suffix = rand::thread_rng().gen_range(1000..=9999);
        format!("{}-{}-{}", self.id_prefix, date, suffix)
    }
}

impl Default for PayloadBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX)
    }
}
