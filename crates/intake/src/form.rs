// File: src/form.rs
// Purpose: Intake form state and its fixed option sets

use serde::{Deserialize, Serialize};

use crate::field::FieldKey;
use crate::files::FileMeta;

/// Preferred way to reach the customer back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Phone,
    Email,
    Text,
}

impl std::fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactMethod::Phone => write!(f, "phone"),
            ContactMethod::Email => write!(f, "email"),
            ContactMethod::Text => write!(f, "text"),
        }
    }
}

/// Kind of work being requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Repair,
    Remodel,
    Inspection,
    Maintenance,
    Other,
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceType::Repair => write!(f, "repair"),
            ServiceType::Remodel => write!(f, "remodel"),
            ServiceType::Inspection => write!(f, "inspection"),
            ServiceType::Maintenance => write!(f, "maintenance"),
            ServiceType::Other => write!(f, "other"),
        }
    }
}

/// Current values of one intake form
///
/// The explicit stand-in for the on-screen fields. The session owns one and
/// hands snapshots to the validator and the payload builder; `None` on the
/// selection fields means nothing has been picked yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimateForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub contact_method: Option<ContactMethod>,
    pub service_type: Option<ServiceType>,
    pub notes: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub property_confirmed: bool,
    pub attachments: Vec<FileMeta>,
}

impl EstimateForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a text field, `None` for the non-text fields
    pub fn text_value(&self, key: FieldKey) -> Option<&str> {
        match key {
            FieldKey::FullName => Some(&self.full_name),
            FieldKey::Email => Some(&self.email),
            FieldKey::Phone => Some(&self.phone),
            FieldKey::Notes => Some(&self.notes),
            FieldKey::Street => Some(&self.street),
            FieldKey::City => Some(&self.city),
            FieldKey::State => Some(&self.state),
            FieldKey::Zip => Some(&self.zip),
            FieldKey::ContactMethod | FieldKey::ServiceType | FieldKey::PropertyConfirm => None,
        }
    }

    /// Clear every field back to its initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
