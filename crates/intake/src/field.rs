// File: src/field.rs
// Purpose: Form field keys and the declarative rule table for text fields

use serde::{Deserialize, Serialize};

/// Addressable fields of the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    FullName,
    Email,
    Phone,
    ContactMethod,
    ServiceType,
    Notes,
    Street,
    City,
    State,
    Zip,
    PropertyConfirm,
}

impl FieldKey {
    /// Wire name of the field, matching the payload contract casing
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::FullName => "fullName",
            FieldKey::Email => "email",
            FieldKey::Phone => "phone",
            FieldKey::ContactMethod => "contactMethod",
            FieldKey::ServiceType => "serviceType",
            FieldKey::Notes => "notes",
            FieldKey::Street => "street",
            FieldKey::City => "city",
            FieldKey::State => "state",
            FieldKey::Zip => "zip",
            FieldKey::PropertyConfirm => "propertyConfirm",
        }
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shape checks a text field's value can be held to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuePattern {
    Email,
    UsPhone,
    Zip,
}

impl ValuePattern {
    /// Run the shape check against an already-trimmed value
    pub fn matches(&self, value: &str) -> bool {
        match self {
            ValuePattern::Email => intake_validation::is_valid_email(value),
            ValuePattern::UsPhone => intake_validation::is_valid_us_phone(value),
            ValuePattern::Zip => intake_validation::is_valid_zip(value),
        }
    }
}

/// Declarative rule row for one text field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub required: bool,
    pub pattern: Option<ValuePattern>,
    pub min_length: Option<usize>,
}

/// Rule table for the text fields
///
/// Selection and confirmation rules (contact method, service type, property
/// confirmation) are not string-valued and live in the validator itself.
pub const TEXT_FIELD_SPECS: &[FieldSpec] = &[
    FieldSpec {
        key: FieldKey::FullName,
        required: true,
        pattern: None,
        min_length: None,
    },
    FieldSpec {
        key: FieldKey::Email,
        required: true,
        pattern: Some(ValuePattern::Email),
        min_length: None,
    },
    FieldSpec {
        key: FieldKey::Phone,
        required: true,
        pattern: Some(ValuePattern::UsPhone),
        min_length: None,
    },
    FieldSpec {
        key: FieldKey::Notes,
        required: true,
        pattern: None,
        min_length: Some(10),
    },
    FieldSpec {
        key: FieldKey::Street,
        required: false,
        pattern: None,
        min_length: None,
    },
    FieldSpec {
        key: FieldKey::City,
        required: false,
        pattern: None,
        min_length: None,
    },
    FieldSpec {
        key: FieldKey::State,
        required: false,
        pattern: None,
        min_length: None,
    },
    FieldSpec {
        key: FieldKey::Zip,
        required: false,
        pattern: Some(ValuePattern::Zip),
        min_length: None,
    },
];
