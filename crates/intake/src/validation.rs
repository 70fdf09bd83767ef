// File: src/validation.rs
// Purpose: Form validation rules and the per-field error report

use std::collections::HashMap;

use crate::field::{FieldKey, FieldSpec, TEXT_FIELD_SPECS};
use crate::form::EstimateForm;

/// Banner shown when any field fails validation
pub const INVALID_SUBMIT_MESSAGE: &str = "Please fix the highlighted fields.";

/// Per-field validation errors from one submit attempt
///
/// A field with no entry is valid. The report is transient: the session
/// replaces it wholesale on every submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: HashMap<FieldKey, String>,
}

impl ValidationReport {
    /// Check if every field passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if a field has an error
    pub fn has_error(&self, key: FieldKey) -> bool {
        self.errors.contains_key(&key)
    }

    /// Get the error message for a field
    pub fn get_error(&self, key: FieldKey) -> Option<&str> {
        self.errors.get(&key).map(|s| s.as_str())
    }

    /// Get all recorded errors
    pub fn get_errors(&self) -> &HashMap<FieldKey, String> {
        &self.errors
    }

    fn record(&mut self, key: FieldKey, message: impl Into<String>) {
        self.errors.insert(key, message.into());
    }
}

/// Validate a form snapshot against the intake rules
///
/// Pure function: every field's rules run independently, with no
/// short-circuit across fields. Within one field the shape check only runs
/// once the value is present, so an empty optional field passes untouched.
pub fn validate_form(form: &EstimateForm) -> ValidationReport {
    let mut report = ValidationReport::default();

    for spec in TEXT_FIELD_SPECS {
        if let Some(value) = form.text_value(spec.key) {
            check_text_field(spec, value, &mut report);
        }
    }

    if form.contact_method.is_none() {
        report.record(FieldKey::ContactMethod, "Select a contact method.");
    }

    if form.service_type.is_none() {
        report.record(FieldKey::ServiceType, "Select a service type.");
    }

    if !form.property_confirmed {
        report.record(
            FieldKey::PropertyConfirm,
            "You must confirm permission to request work.",
        );
    }

    report
}

fn check_text_field(spec: &FieldSpec, value: &str, report: &mut ValidationReport) {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        if spec.required {
            report.record(spec.key, required_message(spec.key));
        }
        return;
    }

    if let Some(pattern) = spec.pattern {
        if !pattern.matches(trimmed) {
            report.record(spec.key, pattern_message(spec.key));
            return;
        }
    }

    if let Some(min) = spec.min_length {
        if !intake_validation::has_min_trimmed_length(value, min) {
            report.record(spec.key, min_length_message(min));
        }
    }
}

fn required_message(key: FieldKey) -> &'static str {
    match key {
        FieldKey::FullName => "Full name is required.",
        FieldKey::Email => "Email is required.",
        FieldKey::Phone => "Phone is required.",
        FieldKey::Notes => "Notes are required.",
        _ => "This field is required.",
    }
}

fn pattern_message(key: FieldKey) -> &'static str {
    match key {
        FieldKey::Email => "Enter a valid email address.",
        FieldKey::Phone => "Enter a valid US phone number.",
        FieldKey::Zip => "Enter a 5-digit ZIP code.",
        _ => "Enter a valid value.",
    }
}

fn min_length_message(min: usize) -> String {
    format!("Please enter at least {min} characters.")
}
