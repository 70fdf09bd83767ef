// Intake - service-request form engine
// Field validation, payload assembly, and the submit/reset lifecycle behind injectable submit sinks

pub mod config;
pub mod field;
pub mod files;
pub mod form;
pub mod payload;
pub mod session;
pub mod sink;
pub mod status;
pub mod validation;

// Re-export the working surface
pub use config::{IntakeConfig, SubmitConfig};
pub use field::{FieldKey, FieldSpec, ValuePattern, TEXT_FIELD_SPECS};
pub use files::{file_summary, FileMeta, EMPTY_FILE_SUMMARY};
pub use form::{ContactMethod, EstimateForm, ServiceType};
pub use payload::{Address, FileDescriptor, PayloadBuilder, RequestPayload, DEFAULT_ID_PREFIX};
pub use session::{FormSession, SubmitOutcome, SUCCESS_MESSAGE};
pub use sink::{LogSink, RecordingSink, SubmitSink};
pub use status::{StatusKind, StatusLine};
pub use validation::{validate_form, ValidationReport, INVALID_SUBMIT_MESSAGE};

// Re-export the field-level validators for rule-level use
pub use intake_validation as validators;
