//! Intake Validation
//!
//! Pure field-level validators for service-request intake forms.
//! Each validator is a free function over `&str` so callers can compose
//! them into whatever rule table or error reporting they need.

pub mod email;
pub mod phone;
pub mod postal;
pub mod string;

// Re-export all validators
pub use email::*;
pub use phone::*;
pub use postal::*;
pub use string::*;
