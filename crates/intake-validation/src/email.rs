//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Email validation regex: local@domain.tld shape, no whitespace or extra '@'
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validates basic email format
///
/// Checks for:
/// - Exactly one '@' with content on both sides
/// - At least one '.' in the domain part
/// - No whitespace anywhere
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
