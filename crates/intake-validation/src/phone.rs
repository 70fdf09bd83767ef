//! US phone number validation

use once_cell::sync::Lazy;
use regex::Regex;

// US phone shape: optional +1 country code, optional parentheses around the
// area code, optional space/dot/dash separators between groups
static US_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+1\s?)?(\(\d{3}\)|\d{3})[\s.-]?\d{3}[\s.-]?\d{4}$").unwrap()
});

/// Validate a US phone number shape
pub fn is_valid_us_phone(phone: &str) -> bool {
    US_PHONE_REGEX.is_match(phone)
}
