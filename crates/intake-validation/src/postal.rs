//! Postal code validation

use once_cell::sync::Lazy;
use regex::Regex;

static ZIP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}$").unwrap());

/// Validate a 5-digit US ZIP code
pub fn is_valid_zip(zip: &str) -> bool {
    ZIP_REGEX.is_match(zip)
}
