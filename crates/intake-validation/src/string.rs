//! String presence and length validation

/// Check that a value has content after trimming whitespace
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check that a value's trimmed length reaches `min` characters
pub fn has_min_trimmed_length(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}
