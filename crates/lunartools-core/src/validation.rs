//! Shared checks used by the record `validate` methods.

use crate::error::{Result, ValidationError};

/// Whether `value` is empty once surrounding whitespace is removed.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fail with [`ValidationError::Required`] when `value` is blank.
pub(crate) fn require(value: &str, what: &'static str) -> Result<()> {
    if is_blank(value) {
        return Err(ValidationError::Required(what));
    }
    Ok(())
}

/// Fail with [`ValidationError::Negative`] when `value` is below zero or not finite.
///
/// JSON has no representation for NaN or infinity, so those are rejected too.
pub(crate) fn require_non_negative(value: f64, what: &'static str) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::Negative(what));
    }
    Ok(())
}
