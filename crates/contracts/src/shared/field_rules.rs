//! Client-side field checks run before a validated form is submitted.

use crate::shared::datetime::is_valid_datetime;
use crate::shared::selectors::DATETIME_INPUT_TYPE;
use thiserror::Error;

/// Input kinds the validator treats differently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    DateTimeLocal,
}

impl FieldKind {
    /// Classify by the `type` attribute of an `<input>`; other controls are `Text`.
    pub fn from_input_type(input_type: Option<&str>) -> Self {
        match input_type {
            Some(t) if t.eq_ignore_ascii_case(DATETIME_INPUT_TYPE) => FieldKind::DateTimeLocal,
            _ => FieldKind::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    pub required: bool,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid date and time")]
    InvalidDateTime,
}

/// Check one field value. Rules apply in order and the first failure wins,
/// so a field never carries more than one error.
pub fn evaluate_field(rules: FieldRules, value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();

    if rules.required && trimmed.is_empty() {
        return Err(FieldError::Required);
    }

    if rules.kind == FieldKind::DateTimeLocal && !value.is_empty() && !is_valid_datetime(value) {
        return Err(FieldError::InvalidDateTime);
    }

    Ok(())
}
