// File: src/validator.rs
// Purpose: Run the rule table over a full set of form values

use crate::error::{FieldError, ValidationErrors};
use crate::field::{Field, FieldValues};
use crate::rules::{self, RuleContext, RULES};
use chrono::NaiveDate;

/// Validate every field of `values` as of `today`.
///
/// Pure: the same values and date always produce the same errors. An empty
/// result means the form may be submitted.
pub fn validate(values: &FieldValues, today: NaiveDate) -> ValidationErrors {
    let ctx = RuleContext::new(today);
    let mut errors = ValidationErrors::new();

    for entry in RULES {
        if let Some(error) = entry.check(values.get(entry.field), &ctx) {
            errors.insert(entry.field, error);
        }
    }

    tracing::debug!(failed = errors.len(), %today, "validated employee form");
    errors
}

/// Validate a single field in isolation, e.g. while the user is typing
pub fn validate_field(field: Field, value: &str, today: NaiveDate) -> Option<FieldError> {
    let ctx = RuleContext::new(today);
    rules::rules_for(field)
        .iter()
        .find_map(|rule| rule(value, &ctx))
}
