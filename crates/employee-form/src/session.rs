// File: src/session.rs
// Purpose: One open registration form: values, errors and the submitted flag

use crate::clock::{Clock, SystemClock};
use crate::notice::Notice;
use employee_form_validation::{validate, Field, FieldError, FieldValues, ValidationErrors};
use thiserror::Error;

/// Which screen the form is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Editing,
    Submitted,
}

/// Action attempted from a state that does not allow it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the form has been submitted; go back to the form before editing")]
    NotEditing,
    #[error("the form has already been submitted")]
    AlreadySubmitted,
    #[error("the form has not been submitted yet")]
    NotSubmitted,
}

/// Result of a submit attempt from the editing screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All rules passed. Holds the values as they were before the reset.
    Saved(FieldValues),
    /// At least one field failed. The values were left as typed.
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            SubmitOutcome::Saved(_) => Notice::Saved,
            SubmitOutcome::Rejected(_) => Notice::MandatoryFieldsMissing,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved(_))
    }
}

/// Session state for a single form instance.
///
/// Transitions:
/// - `Editing` + valid submit -> `Submitted`, values cleared
/// - `Editing` + invalid submit -> `Editing`, errors populated
/// - `Submitted` + back -> `Editing`
#[derive(Debug, Clone)]
pub struct FormSession<C: Clock = SystemClock> {
    values: FieldValues,
    errors: ValidationErrors,
    state: FormState,
    clock: C,
}

impl FormSession<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for FormSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FormSession<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            values: FieldValues::new(),
            errors: ValidationErrors::new(),
            state: FormState::Editing,
            clock,
        }
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Errors from the most recent submit attempt
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == FormState::Submitted
    }

    /// Record what the user typed into one field
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), SessionError> {
        if self.state != FormState::Editing {
            return Err(SessionError::NotEditing);
        }
        self.values.set(field, value);
        Ok(())
    }

    /// Validate the current values and, if they pass, save and reset the form
    pub fn submit(&mut self) -> Result<SubmitOutcome, SessionError> {
        if self.state == FormState::Submitted {
            return Err(SessionError::AlreadySubmitted);
        }

        let errors = validate(&self.values, self.clock.today());
        if !errors.is_empty() {
            tracing::debug!(failed = errors.len(), "submission rejected");
            self.errors = errors.clone();
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let saved = std::mem::take(&mut self.values);
        log_submission(&saved);

        self.errors = ValidationErrors::new();
        self.state = FormState::Submitted;
        Ok(SubmitOutcome::Saved(saved))
    }

    /// Leave the confirmation screen and show the (empty) form again
    pub fn back(&mut self) -> Result<(), SessionError> {
        if self.state != FormState::Submitted {
            return Err(SessionError::NotSubmitted);
        }
        self.state = FormState::Editing;
        tracing::debug!("returned to form");
        Ok(())
    }
}

/// Saving is simulated: the values go to the diagnostic log as pretty JSON
fn log_submission(values: &FieldValues) {
    match serde_json::to_string_pretty(values) {
        Ok(json) => tracing::info!(
            target: "employee_form::submission",
            "Employee Data Submitted: {}",
            json
        ),
        Err(e) => tracing::warn!("Failed to serialize submitted values: {}", e),
    }
}
