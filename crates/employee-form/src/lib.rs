//! Employee Form
//!
//! Session layer for the employee registration form. A [`FormSession`] owns
//! the values being typed, the errors from the last submit attempt and the
//! editing/submitted flag, and gates submission on
//! [`employee_form_validation::validate`].

pub mod clock;
pub mod notice;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use notice::{Notice, CONFIRMATION};
pub use session::{FormSession, FormState, SessionError, SubmitOutcome};

// Re-export the field model so callers need only one dependency
pub use employee_form_validation::{
    validate, validate_field, Field, FieldError, FieldValues, UnknownField, ValidationErrors,
};
