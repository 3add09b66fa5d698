//! Employee Form Validation
//!
//! Field-level rules for the employee registration form. Shared by the
//! terminal front end and the WASM browser bindings so both report exactly
//! the same messages.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use employee_form_validation::{validate, Field, FieldValues};
//!
//! let values = FieldValues::new()
//!     .with(Field::FirstName, "John")
//!     .with(Field::LastName, "Doe")
//!     .with(Field::Dob, "15/06/1990")
//!     .with(Field::Phone, "9876543210")
//!     .with(Field::Email, "a@b.com")
//!     .with(Field::Address, "123 Main St");
//!
//! let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
//! assert!(validate(&values, today).is_empty());
//! ```

pub mod error;
pub mod field;
pub mod rules;
pub mod validator;

pub use error::{FieldError, ValidationErrors};
pub use field::{Field, FieldValues, UnknownField};
pub use rules::{rules_for, FieldRules, Rule, RuleContext, RULES};
pub use validator::{validate, validate_field};
