//! Rule table for the registration form.
//!
//! Each validated field owns an ordered list of rules. A rule is a plain
//! function from the raw field text to an optional [`FieldError`]; the first
//! rule that fails decides the field's error. Fields never look at each
//! other, so every rule can be tested on its own.

use crate::error::FieldError;
use crate::field::Field;
use chrono::NaiveDate;

pub mod contact;
pub mod date;
pub mod string;

/// Inputs a rule may depend on besides the field text itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    /// The calendar date the form is being submitted on
    pub today: NaiveDate,
}

impl RuleContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

pub type Rule = fn(&str, &RuleContext) -> Option<FieldError>;

/// The rules that apply to one field, in evaluation order
#[derive(Clone, Copy)]
pub struct FieldRules {
    pub field: Field,
    pub rules: &'static [Rule],
}

impl FieldRules {
    /// Run the rules in order and return the first failure
    pub fn check(&self, value: &str, ctx: &RuleContext) -> Option<FieldError> {
        self.rules.iter().find_map(|rule| rule(value, ctx))
    }
}

/// `hobbies` has no entry: it is accepted as typed.
pub static RULES: &[FieldRules] = &[
    FieldRules {
        field: Field::FirstName,
        rules: &[string::first_name],
    },
    FieldRules {
        field: Field::MiddleName,
        rules: &[string::middle_name],
    },
    FieldRules {
        field: Field::LastName,
        rules: &[string::last_name],
    },
    FieldRules {
        field: Field::Dob,
        rules: &[
            date::dob_required,
            date::dob_format,
            date::dob_in_past,
            date::dob_adult,
        ],
    },
    FieldRules {
        field: Field::Phone,
        rules: &[contact::phone],
    },
    FieldRules {
        field: Field::Email,
        rules: &[contact::email],
    },
    FieldRules {
        field: Field::Address,
        rules: &[string::address_required, string::address_max_length],
    },
];

/// Rules for `field`, empty for fields without validation
pub fn rules_for(field: Field) -> &'static [Rule] {
    RULES
        .iter()
        .find(|entry| entry.field == field)
        .map(|entry| entry.rules)
        .unwrap_or(&[])
}
