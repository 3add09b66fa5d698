// File: src/field.rs
// Purpose: The eight form fields and the raw values typed into them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One named input of the registration form.
///
/// Declaration order is the on-screen order and also the order in which
/// errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    MiddleName,
    LastName,
    Dob,
    Phone,
    Email,
    Hobbies,
    Address,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::FirstName,
        Field::MiddleName,
        Field::LastName,
        Field::Dob,
        Field::Phone,
        Field::Email,
        Field::Hobbies,
        Field::Address,
    ];

    /// Wire name, as used in JSON records and form `name` attributes
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::MiddleName => "middleName",
            Field::LastName => "lastName",
            Field::Dob => "dob",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Hobbies => "hobbies",
            Field::Address => "address",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::MiddleName | Field::Hobbies)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name one of the form fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Raw, untrimmed text for every field. An empty string means "not entered".
///
/// Deserialization is strict: all eight keys must be present and nothing
/// else may be.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldValues {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub dob: String,
    pub phone: String,
    pub email: String,
    pub hobbies: String,
    pub address: String,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::MiddleName => &self.middle_name,
            Field::LastName => &self.last_name,
            Field::Dob => &self.dob,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Hobbies => &self.hobbies,
            Field::Address => &self.address,
        }
    }

    /// Replace the value of one field. Last write wins.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::MiddleName => &mut self.middle_name,
            Field::LastName => &mut self.last_name,
            Field::Dob => &mut self.dob,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Hobbies => &mut self.hobbies,
            Field::Address => &mut self.address,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`FieldValues::set`]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Reset every field to the empty initial state
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&field| self.get(field).is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}
