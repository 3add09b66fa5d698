// File: src/error.rs
// Purpose: Per-field validation failures and the map returned by `validate`

use crate::field::Field;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use thiserror::Error;

/// Every way a single field can fail. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    #[error("First name is required and should contain only alphabets")]
    FirstName,
    #[error("Last name is required and should contain only alphabets")]
    LastName,
    #[error("Middle name should contain only alphabets")]
    MiddleName,
    #[error("Date of Birth is required")]
    DobRequired,
    #[error("Date must be in DD/MM/YYYY format")]
    DobFormat,
    #[error("Enter a valid past date")]
    DobNotPast,
    #[error("Employee must be at least 18 years old")]
    Underage,
    #[error("Phone number must be exactly 10 digits")]
    Phone,
    #[error("Please enter a valid email address")]
    Email,
    #[error("Address is required")]
    AddressRequired,
    #[error("Address cannot exceed 100 characters")]
    AddressTooLong,
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Failing fields mapped to their error. A field that is absent is valid.
///
/// Iteration and serialization follow [`Field`] declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// True when every rule passed
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(&field, &error)| (field, error))
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field, error)?;
        }
        map.end()
    }
}
