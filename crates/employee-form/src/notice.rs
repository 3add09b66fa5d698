// File: src/notice.rs
// Purpose: Transient alerts shown after a submit attempt

use std::fmt;

/// Shown in place of the form once a submission has been accepted
pub const CONFIRMATION: &str = "Your form has been successfully submitted!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Saved,
    MandatoryFieldsMissing,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Saved => "Data is saved successfully!",
            Notice::MandatoryFieldsMissing => "Mandatory field(s) missing",
        }
    }

    pub fn is_success(self) -> bool {
        self == Notice::Saved
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
