//! Name and address rules

use super::RuleContext;
use crate::error::FieldError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum address length, in characters
pub const ADDRESS_MAX_LEN: usize = 100;

static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());

/// One or more ASCII letters and nothing else
pub fn is_alphabetic(value: &str) -> bool {
    ALPHA_REGEX.is_match(value)
}

pub fn first_name(value: &str, _ctx: &RuleContext) -> Option<FieldError> {
    (!is_alphabetic(value)).then_some(FieldError::FirstName)
}

pub fn last_name(value: &str, _ctx: &RuleContext) -> Option<FieldError> {
    (!is_alphabetic(value)).then_some(FieldError::LastName)
}

/// Optional, but letters only once something has been typed
pub fn middle_name(value: &str, _ctx: &RuleContext) -> Option<FieldError> {
    (!value.is_empty() && !is_alphabetic(value)).then_some(FieldError::MiddleName)
}

pub fn address_required(value: &str, _ctx: &RuleContext) -> Option<FieldError> {
    value.trim().is_empty().then_some(FieldError::AddressRequired)
}

/// Length is measured on the untrimmed text
pub fn address_max_length(value: &str, _ctx: &RuleContext) -> Option<FieldError> {
    (value.chars().count() > ADDRESS_MAX_LEN).then_some(FieldError::AddressTooLong)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn ctx() -> RuleContext {
        RuleContext::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
    }

    #[rstest]
    #[case("John", true)]
    #[case("x", true)]
    #[case("", false)]
    #[case("Mary Ann", false)]
    #[case("O'Brien", false)]
    #[case("John2", false)]
    #[case("José", false)]
    #[case("John\n", false)]
    fn test_alphabetic(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_alphabetic(value), expected);
    }

    #[test]
    fn test_required_names() {
        assert_eq!(first_name("", &ctx()), Some(FieldError::FirstName));
        assert_eq!(first_name("John", &ctx()), None);
        assert_eq!(last_name("Doe-Smith", &ctx()), Some(FieldError::LastName));
        assert_eq!(last_name("Doe", &ctx()), None);
    }

    #[test]
    fn test_middle_name_is_optional() {
        assert_eq!(middle_name("", &ctx()), None);
        assert_eq!(middle_name("Lee", &ctx()), None);
        assert_eq!(middle_name("A1", &ctx()), Some(FieldError::MiddleName));
        assert_eq!(middle_name(" ", &ctx()), Some(FieldError::MiddleName));
    }

    #[test]
    fn test_address_rules() {
        assert_eq!(address_required("", &ctx()), Some(FieldError::AddressRequired));
        assert_eq!(address_required(" \t\n ", &ctx()), Some(FieldError::AddressRequired));
        assert_eq!(address_required(" 1 Main St ", &ctx()), None);

        assert_eq!(address_max_length(&"a".repeat(100), &ctx()), None);
        assert_eq!(address_max_length(&"a".repeat(101), &ctx()), Some(FieldError::AddressTooLong));
        // characters, not bytes
        assert_eq!(address_max_length(&"é".repeat(100), &ctx()), None);
    }
}
