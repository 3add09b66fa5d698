//! Phone and email rules

use super::RuleContext;
use crate::error::FieldError;
use once_cell::sync::Lazy;
use regex::Regex;

// `\d` would also accept non-ASCII digits
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Exactly ten decimal digits, no separators
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn phone(value: &str, _ctx: &RuleContext) -> Option<FieldError> {
    (!is_valid_phone(value)).then_some(FieldError::Phone)
}

pub fn email(value: &str, _ctx: &RuleContext) -> Option<FieldError> {
    (!is_valid_email(value)).then_some(FieldError::Email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1234567890", true)]
    #[case("0000000000", true)]
    #[case("12345", false)]
    #[case("12345678901", false)]
    #[case("", false)]
    #[case("123-456-7890", false)]
    #[case(" 1234567890", false)]
    #[case("١٢٣٤٥٦٧٨٩٠", false)]
    fn test_phone(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_phone(value), expected);
    }

    #[rstest]
    #[case("a@b.com", true)]
    #[case("a@b.co", true)]
    #[case("first.last+tag@sub.example.org", true)]
    #[case("user%x@host-name.io", true)]
    #[case("not-an-email", false)]
    #[case("", false)]
    #[case("a@b.c", false)]
    #[case("a@b", false)]
    #[case("@b.com", false)]
    #[case("a b@c.com", false)]
    #[case("a@b.c0m", false)]
    fn test_email(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(value), expected);
    }
}
