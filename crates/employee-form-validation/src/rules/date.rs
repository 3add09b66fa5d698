//! Date of birth rules
//!
//! The accepted shape is `DD/MM/YYYY`. Age is the difference between the
//! current calendar year and the birth year; it does not look at whether the
//! birthday has already passed this year.

use super::RuleContext;
use crate::error::FieldError;
use chrono::{Datelike, NaiveDate};

pub const MIN_AGE_YEARS: i32 = 18;

const TOKEN_LENGTHS: [usize; 3] = [2, 2, 4];

/// Three `/`-separated tokens of 2, 2 and 4 characters
pub fn has_dob_shape(value: &str) -> bool {
    let tokens: Vec<&str> = value.split('/').collect();
    tokens.len() == TOKEN_LENGTHS.len()
        && tokens
            .iter()
            .zip(TOKEN_LENGTHS)
            .all(|(token, len)| token.chars().count() == len)
}

/// Parse a `DD/MM/YYYY` string into a real calendar date
pub fn parse_dob(value: &str) -> Result<NaiveDate, FieldError> {
    if !has_dob_shape(value) {
        return Err(FieldError::DobFormat);
    }

    let mut parts = value.split('/').map(parse_digits);
    let (Some(Some(day)), Some(Some(month)), Some(Some(year))) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(FieldError::DobNotPast);
    };

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or(FieldError::DobNotPast)
}

fn parse_digits(token: &str) -> Option<u32> {
    if token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}

/// Calendar-year difference between `today` and `birth`
pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - birth.year()
}

pub fn dob_required(value: &str, _ctx: &RuleContext) -> Option<FieldError> {
    value.is_empty().then_some(FieldError::DobRequired)
}

pub fn dob_format(value: &str, _ctx: &RuleContext) -> Option<FieldError> {
    (!has_dob_shape(value)).then_some(FieldError::DobFormat)
}

/// Rejects impossible dates and dates after today
pub fn dob_in_past(value: &str, ctx: &RuleContext) -> Option<FieldError> {
    match parse_dob(value) {
        Ok(birth) if birth <= ctx.today => None,
        Ok(_) => Some(FieldError::DobNotPast),
        Err(err) => Some(err),
    }
}

pub fn dob_adult(value: &str, ctx: &RuleContext) -> Option<FieldError> {
    let birth = parse_dob(value).ok()?;
    (age_in_years(birth, ctx.today) < MIN_AGE_YEARS).then_some(FieldError::Underage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ctx() -> RuleContext {
        RuleContext::new(date(2026, 10, 19))
    }

    #[rstest]
    #[case("15/06/1990", true)]
    #[case("31/02/2000", true)]
    #[case("ab/cd/efgh", true)]
    #[case("2023", false)]
    #[case("1/6/1990", false)]
    #[case("15-06-1990", false)]
    #[case("15/06/90", false)]
    #[case("15/06/1990/", false)]
    #[case("", false)]
    fn test_shape(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(has_dob_shape(value), expected);
    }

    #[test]
    fn test_parse_dob() {
        assert_eq!(parse_dob("15/06/1990"), Ok(date(1990, 6, 15)));
        assert_eq!(parse_dob("29/02/2000"), Ok(date(2000, 2, 29)));
        assert_eq!(parse_dob("29/02/2001"), Err(FieldError::DobNotPast));
        assert_eq!(parse_dob("31/02/2000"), Err(FieldError::DobNotPast));
        assert_eq!(parse_dob("00/01/2000"), Err(FieldError::DobNotPast));
        assert_eq!(parse_dob("01/13/2000"), Err(FieldError::DobNotPast));
        assert_eq!(parse_dob("ab/cd/efgh"), Err(FieldError::DobNotPast));
        assert_eq!(parse_dob("+1/01/2000"), Err(FieldError::DobNotPast));
        assert_eq!(parse_dob(" 1/06/1990"), Err(FieldError::DobNotPast));
        assert_eq!(parse_dob("15/ 6/1990"), Err(FieldError::DobNotPast));
        assert_eq!(parse_dob("2023"), Err(FieldError::DobFormat));
    }

    #[test]
    fn test_rule_order_within_dob() {
        assert_eq!(dob_required("", &ctx()), Some(FieldError::DobRequired));
        assert_eq!(dob_required("x", &ctx()), None);
        assert_eq!(dob_format("2023", &ctx()), Some(FieldError::DobFormat));
        assert_eq!(dob_format("15/06/1990", &ctx()), None);
    }

    #[test]
    fn test_future_dates_are_rejected() {
        assert_eq!(dob_in_past("20/10/2026", &ctx()), Some(FieldError::DobNotPast));
        assert_eq!(dob_in_past("01/01/2030", &ctx()), Some(FieldError::DobNotPast));
        // today is not in the future
        assert_eq!(dob_in_past("19/10/2026", &ctx()), None);
    }

    #[test]
    fn test_age_is_calendar_year_difference() {
        // 31 December 2008 is still "18" on 1 January 2026
        let today = date(2026, 1, 1);
        assert_eq!(age_in_years(date(2008, 12, 31), today), 18);
        assert_eq!(age_in_years(date(2009, 1, 1), today), 17);

        let ctx = RuleContext::new(today);
        assert_eq!(dob_adult("31/12/2008", &ctx), None);
        assert_eq!(dob_adult("01/01/2009", &ctx), Some(FieldError::Underage));
    }

    #[test]
    fn test_adult_rule_ignores_unparseable_input() {
        assert_eq!(dob_adult("2023", &ctx()), None);
        assert_eq!(dob_adult("31/02/2020", &ctx()), None);
    }
}
