//! Employee Form WASM
//!
//! WebAssembly bindings for the employee registration form.
//! The browser gets the same rules and messages as the terminal front end.

use employee_form::{
    Clock, Field, FieldValues, FormSession, Notice, SessionError, SubmitOutcome, SystemClock,
    ValidationErrors,
};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Plain JS objects rather than `Map`s
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(JsValue::from)
}

/// Validate a full form record
///
/// # Returns
/// Object mapping each failing field to its message (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateForm({
///     firstName: 'John', middleName: '', lastName: 'Doe',
///     dob: '15/06/1990', phone: '9876543210', email: 'a@b.com',
///     hobbies: '', address: '123 Main St',
/// });
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue) -> Result<JsValue, JsValue> {
    let values: FieldValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))?;

    to_js(&employee_form::validate(&values, SystemClock.today()))
}

/// Validate one field, e.g. on blur. Returns the message, or `undefined` if valid.
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, value: &str) -> Result<Option<String>, JsValue> {
    field_message(field_name, value, &SystemClock).map_err(js_error)
}

fn field_message(
    field_name: &str,
    value: &str,
    clock: &impl Clock,
) -> Result<Option<String>, employee_form::UnknownField> {
    let field: Field = field_name.parse()?;
    Ok(employee_form::validate_field(field, value, clock.today()).map(|e| e.to_string()))
}

/// The registration form session, held by the page for as long as it is open
#[wasm_bindgen]
pub struct EmployeeForm {
    session: FormSession,
}

#[wasm_bindgen]
impl EmployeeForm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> EmployeeForm {
        EmployeeForm {
            session: FormSession::new(),
        }
    }

    /// Input handler: store what was typed into `name`
    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), JsValue> {
        let field: Field = name.parse().map_err(js_error)?;
        self.session.set_field(field, value).map_err(js_error)
    }

    /// Submit handler. Returns `true` when the data was saved and the form reset.
    pub fn submit(&mut self) -> Result<bool, JsValue> {
        let outcome = self.submit_outcome().map_err(js_error)?;
        report(&outcome)?;
        Ok(outcome.is_saved())
    }

    /// "Back to Form" button
    pub fn back(&mut self) -> Result<(), JsValue> {
        self.session.back().map_err(js_error)
    }

    /// Errors from the last submit attempt
    pub fn errors(&self) -> Result<JsValue, JsValue> {
        to_js::<ValidationErrors>(self.session.errors())
    }

    /// Message for one field from the last submit attempt
    #[wasm_bindgen(js_name = errorFor)]
    pub fn error_for(&self, name: &str) -> Result<Option<String>, JsValue> {
        let field: Field = name.parse().map_err(js_error)?;
        Ok(self.session.error_for(field).map(|e| e.to_string()))
    }

    pub fn values(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.values())
    }

    #[wasm_bindgen(js_name = isSubmitted)]
    pub fn is_submitted(&self) -> bool {
        self.session.is_submitted()
    }
}

impl EmployeeForm {
    /// Submit without touching the console
    fn submit_outcome(&mut self) -> Result<SubmitOutcome, SessionError> {
        self.session.submit()
    }
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Alert for the outcome, plus the saved record as pretty JSON on success
fn report(outcome: &SubmitOutcome) -> Result<(), JsValue> {
    announce(outcome.notice());

    if let SubmitOutcome::Saved(values) = outcome {
        let json = serde_json::to_string_pretty(values).map_err(js_error)?;
        web_sys::console::log_2(&"Employee Data Submitted:".into(), &json.into());
    }
    Ok(())
}

fn announce(notice: Notice) {
    let message = JsValue::from_str(notice.message());
    if notice.is_success() {
        web_sys::console::info_1(&message);
    } else {
        web_sys::console::warn_1(&message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use employee_form::FixedClock;
    use wasm_bindgen_test::*;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    #[wasm_bindgen_test]
    fn test_field_message() {
        assert_eq!(field_message("phone", "1234567890", &clock()), Ok(None));
        assert_eq!(
            field_message("dob", "2023", &clock()),
            Ok(Some("Date must be in DD/MM/YYYY format".to_string()))
        );
        assert_eq!(field_message("hobbies", "", &clock()), Ok(None));
    }

    #[wasm_bindgen_test]
    fn test_unknown_field_name() {
        assert!(field_message("age", "30", &clock()).is_err());
    }

    fn fill_valid(form: &mut EmployeeForm) {
        for (name, value) in [
            ("firstName", "John"),
            ("lastName", "Doe"),
            ("dob", "15/06/1990"),
            ("phone", "9876543210"),
            ("email", "a@b.com"),
            ("address", "123 Main St"),
        ] {
            assert!(form.set_field(name, value).is_ok());
        }
    }

    #[wasm_bindgen_test]
    fn test_session_round_trip() {
        let mut form = EmployeeForm::new();
        assert!(!form.is_submitted());
        assert!(form.set_field("firstName", "John").is_ok());
        assert_eq!(form.session.values().first_name, "John");
    }

    #[wasm_bindgen_test]
    fn test_rejected_submit_populates_errors() {
        let mut form = EmployeeForm::new();
        assert!(form.set_field("firstName", "John").is_ok());

        let outcome = form.submit_outcome().unwrap();
        assert_eq!(outcome.notice(), Notice::MandatoryFieldsMissing);
        assert!(!form.is_submitted());
        assert_eq!(form.session.errors().len(), 5);
        assert_eq!(form.error_for("firstName").ok(), Some(None));
        assert_eq!(
            form.error_for("phone").ok(),
            Some(Some("Phone number must be exactly 10 digits".to_string()))
        );
        assert_eq!(form.session.values().first_name, "John");
    }

    #[wasm_bindgen_test]
    fn test_valid_submit_then_back() {
        let mut form = EmployeeForm::new();
        fill_valid(&mut form);

        let outcome = form.submit_outcome().unwrap();
        assert!(outcome.is_saved());
        assert!(form.is_submitted());
        assert!(form.session.values().is_empty());
        assert!(form.session.errors().is_empty());
        assert_eq!(form.submit_outcome(), Err(SessionError::AlreadySubmitted));

        assert!(form.back().is_ok());
        assert!(!form.is_submitted());
        assert!(form.session.values().is_empty());
    }
}
