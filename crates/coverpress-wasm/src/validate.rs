//! Signup and sign-in validation WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { validate_password, validate_signup, parse_login_identifier } from '@coverpress/wasm';
//!
//! const check = validate_password(passwordInput.value);
//! passwordMsg.textContent = check.message;
//! passwordMsg.style.color = check.valid ? check.color : '#ff0000ff';
//!
//! const error = validate_signup({ email, password, repeatPassword, stageName, role, bio });
//! if (error) alert(error);
//!
//! const login = parse_login_identifier(loginEmailInput.value);
//! if (login.kind === 'stageName') { /* look up the email first */ }
//! ```

use coverpress_core::validate::{self, LoginIdentifier, PasswordCheck, SignupForm};
use coverpress_core::UploadDescriptor;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Password check as handed to JavaScript.
#[derive(Debug, Serialize)]
struct PasswordCheckJs {
    valid: bool,
    message: &'static str,
    color: Option<&'static str>,
}

impl From<PasswordCheck> for PasswordCheckJs {
    fn from(check: PasswordCheck) -> Self {
        Self {
            valid: check.valid,
            message: check.message,
            color: check.color(),
        }
    }
}

/// Sign-in identifier as handed to JavaScript.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
enum LoginIdentifierJs {
    Email(String),
    StageName(String),
}

impl From<LoginIdentifier> for LoginIdentifierJs {
    fn from(id: LoginIdentifier) -> Self {
        match id {
            LoginIdentifier::Email(email) => LoginIdentifierJs::Email(email),
            LoginIdentifier::StageName(name) => LoginIdentifierJs::StageName(name),
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn validate_email(email: &str) -> bool {
    validate::validate_email(email)
}

/// Returns `{ valid, message, color }`; `color` is unset for invalid passwords.
#[wasm_bindgen]
pub fn validate_password(password: &str) -> Result<JsValue, JsValue> {
    to_js(&PasswordCheckJs::from(validate::validate_password(password)))
}

#[wasm_bindgen]
pub fn passwords_match(password: &str, repeat: &str) -> bool {
    validate::passwords_match(password, repeat)
}

#[wasm_bindgen]
pub fn validate_stage_name(name: &str) -> bool {
    validate::validate_stage_name(name)
}

#[wasm_bindgen]
pub fn validate_bio(bio: &str) -> bool {
    validate::validate_bio(bio)
}

/// Word count shown next to the bio field ("n/4 words").
#[wasm_bindgen]
pub fn bio_word_count(bio: &str) -> usize {
    validate::word_count(bio)
}

/// Delay in milliseconds before a remote uniqueness lookup.
#[wasm_bindgen]
pub fn uniqueness_debounce_ms() -> u32 {
    validate::UNIQUENESS_DEBOUNCE_MS
}

/// Validate a whole signup form.
///
/// Returns `undefined` when the form is valid, otherwise the message for
/// the first failing field.
#[wasm_bindgen]
pub fn validate_signup(form: JsValue) -> Result<Option<String>, JsValue> {
    let form: SignupForm = serde_wasm_bindgen::from_value(form)
        .map_err(|e| JsValue::from_str(&format!("Invalid signup form: {}", e)))?;
    Ok(form.validate().err().map(|e| e.to_string()))
}

/// Returns `{ kind: "email" | "stageName", value }`.
#[wasm_bindgen]
pub fn parse_login_identifier(input: &str) -> Result<JsValue, JsValue> {
    let id = LoginIdentifier::parse(input).map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&LoginIdentifierJs::from(id))
}

/// Returns `{ fileName, contentType, cacheControl, upsert }` for a user's
/// compressed picture. `timestamp_ms` defaults to `Date.now()`.
#[wasm_bindgen]
pub fn upload_descriptor(user_id: &str, timestamp_ms: Option<f64>) -> Result<JsValue, JsValue> {
    let timestamp_ms = timestamp_ms.unwrap_or_else(js_sys::Date::now);
    to_js(&UploadDescriptor::for_user(user_id, timestamp_ms as u64))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_validate_signup_reports_first_error() {
        let form = js_sys::Object::new();
        js_sys::Reflect::set(&form, &"email".into(), &"nope".into()).unwrap();
        assert_eq!(
            validate_signup(form.into()).unwrap(),
            Some("Please enter a valid email address".to_string())
        );
    }

    #[wasm_bindgen_test]
    fn test_parse_login_identifier_empty_is_error() {
        assert!(parse_login_identifier("  ").is_err());
    }

    #[wasm_bindgen_test]
    fn test_upload_descriptor_serializes() {
        assert!(upload_descriptor("user", Some(1.0)).unwrap().is_object());
    }
}
