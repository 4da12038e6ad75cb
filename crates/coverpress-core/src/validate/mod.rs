//! Signup and sign-in input validation.
//!
//! Pure checks run as the user types and again on submit. Uniqueness of
//! email and stage name is decided remotely; the only part of that flow
//! owned here is the debounce delay the page waits before asking.

mod login;
mod password;
mod profile;
mod signup;

pub use login::{LoginError, LoginIdentifier};
pub use password::{
    passwords_match, validate_password, PasswordCheck, PasswordStrength, MIN_PASSWORD_LENGTH,
};
pub use profile::{
    is_form_whitespace, trim_form, validate_bio, validate_email, validate_stage_name,
    word_count, MAX_BIO_WORDS, MAX_STAGE_NAME_WORDS,
};
pub use signup::{SignupError, SignupForm, ROLE_PLACEHOLDER};

/// Delay after the last keystroke before a remote uniqueness lookup.
pub const UNIQUENESS_DEBOUNCE_MS: u32 = 500;
