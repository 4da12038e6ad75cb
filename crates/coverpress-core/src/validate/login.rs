//! Sign-in identifier resolution.

use thiserror::Error;

use super::{trim_form, validate_email};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please enter your email or stage name")]
    Empty,
}

/// What the user typed into the sign-in field.
///
/// Anything that is not a well-formed email is taken as a stage name,
/// which has to be looked up to an email before signing in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginIdentifier {
    Email(String),
    StageName(String),
}

impl LoginIdentifier {
    pub fn parse(input: &str) -> Result<Self, LoginError> {
        let trimmed = trim_form(input);
        if trimmed.is_empty() {
            return Err(LoginError::Empty);
        }

        if validate_email(trimmed) {
            Ok(LoginIdentifier::Email(trimmed.to_string()))
        } else {
            Ok(LoginIdentifier::StageName(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LoginIdentifier::Email(value) | LoginIdentifier::StageName(value) => value,
        }
    }

    pub fn needs_lookup(&self) -> bool {
        matches!(self, LoginIdentifier::StageName(_))
    }
}
