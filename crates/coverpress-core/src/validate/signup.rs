//! Whole-form signup validation.

use serde::Deserialize;
use thiserror::Error;

use super::{
    passwords_match, trim_form, validate_bio, validate_email, validate_password,
    validate_stage_name,
};

/// Placeholder option of the role selector.
pub const ROLE_PLACEHOLDER: &str = "Who are you?";

/// First rule a signup form breaks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Carries the password rule's own message.
    #[error("{0}")]
    WeakPassword(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Stage name must be maximum 2 words")]
    InvalidStageName,

    #[error("Bio must be maximum 4 words")]
    InvalidBio,

    #[error("Please select your role")]
    RoleNotSelected,
}

/// Values submitted by the signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub repeat_password: String,
    pub stage_name: String,
    pub role: String,
    pub bio: String,
}

impl SignupForm {
    /// Stage name as it will be stored.
    pub fn stage_name(&self) -> &str {
        trim_form(&self.stage_name)
    }

    /// Bio as it will be stored.
    pub fn bio(&self) -> &str {
        trim_form(&self.bio)
    }

    /// Check every field in form order and report the first failure.
    pub fn validate(&self) -> Result<(), SignupError> {
        if !validate_email(&self.email) {
            return Err(SignupError::InvalidEmail);
        }

        let password = validate_password(&self.password);
        if !password.valid {
            return Err(SignupError::WeakPassword(password.message));
        }

        if !passwords_match(&self.password, &self.repeat_password) {
            return Err(SignupError::PasswordMismatch);
        }

        if !validate_stage_name(self.stage_name()) {
            return Err(SignupError::InvalidStageName);
        }

        let bio = self.bio();
        if !bio.is_empty() && !validate_bio(bio) {
            return Err(SignupError::InvalidBio);
        }

        let role = trim_form(&self.role);
        if role.is_empty() || role == ROLE_PLACEHOLDER {
            return Err(SignupError::RoleNotSelected);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            email: "nova@example.com".to_string(),
            password: "Sunrise2024".to_string(),
            repeat_password: "Sunrise2024".to_string(),
            stage_name: "  DJ Nova ".to_string(),
            role: "Artist".to_string(),
            bio: "Deep house selector".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_trimmed_accessors() {
        let form = valid_form();
        assert_eq!(form.stage_name(), "DJ Nova");
        assert_eq!(form.bio(), "Deep house selector");
    }

    #[test]
    fn test_invalid_email_reported_first() {
        let mut form = valid_form();
        form.email = "nova".to_string();
        form.password = "short".to_string();
        assert_eq!(form.validate(), Err(SignupError::InvalidEmail));
    }

    #[test]
    fn test_weak_password_message() {
        let mut form = valid_form();
        form.password = "password".to_string();
        form.repeat_password = "password".to_string();

        let err = form.validate().unwrap_err();
        assert_eq!(err, SignupError::WeakPassword("Must contain letters and numbers"));
        assert_eq!(err.to_string(), "Must contain letters and numbers");
    }

    #[test]
    fn test_password_mismatch() {
        let mut form = valid_form();
        form.repeat_password = "Sunrise2025".to_string();
        assert_eq!(form.validate(), Err(SignupError::PasswordMismatch));
    }

    #[test]
    fn test_stage_name_rules() {
        let mut form = valid_form();
        form.stage_name = "The Nova Collective".to_string();
        assert_eq!(form.validate(), Err(SignupError::InvalidStageName));

        form.stage_name = "   ".to_string();
        assert_eq!(form.validate(), Err(SignupError::InvalidStageName));
    }

    #[test]
    fn test_bio_optional_but_bounded() {
        let mut form = valid_form();
        form.bio = "   ".to_string();
        assert_eq!(form.validate(), Ok(()));

        form.bio = "one two three four five".to_string();
        assert_eq!(form.validate(), Err(SignupError::InvalidBio));
    }

    #[test]
    fn test_role_must_be_selected() {
        let mut form = valid_form();
        form.role = ROLE_PLACEHOLDER.to_string();
        assert_eq!(form.validate(), Err(SignupError::RoleNotSelected));

        form.role = String::new();
        assert_eq!(form.validate(), Err(SignupError::RoleNotSelected));
    }
}
