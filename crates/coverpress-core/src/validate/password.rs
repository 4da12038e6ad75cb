//! Password rules and strength grading.

use serde::Serialize;

/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>_-+=[]\\/'~`";

/// Strength grade of an acceptable password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PasswordStrength {
    Moderate,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Grade by how many of {uppercase, lowercase, digit, special} appear.
    fn from_classes(classes: usize) -> Self {
        match classes {
            0..=2 => PasswordStrength::Moderate,
            3 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PasswordStrength::Moderate => "Moderate strength",
            PasswordStrength::Strong => "Strong password",
            PasswordStrength::VeryStrong => "Very strong password",
        }
    }

    /// Display color as `#rrggbbaa`.
    pub fn color(self) -> &'static str {
        match self {
            PasswordStrength::Moderate => "#3db8ffff",
            PasswordStrength::Strong => "#2bc249ff",
            PasswordStrength::VeryStrong => "#00ff00ff",
        }
    }
}

/// Outcome of checking a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordCheck {
    pub valid: bool,
    pub message: &'static str,
    /// Present only for valid passwords.
    pub strength: Option<PasswordStrength>,
}

impl PasswordCheck {
    fn rejected(message: &'static str) -> Self {
        Self {
            valid: false,
            message,
            strength: None,
        }
    }

    fn accepted(strength: PasswordStrength) -> Self {
        Self {
            valid: true,
            message: strength.message(),
            strength: Some(strength),
        }
    }

    pub fn color(&self) -> Option<&'static str> {
        self.strength.map(PasswordStrength::color)
    }
}

/// Check a password: at least eight characters containing both an ASCII
/// letter and an ASCII digit, graded by character-class variety.
pub fn validate_password(password: &str) -> PasswordCheck {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return PasswordCheck::rejected("Must be at least 8 characters");
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return PasswordCheck::rejected("Must contain letters and numbers");
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_special = password.chars().any(|c| SPECIAL_CHARACTERS.contains(c));

    let classes = [has_upper, has_lower, has_digit, has_special]
        .into_iter()
        .filter(|present| *present)
        .count();

    PasswordCheck::accepted(PasswordStrength::from_classes(classes))
}

/// Whether the repeated password matches exactly.
pub fn passwords_match(password: &str, repeat: &str) -> bool {
    password == repeat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short() {
        let check = validate_password("abc123");
        assert!(!check.valid);
        assert_eq!(check.message, "Must be at least 8 characters");
        assert_eq!(check.strength, None);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Seven characters, more than eight bytes.
        assert!(!validate_password("äöü1234").valid);
    }

    #[test]
    fn test_missing_digit_or_letter() {
        assert_eq!(
            validate_password("abcdefgh").message,
            "Must contain letters and numbers"
        );
        assert_eq!(
            validate_password("12345678").message,
            "Must contain letters and numbers"
        );
    }

    #[test]
    fn test_moderate() {
        let check = validate_password("abcdefg1");
        assert!(check.valid);
        assert_eq!(check.strength, Some(PasswordStrength::Moderate));
        assert_eq!(check.message, "Moderate strength");
        assert_eq!(check.color(), Some("#3db8ffff"));
    }

    #[test]
    fn test_strong() {
        let check = validate_password("Abcdefg1");
        assert_eq!(check.strength, Some(PasswordStrength::Strong));
        assert_eq!(check.message, "Strong password");

        let check = validate_password("abcdefg1!");
        assert_eq!(check.strength, Some(PasswordStrength::Strong));
    }

    #[test]
    fn test_very_strong() {
        let check = validate_password("Abcdefg1_");
        assert_eq!(check.strength, Some(PasswordStrength::VeryStrong));
        assert_eq!(check.message, "Very strong password");
        assert_eq!(check.color(), Some("#00ff00ff"));
    }

    #[test]
    fn test_every_special_character_counts() {
        for special in SPECIAL_CHARACTERS.chars() {
            let password = format!("Abcdefg1{special}");
            assert_eq!(
                validate_password(&password).strength,
                Some(PasswordStrength::VeryStrong),
                "{special:?} should count as special"
            );
        }
    }

    #[test]
    fn test_space_is_not_special() {
        assert_eq!(
            validate_password("Abcdefg1 ").strength,
            Some(PasswordStrength::Strong)
        );
    }

    #[test]
    fn test_passwords_match() {
        assert!(passwords_match("Secret123", "Secret123"));
        assert!(!passwords_match("Secret123", "secret123"));
    }
}
