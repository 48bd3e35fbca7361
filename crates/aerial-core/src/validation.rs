//! Field validation for the account and profile steps.
//!
//! Validators work on plain record data and never read from the UI. Every
//! failing rule contributes one message; rules are not short-circuited.

use crate::record::{Account, Profile};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("phone pattern"));

const MIN_NAME_CHARS: usize = 2;
const MIN_PASSWORD_CHARS: usize = 8;

/// Messages collected from every rule that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(message);
        errors
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// `Ok(())` when nothing failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages.join("; "))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Needs at least one ASCII lowercase letter, uppercase letter and digit.
pub fn password_is_strong(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Length in UTF-16 code units, so astral characters count twice.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn validate_account(account: &Account) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if utf16_len(&account.name) < MIN_NAME_CHARS {
        errors.push("Name must be at least 2 characters long");
    }
    if !is_valid_email(&account.email) {
        errors.push("Please enter a valid email address");
    }
    if utf16_len(&account.password) < MIN_PASSWORD_CHARS {
        errors.push("Password must be at least 8 characters long");
    }
    if !password_is_strong(&account.password) {
        errors.push("Password must contain uppercase, lowercase, and number");
    }
    if account.password != account.confirm_password {
        errors.push("Passwords do not match");
    }

    errors.into_result()
}

pub fn validate_profile(profile: &Profile) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if utf16_len(&profile.name) < MIN_NAME_CHARS {
        errors.push("Profile name must be at least 2 characters long");
    }
    if !is_valid_phone(&profile.phone_number) {
        errors.push("Please enter a valid phone number");
    }
    if utf16_len(&profile.role) < MIN_NAME_CHARS {
        errors.push("Role must be specified");
    }
    if profile.department.is_empty() {
        errors.push("Please select a department");
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(name: &str, email: &str, password: &str, confirm: &str) -> Account {
        Account {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    fn profile(name: &str, phone: &str, role: &str, department: &str) -> Profile {
        Profile {
            name: name.to_string(),
            photo: None,
            phone_number: phone.to_string(),
            role: role.to_string(),
            department: department.to_string(),
        }
    }

    #[test]
    fn email_pattern_requires_a_dotted_domain() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("jo@x.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn password_strength_needs_all_three_classes() {
        assert!(password_is_strong("Abcdefg1"));
        assert!(!password_is_strong("abcdefgh"));
        assert!(!password_is_strong("ABCDEFG1"));
        assert!(!password_is_strong("Abcdefgh"));
    }

    #[test]
    fn phone_pattern_is_permissive() {
        assert!(is_valid_phone("+44 (0) 20-7946-0958"));
        assert!(is_valid_phone("123456789"));
        assert!(!is_valid_phone("91+ 123456789"));
        assert!(!is_valid_phone("call me"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn valid_account_passes() {
        assert!(validate_account(&account("Jo", "jo@x.com", "Abcdef12", "Abcdef12")).is_ok());
    }

    #[test]
    fn each_account_rule_adds_one_message() {
        let cases = [
            (
                account("J", "jo@x.com", "Abcdef12", "Abcdef12"),
                "Name must be at least 2 characters long",
            ),
            (
                account("Jo", "jo@x", "Abcdef12", "Abcdef12"),
                "Please enter a valid email address",
            ),
            (
                account("Jo", "jo@x.com", "Abcde12", "Abcde12"),
                "Password must be at least 8 characters long",
            ),
            (
                account("Jo", "jo@x.com", "abcdef12", "abcdef12"),
                "Password must contain uppercase, lowercase, and number",
            ),
            (
                account("Jo", "jo@x.com", "Abcdef12", "Abcdef13"),
                "Passwords do not match",
            ),
        ];
        for (input, expected) in cases {
            let errors = validate_account(&input).unwrap_err();
            assert_eq!(errors.messages(), [expected.to_string()]);
        }
    }

    #[test]
    fn account_failures_accumulate() {
        let errors = validate_account(&account("", "nope", "short", "other")).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.messages()[0], "Name must be at least 2 characters long");
        assert_eq!(errors.messages()[4], "Passwords do not match");
    }

    #[test]
    fn each_profile_rule_adds_one_message() {
        let cases = [
            (
                profile("S", "+1 555 0100", "Pilot", "Operations"),
                "Profile name must be at least 2 characters long",
            ),
            (
                profile("Sam", "555-CALL", "Pilot", "Operations"),
                "Please enter a valid phone number",
            ),
            (
                profile("Sam", "+1 555 0100", "P", "Operations"),
                "Role must be specified",
            ),
            (
                profile("Sam", "+1 555 0100", "Pilot", ""),
                "Please select a department",
            ),
        ];
        for (input, expected) in cases {
            let errors = validate_profile(&input).unwrap_err();
            assert_eq!(errors.messages(), [expected.to_string()]);
        }
    }

    #[test]
    fn profile_rules() {
        assert!(validate_profile(&profile("Sam", "+1 555 0100", "Pilot", "Operations")).is_ok());

        let errors = validate_profile(&profile("S", "abc", "P", "")).unwrap_err();
        assert_eq!(
            errors.messages(),
            [
                "Profile name must be at least 2 characters long".to_string(),
                "Please enter a valid phone number".to_string(),
                "Role must be specified".to_string(),
                "Please select a department".to_string(),
            ]
        );
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        assert!(validate_account(&account("Zö", "z@x.io", "Abcdef12", "Abcdef12")).is_ok());
    }

    #[test]
    fn astral_characters_count_as_two() {
        assert!(validate_account(&account("😀", "z@x.io", "Abcdef12", "Abcdef12")).is_ok());
        assert!(validate_profile(&profile("Sam", "+1 555 0100", "🚁", "Sales")).is_ok());
        assert!(validate_account(&account("é", "z@x.io", "Abcdef12", "Abcdef12")).is_err());
    }
}
