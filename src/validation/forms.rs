use crate::core::error::ValidationError;
use regex::Regex;
use std::sync::OnceLock;

pub const MIN_PASSWORD_LEN: usize = 6;

/// RFC-light email shape check: something@something.something with no
/// whitespace or extra '@' in any segment. Pure, no side effects.
pub fn email_valid(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
    });
    regex.is_match(&email.to_lowercase())
}

/// Raw registration input, exactly as typed
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

#[derive(Debug, Clone)]
pub struct ValidatedRegistration {
    /// Trimmed display name
    pub name: String,
    /// Trimmed and lowercased
    pub email: String,
    pub password: String,
}

/// Raw login input, exactly as typed
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

#[derive(Debug, Clone)]
pub struct ValidatedLogin {
    /// Trimmed and lowercased
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl RegisterForm {
    /// Checks run in order; the first failure wins and nothing else is
    /// evaluated.
    pub fn validate(self) -> Result<ValidatedRegistration, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let email = validate_email(&self.email)?;
        validate_password(&self.password)?;

        if self.password != self.confirm {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(ValidatedRegistration {
            name,
            email,
            password: self.password,
        })
    }
}

impl LoginForm {
    pub fn validate(self) -> Result<ValidatedLogin, ValidationError> {
        let email = validate_email(&self.email)?;
        validate_password(&self.password)?;

        Ok(ValidatedLogin {
            email,
            password: self.password,
            remember: self.remember,
        })
    }
}

fn validate_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim().to_lowercase();
    if !email_valid(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email)
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

// Live hints shown beside the fields while typing. Presentational only;
// submit-time validation runs independently of them.

pub fn email_hint(value: &str) -> Option<&'static str> {
    if email_valid(value) {
        None
    } else {
        Some("Invalid email format")
    }
}

pub fn password_hint(value: &str) -> Option<&'static str> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        Some("Password must be at least 6 characters")
    } else {
        None
    }
}

pub fn confirm_hint(password: &str, confirm: &str) -> Option<&'static str> {
    if confirm == password {
        None
    } else {
        Some("Passwords do not match")
    }
}
