// Centralized error handling for the auth flow

use thiserror::Error;

/// Field-level validation failures. Display strings are the exact
/// notice texts shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name")]
    EmptyName,

    #[error("Enter a valid email")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Errors that can occur during registration
#[derive(Error, Debug)]
pub enum RegisterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("Internal storage error")]
    Internal(#[from] anyhow::Error),
}

/// Errors that can occur on the login surface
#[derive(Error, Debug)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Covers both unknown email and wrong password; the message must not
    /// reveal which check failed.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Enter your email first to use Forgot Password (mock).")]
    ForgotPasswordNeedsEmail,

    #[error("Internal storage error")]
    Internal(#[from] anyhow::Error),
}

/// Errors that can occur on the dashboard surface. Both lookup failures
/// resolve to a redirect, not a dialog.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Not logged in — redirecting to login")]
    NotLoggedIn,

    #[error("User not found — redirecting")]
    UserNotFound,

    #[error("Internal storage error")]
    Internal(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_match_notices() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Please enter your name");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Enter a valid email");
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
    }

    #[test]
    fn test_login_error_does_not_leak_which_check_failed() {
        assert_eq!(LoginError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_validation_error_converts_transparently() {
        let err = RegisterError::from(ValidationError::InvalidEmail);
        assert_eq!(err.to_string(), "Enter a valid email");

        let err = LoginError::from(ValidationError::PasswordTooShort);
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }
}
