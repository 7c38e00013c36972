use crate::core::error::LoginError;
use crate::core::state::AppState;
use crate::handlers::{Navigation, Surface};
use crate::models::user::RememberToken;
use crate::notify::toast::ToastKind;
use crate::utils::time::now_millis;
use crate::validation::forms::{email_valid, LoginForm};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Values the host pre-populates the login form with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginPrefill {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

/// Pre-populate the form from a stored remember token. Best-effort: a
/// missing or malformed token reads as nothing to prefill.
pub fn prefill(state: &AppState) -> Option<LoginPrefill> {
    let token = state.store.remember()?;
    if token.email.is_empty() {
        return None;
    }
    Some(LoginPrefill {
        email: token.email,
        password: token.password,
        remember: true,
    })
}

/// Mock forgot-password affordance: requires a syntactically valid email
/// in the field, then pretends a reset link was sent. No other action.
pub fn forgot_password(state: &AppState, email_field: &str) -> Result<(), LoginError> {
    let email = email_field.trim();
    if email.is_empty() || !email_valid(email) {
        state
            .notifier
            .error("Enter your email first to use Forgot Password (mock).");
        return Err(LoginError::ForgotPasswordNeedsEmail);
    }

    state
        .notifier
        .success(&format!("Mock: Password reset link sent to {email}"));
    Ok(())
}

/// Login submit handler
///
/// # Flow
/// 1. Validate email shape and password length; no latency incurred on
///    failure
/// 2. Await the simulated network latency
/// 3. Unknown email and wrong password both reject with the same notice,
///    leaving stored state untouched
/// 4. On a match: update `last_seen`, persist the collection, overwrite
///    or clear the remember token per the opt-in flag, establish the
///    session, hand back the redirect to the dashboard
pub async fn login(state: &AppState, form: LoginForm) -> Result<Navigation, LoginError> {
    let validated = form.validate().map_err(|e| {
        warn!(error = %e, "Login validation failed");
        state.notifier.error(&e.to_string());
        LoginError::from(e)
    })?;

    debug!(delay_ms = state.config.latency.login_ms, "Simulating network latency");
    tokio::time::sleep(Duration::from_millis(state.config.latency.login_ms)).await;

    let mut users = state.store.load_users();
    let matched = users
        .iter()
        .position(|u| u.email == validated.email && u.password == validated.password);

    let Some(idx) = matched else {
        // Same notice for unknown email and wrong password
        warn!(email = %validated.email, "Login rejected");
        state.notifier.error("Invalid credentials");
        return Err(LoginError::InvalidCredentials);
    };

    users[idx].last_seen = now_millis();
    state.store.save_users(&users)?;

    if validated.remember {
        state.store.set_remember(&RememberToken {
            email: validated.email.clone(),
            password: validated.password.clone(),
        })?;
    } else {
        state.store.clear_remember()?;
    }

    state.store.set_session(&validated.email)?;

    info!(email = %validated.email, "Login successful");
    state
        .notifier
        .toast("Login successful", ToastKind::Success, 1400);

    Ok(Navigation {
        target: Surface::Dashboard,
        delay_ms: state.config.latency.login_redirect_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::error::ValidationError;
    use crate::handlers::register::register;
    use crate::stores::auth_store::AuthStore;
    use crate::validation::forms::RegisterForm;

    fn test_state() -> AppState {
        let mut config = Config::default();
        config.latency.login_ms = 0;
        AppState::new(config, AuthStore::in_memory())
    }

    fn state_with_user() -> AppState {
        let state = test_state();
        register(
            &state,
            RegisterForm {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                password: "secret1".to_string(),
                confirm: "secret1".to_string(),
            },
        )
        .unwrap();
        state
    }

    fn login_form(email: &str, password: &str, remember: bool) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
            remember,
        }
    }

    #[tokio::test]
    async fn test_successful_login_sets_session_and_last_seen() {
        let state = state_with_user();
        let before = state.store.load_users()[0].last_seen;

        let nav = login(&state, login_form("Ada@Example.com ", "secret1", false))
            .await
            .unwrap();
        assert_eq!(nav.target, Surface::Dashboard);
        assert_eq!(nav.delay_ms, 900);

        assert_eq!(state.store.session(), Some("ada@example.com".to_string()));
        assert!(state.store.load_users()[0].last_seen >= before);
    }

    #[tokio::test]
    async fn test_wrong_password_changes_nothing() {
        let state = state_with_user();
        let before = state.store.load_users();

        let err = login(&state, login_form("ada@example.com", "wrong-1", false))
            .await
            .unwrap_err();
        assert!(matches!(err, LoginError::InvalidCredentials));
        assert_eq!(state.store.load_users(), before);
        assert_eq!(state.store.session(), None);
    }

    #[tokio::test]
    async fn test_unknown_email_rejects_identically() {
        let state = state_with_user();

        let err = login(&state, login_form("ghost@example.com", "secret1", false))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(state.store.session(), None);
    }

    #[tokio::test]
    async fn test_remember_opt_in_stores_token() {
        let state = state_with_user();
        login(&state, login_form("ada@example.com", "secret1", true))
            .await
            .unwrap();

        assert_eq!(
            state.store.remember(),
            Some(RememberToken {
                email: "ada@example.com".to_string(),
                password: "secret1".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_remember_opt_out_clears_previous_token() {
        let state = state_with_user();
        login(&state, login_form("ada@example.com", "secret1", true))
            .await
            .unwrap();
        assert!(state.store.remember().is_some());

        login(&state, login_form("ada@example.com", "secret1", false))
            .await
            .unwrap();
        assert_eq!(state.store.remember(), None);
    }

    #[tokio::test]
    async fn test_validation_failure_skips_credential_check() {
        let state = state_with_user();

        let err = login(&state, login_form("ada@example.com", "short", false))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LoginError::Validation(ValidationError::PasswordTooShort)
        ));
        assert_eq!(state.store.session(), None);
    }

    #[test]
    fn test_prefill_requires_a_stored_token() {
        let state = test_state();
        assert_eq!(prefill(&state), None);

        state
            .store
            .set_remember(&RememberToken {
                email: "ada@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .unwrap();
        assert_eq!(
            prefill(&state),
            Some(LoginPrefill {
                email: "ada@example.com".to_string(),
                password: "secret1".to_string(),
                remember: true,
            })
        );
    }

    #[test]
    fn test_prefill_ignores_token_without_email() {
        let state = test_state();
        state
            .store
            .set_remember(&RememberToken {
                email: String::new(),
                password: "secret1".to_string(),
            })
            .unwrap();
        assert_eq!(prefill(&state), None);
    }

    #[test]
    fn test_forgot_password_requires_valid_email() {
        let state = test_state();
        assert!(forgot_password(&state, "   ").is_err());
        assert!(forgot_password(&state, "a@b").is_err());
        assert!(forgot_password(&state, " ada@example.com ").is_ok());
    }
}
