use crate::core::error::RegisterError;
use crate::core::state::AppState;
use crate::handlers::{Navigation, Surface};
use crate::models::user::User;
use crate::notify::toast::ToastKind;
use crate::utils::time::now_millis;
use crate::validation::forms::RegisterForm;
use tracing::{info, warn};

/// Register submit handler
///
/// # Flow
/// 1. Validate the form (name, email shape, password length, confirmation)
/// 2. Reject if the case-folded email is already registered
/// 3. Append the new user and persist the whole collection
/// 4. Raise the success notice and hand back the redirect to login
///
/// Each failure path raises exactly one error notice and leaves stored
/// state untouched.
pub fn register(state: &AppState, form: RegisterForm) -> Result<Navigation, RegisterError> {
    let validated = form.validate().map_err(|e| {
        warn!(error = %e, "Registration validation failed");
        state.notifier.error(&e.to_string());
        RegisterError::from(e)
    })?;

    let mut users = state.store.load_users();
    if users.iter().any(|u| u.email == validated.email) {
        warn!(email = %validated.email, "Registration rejected: email already registered");
        state
            .notifier
            .error("An account with this email already exists");
        return Err(RegisterError::EmailTaken);
    }

    let email = validated.email.clone();
    users.push(User::new(
        validated.name,
        validated.email,
        validated.password,
        now_millis(),
    ));
    state.store.save_users(&users)?;

    info!(email = %email, users = users.len(), "User registered");
    state.notifier.toast(
        "Registered successfully — redirecting to login...",
        ToastKind::Success,
        2000,
    );

    Ok(Navigation {
        target: Surface::Login,
        delay_ms: state.config.latency.register_redirect_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::error::ValidationError;
    use crate::stores::auth_store::AuthStore;

    fn test_state() -> AppState {
        AppState::new(Config::default(), AuthStore::in_memory())
    }

    fn valid_form() -> RegisterForm {
        RegisterForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            confirm: "secret1".to_string(),
        }
    }

    #[test]
    fn test_successful_registration_appends_one_user() {
        let state = test_state();

        let nav = register(&state, valid_form()).unwrap();
        assert_eq!(nav.target, Surface::Login);
        assert_eq!(nav.delay_ms, 1200);

        let users = state.store.load_users();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "ada@example.com");
        assert_eq!(users[0].created_at, users[0].last_seen);
    }

    #[test]
    fn test_duplicate_email_is_rejected_case_folded() {
        let state = test_state();
        register(&state, valid_form()).unwrap();

        let mut second = valid_form();
        second.name = "Another Ada".to_string();
        second.email = "ADA@Example.Com".to_string();

        let before = state.store.load_users();
        let err = register(&state, second).unwrap_err();
        assert!(matches!(err, RegisterError::EmailTaken));
        assert_eq!(state.store.load_users(), before);
    }

    #[test]
    fn test_validation_failure_writes_nothing() {
        let state = test_state();
        let mut form = valid_form();
        form.confirm = "different".to_string();

        let err = register(&state, form).unwrap_err();
        assert!(matches!(
            err,
            RegisterError::Validation(ValidationError::PasswordMismatch)
        ));
        assert!(state.store.load_users().is_empty());
    }

    #[test]
    fn test_failure_raises_exactly_one_notice() {
        let state = test_state();
        let mut form = valid_form();
        form.name = "  ".to_string();

        register(&state, form).unwrap_err();
        assert_eq!(state.notifier.len(), 1);
    }

    #[test]
    fn test_success_raises_success_notice() {
        let state = test_state();
        register(&state, valid_form()).unwrap();

        let active = state.notifier.active(now_millis());
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].0.kind, ToastKind::Success);
        assert!(active[0].0.message.starts_with("Registered successfully"));
    }
}
