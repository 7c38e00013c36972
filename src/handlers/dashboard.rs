use crate::core::error::DashboardError;
use crate::core::state::AppState;
use crate::handlers::{Navigation, Surface};
use crate::notify::toast::ToastKind;
use crate::utils::time::format_timestamp;
use tracing::{info, warn};

/// Rendered dashboard contents, timestamps already formatted for
/// display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub greeting: String,
    pub email: String,
    pub created_at: String,
    pub last_seen: String,
}

/// Dashboard load handler
///
/// Identity resolves as the session token if present, else the remember
/// token's email, else none. Both failure cases raise a notice and
/// resolve to a redirect, never a rendered view.
pub fn dashboard(state: &AppState) -> Result<DashboardView, DashboardError> {
    let identity = state
        .store
        .session()
        .or_else(|| state.store.remember().map(|token| token.email));

    let Some(email) = identity else {
        warn!("Dashboard access with no identity");
        state
            .notifier
            .toast("Not logged in — redirecting to login", ToastKind::Error, 900);
        return Err(DashboardError::NotLoggedIn);
    };

    let users = state.store.load_users();
    let Some(user) = users.into_iter().find(|u| u.email == email) else {
        warn!(email = %email, "Dashboard identity has no user record");
        state
            .notifier
            .toast("User not found — redirecting", ToastKind::Error, 900);
        return Err(DashboardError::UserNotFound);
    };

    let first_name = user.name.split_whitespace().next().unwrap_or(&user.email);
    let greeting = format!("Hello, {first_name}");

    Ok(DashboardView {
        greeting,
        email: user.email,
        created_at: format_timestamp(user.created_at),
        last_seen: format_timestamp(user.last_seen),
    })
}

/// Where the host goes when the dashboard rejects its visitor.
pub fn redirect_to_login(state: &AppState) -> Navigation {
    Navigation {
        target: Surface::Login,
        delay_ms: state.config.latency.dashboard_redirect_ms,
    }
}

/// Logout handler. Clears the session token only; the remember token and
/// user collection are left untouched.
pub fn logout(state: &AppState) -> Result<Navigation, DashboardError> {
    state.store.clear_session()?;

    info!("Logged out");
    state.notifier.success("Logged out");

    Ok(Navigation {
        target: Surface::Login,
        delay_ms: state.config.latency.logout_redirect_ms,
    })
}
