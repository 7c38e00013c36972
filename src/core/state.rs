// Application state (AppState)

use crate::core::config::Config;
use crate::notify::toast::Notifier;
use crate::stores::auth_store::AuthStore;
use std::sync::Arc;

/// Shared application state
///
/// The single value handed to every page controller. All fields are
/// wrapped in Arc for cheap cloning into the host's event callbacks.
#[derive(Clone)]
pub struct AppState {
    /// Typed access to the persisted auth records
    pub store: Arc<AuthStore>,

    /// Sink for transient user-facing notices
    pub notifier: Arc<Notifier>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, store: AuthStore) -> Self {
        Self {
            store: Arc::new(store),
            notifier: Arc::new(Notifier::new()),
            config: Arc::new(config),
        }
    }

    /// State wired from config alone: file-backed storage when a data
    /// path is configured, in-memory otherwise.
    pub fn from_config(config: Config) -> Self {
        let store = AuthStore::from_config(&config.storage);
        Self::new(config, store)
    }
}
