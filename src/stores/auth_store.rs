use crate::core::config::StorageConfig;
use crate::models::user::{RememberToken, User};
use crate::stores::blob_store::{BlobStore, MemoryBlobStore};
use crate::stores::file_store::FileBlobStore;
use anyhow::{Context, Result};
use std::sync::Arc;

pub const USERS_KEY: &str = "auth_users";
pub const REMEMBER_KEY: &str = "auth_remember";
pub const SESSION_KEY: &str = "auth_session";

/// Typed access to the persisted auth records.
///
/// `durable` survives across sessions (`auth_users`, `auth_remember`);
/// `session` lives for one session only (`auth_session`). Single-writer
/// semantics assumed; concurrent writers are not reconciled.
pub struct AuthStore {
    durable: Arc<dyn BlobStore>,
    session: Arc<dyn BlobStore>,
}

impl AuthStore {
    pub fn new(durable: Arc<dyn BlobStore>, session: Arc<dyn BlobStore>) -> Self {
        Self { durable, session }
    }

    /// Both backends in memory. Used in tests and as the no-data-path
    /// fallback.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryBlobStore::new()),
            Arc::new(MemoryBlobStore::new()),
        )
    }

    /// File-backed durable storage when a data path is configured,
    /// in-memory otherwise. The session slot is always in memory.
    pub fn from_config(config: &StorageConfig) -> Self {
        let durable: Arc<dyn BlobStore> = match &config.data_path {
            Some(path) => Arc::new(FileBlobStore::open(path.clone())),
            None => Arc::new(MemoryBlobStore::new()),
        };
        Self::new(durable, Arc::new(MemoryBlobStore::new()))
    }

    /// Load the user collection. Missing or malformed data reads as
    /// empty; the failure is swallowed, not surfaced.
    pub fn load_users(&self) -> Vec<User> {
        self.durable
            .get(USERS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Serialize and store the whole collection, replacing prior
    /// contents.
    pub fn save_users(&self, users: &[User]) -> Result<()> {
        let raw = serde_json::to_string(users).context("Failed to serialize user collection")?;
        self.durable.set(USERS_KEY, &raw)
    }

    pub fn session(&self) -> Option<String> {
        self.session.get(SESSION_KEY)
    }

    pub fn set_session(&self, email: &str) -> Result<()> {
        self.session.set(SESSION_KEY, email)
    }

    pub fn clear_session(&self) -> Result<()> {
        self.session.remove(SESSION_KEY)
    }

    /// The stored remember token, if any. Malformed contents read as
    /// absent.
    pub fn remember(&self) -> Option<RememberToken> {
        self.durable
            .get(REMEMBER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    pub fn set_remember(&self, token: &RememberToken) -> Result<()> {
        let raw = serde_json::to_string(token).context("Failed to serialize remember token")?;
        self.durable.set(REMEMBER_KEY, &raw)
    }

    pub fn clear_remember(&self) -> Result<()> {
        self.durable.remove(REMEMBER_KEY)
    }
}
