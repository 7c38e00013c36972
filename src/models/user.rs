use serde::{Deserialize, Serialize};

/// A registered account, one element of the persisted `auth_users`
/// collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name, trimmed and non-empty
    pub name: String,
    /// Unique key, stored lowercased
    pub email: String,
    /// Plaintext; compared by exact string equality at login
    pub password: String,
    /// Epoch milliseconds, set once at registration
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    /// Epoch milliseconds, updated on each successful login
    #[serde(rename = "lastSeen")]
    pub last_seen: i64,
}

impl User {
    pub fn new(name: String, email: String, password: String, now: i64) -> Self {
        Self {
            name,
            email,
            password,
            created_at: now,
            last_seen: now,
        }
    }
}

/// Opt-in credential cache persisted under `auth_remember`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RememberToken {
    pub email: String,
    #[serde(default)]
    pub password: String,
}
