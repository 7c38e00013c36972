use crate::stores::blob_store::BlobStore;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Durable backend: one JSON object file holding the whole key-value map,
/// rewritten on every mutation.
pub struct FileBlobStore {
    records: Mutex<BTreeMap<String, String>>,
    path: PathBuf,
}

impl FileBlobStore {
    /// Open a store at `path`. A missing or malformed file starts the
    /// store empty; it is never an error.
    pub fn open(path: PathBuf) -> Self {
        let records = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Malformed blob file, starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Self {
            records: Mutex::new(records),
            path,
        }
    }

    fn persist(&self, records: &BTreeMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string(records).context("Failed to serialize blob store")?;
        std::fs::write(&self.path, raw)
            .context(format!("Failed to write blob file: {}", self.path.display()))?;
        Ok(())
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Option<String> {
        self.records.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        records.insert(key.to_string(), value.to_string());
        self.persist(&records)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        records.remove(key);
        self.persist(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileBlobStore::open(temp_dir.path().join("auth.json"));
        assert_eq!(store.get("auth_users"), None);
    }

    #[test]
    fn test_records_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("auth.json");

        let store = FileBlobStore::open(path.clone());
        store.set("auth_users", "[]").unwrap();
        store.set("auth_remember", "{\"email\":\"a@b.co\"}").unwrap();
        drop(store);

        let store = FileBlobStore::open(path);
        assert_eq!(store.get("auth_users"), Some("[]".to_string()));
        assert_eq!(
            store.get("auth_remember"),
            Some("{\"email\":\"a@b.co\"}".to_string())
        );
    }

    #[test]
    fn test_malformed_file_recovers_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("auth.json");
        fs::write(&path, "{not json at all").unwrap();

        let store = FileBlobStore::open(path.clone());
        assert_eq!(store.get("auth_users"), None);

        // The store is fully usable after recovery
        store.set("auth_users", "[]").unwrap();
        drop(store);
        let store = FileBlobStore::open(path);
        assert_eq!(store.get("auth_users"), Some("[]".to_string()));
    }

    #[test]
    fn test_remove_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("auth.json");

        let store = FileBlobStore::open(path.clone());
        store.set("auth_remember", "{}").unwrap();
        store.remove("auth_remember").unwrap();
        drop(store);

        let store = FileBlobStore::open(path);
        assert_eq!(store.get("auth_remember"), None);
    }
}
