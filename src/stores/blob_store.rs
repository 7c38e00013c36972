use anyhow::Result;
use dashmap::DashMap;

/// String-keyed record storage.
///
/// Reads never fail: a backend that cannot produce a readable value for
/// a key returns `None`. Writes report real failures.
pub trait BlobStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory backend
///
/// Always used for the session-scoped slot; also stands in for the
/// durable backend when no data path is configured, and in tests.
pub struct MemoryBlobStore {
    records: DashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Option<String> {
        self.records.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.records.remove(key);
        Ok(())
    }
}
