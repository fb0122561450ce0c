use crate::utils::error::{LocaleError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Durable string key-value storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key, returning whether it existed
    async fn remove(&self, key: &str) -> Result<bool>;
}

/// In-process store; contents are lost when the process exits
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.entries.write().await.remove(key).is_some())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredEntry {
    value: String,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StorageFile {
    #[serde(default)]
    entries: BTreeMap<String, StoredEntry>,
}

/// JSON file-backed store
///
/// Every write rewrites the whole file; the lock only serializes writers
/// within this process.
pub struct FileStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When `key` was last written
    pub async fn updated_at(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
        let _guard = self.lock.read().await;
        let file = self.read_file().await?;
        Ok(file.entries.get(key).map(|e| e.updated_at))
    }

    async fn read_file(&self) -> Result<StorageFile> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StorageFile::default()),
            Err(e) => Err(LocaleError::Storage(format!(
                "Failed to read {:?}: {}",
                self.path, e
            ))),
        }
    }

    async fn write_file(&self, file: &StorageFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(file)?;
        tokio::fs::write(&self.path, content).await.map_err(|e| {
            LocaleError::Storage(format!("Failed to write {:?}: {}", self.path, e))
        })
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.read().await;
        let file = self.read_file().await?;
        Ok(file.entries.get(key).map(|e| e.value.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.write().await;
        let mut file = self.read_file().await?;
        file.entries.insert(
            key.to_string(),
            StoredEntry {
                value: value.to_string(),
                updated_at: Utc::now(),
            },
        );
        self.write_file(&file).await?;

        tracing::debug!("Stored {}={} in {:?}", key, value, self.path);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        let _guard = self.lock.write().await;
        let mut file = self.read_file().await?;
        let existed = file.entries.remove(key).is_some();
        if existed {
            self.write_file(&file).await?;
        }
        Ok(existed)
    }
}
