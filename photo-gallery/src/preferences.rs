//! Key-value persistence for the gallery list

use crate::error::{PhotoGalleryError, Result};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// String key-value store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store, nothing survives a restart
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryPreferences {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| PhotoGalleryError::Preferences("Store lock poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| PhotoGalleryError::Preferences("Store lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// All keys in one JSON object file, rewritten on every `set`
#[derive(Debug)]
pub struct JsonFilePreferences {
    path: PathBuf,
    write_lock: tokio::sync::Mutex<()>,
}

impl JsonFilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next state is written to before it replaces `path`
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn load(&self) -> Result<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                PhotoGalleryError::Preferences(format!(
                    "Invalid preferences file {}: {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(PhotoGalleryError::Preferences(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

#[async_trait]
impl KeyValueStore for JsonFilePreferences {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.load().await?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut values = self.load().await?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        // the store file is only ever replaced whole, by rename
        let content = serde_json::to_string_pretty(&values)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, content).await.map_err(|e| {
            PhotoGalleryError::Preferences(format!("Failed to write {}: {}", temp.display(), e))
        })?;
        tokio::fs::rename(&temp, &self.path).await.map_err(|e| {
            PhotoGalleryError::Preferences(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })?;

        log::debug!("Stored preference '{}' in {}", key, self.path.display());
        Ok(())
    }
}
