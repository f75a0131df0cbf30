//! File storage for captured photos
//!
//! The [`FileStore`] trait mirrors what a mobile filesystem plugin offers:
//! base64 in, base64 out, scoped by [`Directory`]. [`LocalFileStore`] is the
//! desktop implementation backed by a directory on disk.

use crate::error::{PhotoGalleryError, Result};
use crate::models::{Directory, FileReadResult, FileWriteResult};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use std::path::{Path, PathBuf};

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Write `data` (base64 payload or data URL) to `path` inside `directory`
    async fn write(&self, path: &str, data: &str, directory: Directory)
        -> Result<FileWriteResult>;

    /// Read a file as base64
    ///
    /// Without a directory, `path` is taken as an absolute path or file URI.
    async fn read(&self, path: &str, directory: Option<Directory>) -> Result<FileReadResult>;

    async fn delete(&self, path: &str, directory: Option<Directory>) -> Result<()>;
}

/// Returns the base64 part of `data`, stripping a `data:...;base64,` header
pub fn base64_payload(data: &str) -> &str {
    if data.starts_with("data:") {
        match data.split_once(',') {
            Some((_, payload)) => payload,
            None => "",
        }
    } else {
        data
    }
}

/// Build a `file://` URI for an absolute path
pub fn file_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}

/// File store rooted in a local directory, one subdirectory per [`Directory`]
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a file
    pub fn resolve(&self, path: &str, directory: Option<Directory>) -> PathBuf {
        match directory {
            Some(dir) => self.root.join(dir.dir_name()).join(path),
            None => PathBuf::from(path.strip_prefix("file://").unwrap_or(path)),
        }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn write(
        &self,
        path: &str,
        data: &str,
        directory: Directory,
    ) -> Result<FileWriteResult> {
        let target = self.resolve(path, Some(directory));
        let bytes = general_purpose::STANDARD.decode(base64_payload(data))?;

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, &bytes).await.map_err(|e| {
            PhotoGalleryError::Storage(format!("Failed to write {}: {}", target.display(), e))
        })?;

        let absolute = tokio::fs::canonicalize(&target).await?;
        log::debug!("Wrote {} bytes to {}", bytes.len(), absolute.display());

        Ok(FileWriteResult {
            uri: file_uri(&absolute),
        })
    }

    async fn read(&self, path: &str, directory: Option<Directory>) -> Result<FileReadResult> {
        let source = self.resolve(path, directory);
        let bytes = tokio::fs::read(&source).await.map_err(|e| {
            PhotoGalleryError::Storage(format!("Failed to read {}: {}", source.display(), e))
        })?;

        Ok(FileReadResult {
            data: general_purpose::STANDARD.encode(bytes),
        })
    }

    async fn delete(&self, path: &str, directory: Option<Directory>) -> Result<()> {
        let target = self.resolve(path, directory);
        tokio::fs::remove_file(&target).await.map_err(|e| {
            PhotoGalleryError::Storage(format!("Failed to delete {}: {}", target.display(), e))
        })
    }
}
