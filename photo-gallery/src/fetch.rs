//! Fetching web paths as binary blobs and turning them into data URLs

use crate::error::{PhotoGalleryError, Result};
use crate::models::Blob;
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
#[cfg(feature = "fetch")]
use std::path::Path;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Loads a URL as a binary blob
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Blob>;
}

/// Encode a blob as `data:<content-type>;base64,<payload>`
pub fn blob_to_data_url(blob: &Blob) -> String {
    let content_type = blob
        .content_type
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CONTENT_TYPE);
    format!(
        "data:{};base64,{}",
        content_type,
        general_purpose::STANDARD.encode(&blob.bytes)
    )
}

/// Simple MIME type guess based on the file extension
#[cfg(feature = "fetch")]
fn guess_mime_from_ext(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") | Some("heif") => "image/heic",
        _ => DEFAULT_CONTENT_TYPE,
    }
}

#[cfg(feature = "fetch")]
fn decode_data_url(url: &str) -> Result<Blob> {
    let rest = url.strip_prefix("data:").unwrap_or(url);
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| PhotoGalleryError::Fetch("Malformed data URL".to_string()))?;

    let (content_type, bytes) = match header.strip_suffix(";base64") {
        Some(mime) => (mime, general_purpose::STANDARD.decode(payload)?),
        None => (header, payload.as_bytes().to_vec()),
    };

    Ok(Blob {
        bytes,
        content_type: Some(content_type.to_string()).filter(|c| !c.is_empty()),
    })
}

/// Fetcher for `http(s)://`, `file://` and `data:` URLs
///
/// Session-scoped `blob:` URLs only exist inside a browser and are rejected.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

#[cfg(feature = "fetch")]
impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "fetch")]
#[async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Blob> {
        if let Some(path) = url.strip_prefix("file://") {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|e| PhotoGalleryError::Fetch(format!("Failed to read {}: {}", path, e)))?;
            return Ok(Blob {
                bytes,
                content_type: Some(guess_mime_from_ext(Path::new(path)).to_string()),
            });
        }

        if url.starts_with("data:") {
            return decode_data_url(url);
        }

        if url.starts_with("http://") || url.starts_with("https://") {
            log::debug!("Fetching {}", url);
            let response = self.client.get(url).send().await?.error_for_status()?;
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string());
            let bytes = response.bytes().await?.to_vec();
            return Ok(Blob {
                bytes,
                content_type,
            });
        }

        Err(PhotoGalleryError::Fetch(format!(
            "Unsupported URL scheme: {}",
            url
        )))
    }
}
