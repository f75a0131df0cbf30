//! Platform specific photo persistence
//!
//! Hybrid and web platforms differ in how a captured photo is read, which
//! path gets stored and how display paths are rebuilt after a restart.
//! The gallery picks one strategy when it is constructed.

use crate::clock::Clock;
use crate::error::{PhotoGalleryError, Result};
use crate::fetch::{blob_to_data_url, ResourceFetcher};
use crate::models::{CapturedPhoto, Directory, FileWriteResult, Photo};
use crate::platform::{convert_file_src, Platform};
use crate::storage::FileStore;
use async_trait::async_trait;
use std::sync::Arc;

/// Extension of every saved photo file
pub const PHOTO_EXTENSION: &str = ".jpeg";

/// Prefix of the display path rebuilt for web platforms
pub const JPEG_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

#[async_trait]
pub trait PhotoStorageStrategy: Send + Sync {
    fn platform(&self) -> Platform;

    /// Read the captured photo as base64 (or a base64 data URL)
    async fn encode_as_base64(&self, photo: &CapturedPhoto) -> Result<String>;

    /// Write the captured photo to app storage and describe the saved file
    async fn persist(&self, photo: &CapturedPhoto) -> Result<Photo>;

    /// Rebuild session-local display paths of freshly loaded photos
    async fn restore_display_paths(&self, photos: &mut [Photo]) -> Result<()>;

    /// Remove the file of a photo that never made it into the stored list
    async fn discard(&self, photo: &Photo) -> Result<()>;
}

/// `<unix millis>.jpeg`
pub fn photo_file_name(millis: i64) -> String {
    format!("{}{}", millis, PHOTO_EXTENSION)
}

async fn write_photo_file(
    files: &dyn FileStore,
    clock: &dyn Clock,
    data: &str,
) -> Result<(String, FileWriteResult)> {
    let file_name = photo_file_name(clock.now_millis());
    let saved = files.write(&file_name, data, Directory::Data).await?;
    log::debug!("Saved photo file {} as {}", file_name, saved.uri);
    Ok((file_name, saved))
}

/// Native shell: files are read by path and shown through the local file server
pub struct HybridStrategy {
    files: Arc<dyn FileStore>,
    clock: Arc<dyn Clock>,
    display_origin: String,
}

impl HybridStrategy {
    pub fn new(files: Arc<dyn FileStore>, clock: Arc<dyn Clock>, display_origin: String) -> Self {
        Self {
            files,
            clock,
            display_origin,
        }
    }
}

#[async_trait]
impl PhotoStorageStrategy for HybridStrategy {
    fn platform(&self) -> Platform {
        Platform::Hybrid
    }

    async fn encode_as_base64(&self, photo: &CapturedPhoto) -> Result<String> {
        let path = photo
            .path
            .as_deref()
            .ok_or(PhotoGalleryError::MissingPhotoPath("native path"))?;
        let file = self.files.read(path, None).await?;
        Ok(file.data)
    }

    async fn persist(&self, photo: &CapturedPhoto) -> Result<Photo> {
        let data = self.encode_as_base64(photo).await?;
        let (_, saved) = write_photo_file(self.files.as_ref(), self.clock.as_ref(), &data).await?;

        let webview_path = convert_file_src(&saved.uri, &self.display_origin);
        Ok(Photo::new(saved.uri, Some(webview_path)))
    }

    async fn restore_display_paths(&self, _photos: &mut [Photo]) -> Result<()> {
        Ok(())
    }

    async fn discard(&self, photo: &Photo) -> Result<()> {
        self.files.delete(&photo.filepath, None).await
    }
}

/// Plain browser: photos are fetched from their web path and shown as data URLs
pub struct WebStrategy {
    files: Arc<dyn FileStore>,
    fetcher: Arc<dyn ResourceFetcher>,
    clock: Arc<dyn Clock>,
}

impl WebStrategy {
    pub fn new(
        files: Arc<dyn FileStore>,
        fetcher: Arc<dyn ResourceFetcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            files,
            fetcher,
            clock,
        }
    }
}

#[async_trait]
impl PhotoStorageStrategy for WebStrategy {
    fn platform(&self) -> Platform {
        Platform::Web
    }

    async fn encode_as_base64(&self, photo: &CapturedPhoto) -> Result<String> {
        let web_path = photo
            .web_path
            .as_deref()
            .ok_or(PhotoGalleryError::MissingPhotoPath("web path"))?;
        let blob = self.fetcher.fetch(web_path).await?;
        Ok(blob_to_data_url(&blob))
    }

    async fn persist(&self, photo: &CapturedPhoto) -> Result<Photo> {
        let data = self.encode_as_base64(photo).await?;
        let (file_name, _) =
            write_photo_file(self.files.as_ref(), self.clock.as_ref(), &data).await?;

        // the camera's web path is already renderable
        Ok(Photo::new(file_name, photo.web_path.clone()))
    }

    async fn restore_display_paths(&self, photos: &mut [Photo]) -> Result<()> {
        for photo in photos.iter_mut() {
            let file = self
                .files
                .read(&photo.filepath, Some(Directory::Data))
                .await?;
            photo.webview_path = Some(format!("{}{}", JPEG_DATA_URL_PREFIX, file.data));
        }
        Ok(())
    }

    async fn discard(&self, photo: &Photo) -> Result<()> {
        self.files
            .delete(&photo.filepath, Some(Directory::Data))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeFetcher, MemoryFileStore, StepClock};

    #[test]
    fn test_photo_file_name() {
        assert_eq!(photo_file_name(1700000000000), "1700000000000.jpeg");
    }

    #[tokio::test]
    async fn test_hybrid_requires_native_path() {
        let strategy = HybridStrategy::new(
            Arc::new(MemoryFileStore::new()),
            Arc::new(StepClock::new(1)),
            "http://localhost".to_string(),
        );
        let photo = CapturedPhoto {
            web_path: Some("blob:x".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            strategy.encode_as_base64(&photo).await,
            Err(PhotoGalleryError::MissingPhotoPath(_))
        ));
    }

    #[tokio::test]
    async fn test_hybrid_encode_reads_native_file() {
        let files = Arc::new(MemoryFileStore::new());
        files.seed("file:///cache/cap.jpg", "QUJD");
        let strategy = HybridStrategy::new(
            files,
            Arc::new(StepClock::new(1)),
            "http://localhost".to_string(),
        );
        let photo = CapturedPhoto {
            path: Some("file:///cache/cap.jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(strategy.encode_as_base64(&photo).await.unwrap(), "QUJD");
    }

    #[tokio::test]
    async fn test_web_encode_produces_data_url() {
        let fetcher = Arc::new(FakeFetcher::new());
        fetcher.add("blob:http://host/abc", b"ABC", Some("image/jpeg"));
        let strategy = WebStrategy::new(
            Arc::new(MemoryFileStore::new()),
            fetcher,
            Arc::new(StepClock::new(1)),
        );
        let photo = CapturedPhoto {
            web_path: Some("blob:http://host/abc".to_string()),
            ..Default::default()
        };
        assert_eq!(
            strategy.encode_as_base64(&photo).await.unwrap(),
            "data:image/jpeg;base64,QUJD"
        );
    }

    #[tokio::test]
    async fn test_web_restore_stops_at_first_failure() {
        let files = Arc::new(MemoryFileStore::new());
        files.seed(&MemoryFileStore::data_key("1.jpeg"), "AAAA");
        files.seed(&MemoryFileStore::data_key("3.jpeg"), "CCCC");
        let strategy = WebStrategy::new(
            files.clone(),
            Arc::new(FakeFetcher::new()),
            Arc::new(StepClock::new(1)),
        );

        let mut photos = vec![
            Photo::new("1.jpeg", None),
            Photo::new("2.jpeg", None),
            Photo::new("3.jpeg", None),
        ];
        let result = strategy.restore_display_paths(&mut photos).await;

        assert!(matches!(result, Err(PhotoGalleryError::Storage(_))));
        assert_eq!(
            photos[0].webview_path.as_deref(),
            Some("data:image/jpeg;base64,AAAA")
        );
        assert_eq!(photos[2].webview_path, None);
        assert_eq!(files.read_count(), 2);
    }
}
