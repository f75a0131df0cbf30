// Desktop stand-in for the device camera: a "capture" imports an existing
// image file into the capture staging directory. Staged copies stay there
// until `clear_staged` is called, after the gallery has saved its own copy.

use async_trait::async_trait;
use photo_gallery::storage::file_uri;
use photo_gallery::{Camera, CaptureOptions, CapturedPhoto, Clock, PhotoGalleryError, SystemClock};
use std::path::PathBuf;
use std::sync::Mutex;

pub struct FileImportCamera {
    source: PathBuf,
    capture_dir: PathBuf,
    staged: Mutex<Vec<PathBuf>>,
}

impl FileImportCamera {
    pub fn new(source: PathBuf, capture_dir: PathBuf) -> Self {
        Self {
            source,
            capture_dir,
            staged: Mutex::new(Vec::new()),
        }
    }

    /// Remove every staged capture, returns how many files were deleted
    pub async fn clear_staged(&self) -> std::io::Result<usize> {
        let staged = self
            .staged
            .lock()
            .map(|mut s| std::mem::take(&mut *s))
            .unwrap_or_default();

        let count = staged.len();
        for path in staged {
            tokio::fs::remove_file(&path).await?;
            log::debug!("Removed staged capture {}", path.display());
        }
        Ok(count)
    }
}

#[async_trait]
impl Camera for FileImportCamera {
    async fn capture(&self, options: &CaptureOptions) -> photo_gallery::Result<CapturedPhoto> {
        log::debug!(
            "Importing {} as capture ({:?}, quality {})",
            self.source.display(),
            options.source,
            options.quality
        );

        if !self.source.is_file() {
            return Err(PhotoGalleryError::Camera(format!(
                "No image at {}",
                self.source.display()
            )));
        }

        let format = self
            .source
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_else(|| "jpeg".to_string());

        tokio::fs::create_dir_all(&self.capture_dir).await?;
        let staged = self
            .capture_dir
            .join(format!("capture-{}.{}", SystemClock.now_millis(), format));
        tokio::fs::copy(&self.source, &staged).await?;
        let staged = tokio::fs::canonicalize(&staged).await?;

        let uri = file_uri(&staged);
        if let Ok(mut list) = self.staged.lock() {
            list.push(staged);
        }
        Ok(CapturedPhoto {
            path: Some(uri.clone()),
            web_path: Some(uri),
            format,
        })
    }
}
