use crate::camera::Camera;
use crate::clock::Clock;
use crate::error::Result;
use crate::fetch::ResourceFetcher;
use crate::flash::FlashControl;
use crate::models::{CaptureOptions, FlashState, Photo, PhotoGalleryConfig};
use crate::platform::{Platform, PlatformInfo};
use crate::preferences::KeyValueStore;
use crate::storage::FileStore;
use crate::strategy::{HybridStrategy, PhotoStorageStrategy, WebStrategy};
use std::sync::Arc;

/// Device capabilities the gallery works with
#[derive(Clone)]
pub struct Capabilities {
    pub camera: Arc<dyn Camera>,
    pub files: Arc<dyn FileStore>,
    pub preferences: Arc<dyn KeyValueStore>,
    pub flash: Arc<dyn FlashControl>,
    pub fetcher: Arc<dyn ResourceFetcher>,
    pub clock: Arc<dyn Clock>,
}

/// Photo Gallery Service
///
/// Owns the newest-first list of saved photos for the app session. The list
/// is stored as one JSON array under `config.storage_key`.
pub struct PhotoGalleryService {
    config: PhotoGalleryConfig,
    photos: Vec<Photo>,
    camera: Arc<dyn Camera>,
    preferences: Arc<dyn KeyValueStore>,
    flash: Arc<dyn FlashControl>,
    strategy: Box<dyn PhotoStorageStrategy>,
}

impl PhotoGalleryService {
    /// Initialize the gallery for the given platform
    pub fn new(
        config: PhotoGalleryConfig,
        platform: &dyn PlatformInfo,
        capabilities: Capabilities,
    ) -> Self {
        let strategy: Box<dyn PhotoStorageStrategy> = if platform.is_hybrid() {
            Box::new(HybridStrategy::new(
                capabilities.files.clone(),
                capabilities.clock.clone(),
                config.display_origin.clone(),
            ))
        } else {
            Box::new(WebStrategy::new(
                capabilities.files.clone(),
                capabilities.fetcher.clone(),
                capabilities.clock.clone(),
            ))
        };

        Self::with_strategy(config, capabilities, strategy)
    }

    /// Initialize with an explicit persistence strategy
    pub fn with_strategy(
        config: PhotoGalleryConfig,
        capabilities: Capabilities,
        strategy: Box<dyn PhotoStorageStrategy>,
    ) -> Self {
        log::debug!(
            "Photo gallery on {:?} platform, storage key '{}'",
            strategy.platform(),
            config.storage_key
        );
        Self {
            config,
            photos: Vec::new(),
            camera: capabilities.camera,
            preferences: capabilities.preferences,
            flash: capabilities.flash,
            strategy,
        }
    }

    pub fn config(&self) -> &PhotoGalleryConfig {
        &self.config
    }

    pub fn platform(&self) -> Platform {
        self.strategy.platform()
    }

    /// Saved photos, newest first
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    fn capture_options(&self) -> CaptureOptions {
        CaptureOptions::camera(self.config.capture_quality)
    }

    /// Take a photo, save it to app storage and add it to the front of the gallery
    ///
    /// The photo list is written to the key-value store before the in-memory
    /// list changes. If that write fails the saved file is removed again and
    /// the gallery stays as it was.
    pub async fn capture_and_save(&mut self) -> Result<Photo> {
        let captured = self.camera.capture(&self.capture_options()).await?;
        log::debug!(
            "Captured photo path={:?} web_path={:?}",
            captured.path,
            captured.web_path
        );

        let saved = self.strategy.persist(&captured).await?;

        let mut updated = Vec::with_capacity(self.photos.len() + 1);
        updated.push(saved.clone());
        updated.extend(self.photos.iter().cloned());

        if let Err(e) = self.store(&updated).await {
            log::error!("Failed to store photo list, discarding {}: {}", saved.filepath, e);
            if let Err(cleanup) = self.strategy.discard(&saved).await {
                log::warn!("Could not remove orphaned photo {}: {}", saved.filepath, cleanup);
            }
            return Err(e);
        }

        self.photos = updated;
        log::info!(
            "Saved photo {} ({} photos in gallery)",
            saved.filepath,
            self.photos.len()
        );
        Ok(saved)
    }

    async fn store(&self, photos: &[Photo]) -> Result<()> {
        let value = serde_json::to_string(photos)?;
        self.preferences.set(&self.config.storage_key, &value).await
    }

    /// Replace the gallery with the stored photo list
    ///
    /// A missing entry yields an empty gallery. On web platforms every photo
    /// is read back from storage to rebuild its display path; the first
    /// failing read aborts the load and the previous gallery is kept.
    pub async fn load_saved(&mut self) -> Result<&[Photo]> {
        let mut photos: Vec<Photo> = match self.preferences.get(&self.config.storage_key).await? {
            Some(value) => serde_json::from_str(&value)?,
            None => Vec::new(),
        };

        self.strategy.restore_display_paths(&mut photos).await?;

        log::debug!("Loaded {} saved photos", photos.len());
        self.photos = photos;
        Ok(&self.photos)
    }

    /// Switch the flashlight on or off
    ///
    /// Returns [`FlashState::Unavailable`] without touching anything when the
    /// device has no flashlight.
    pub async fn toggle_flashlight(&self) -> Result<FlashState> {
        if !self.flash.is_available().await? {
            log::info!("Flashlight not available on this device.");
            return Ok(FlashState::Unavailable);
        }

        if self.flash.is_switched_on().await? {
            self.flash.switch_off().await?;
            log::info!("Flashlight switched off");
            Ok(FlashState::Off)
        } else {
            self.flash.switch_on(self.config.flash_intensity).await?;
            log::info!("Flashlight switched on");
            Ok(FlashState::On)
        }
    }
}
