use crate::error::AppError;
use crate::filesystem::get_app_data_dir;
use photo_gallery::{Platform, PhotoGalleryConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// App configuration, read from a TOML file
///
/// ```toml
/// data_dir = "./data"
/// platform = "web"
///
/// [gallery]
/// storage_key = "photos"
/// capture_quality = 100
/// flash_intensity = 1.0
/// display_origin = "http://localhost"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub platform: Platform,
    pub gallery: PhotoGalleryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: get_app_data_dir(),
            platform: Platform::default(),
            gallery: PhotoGalleryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: Self = toml::from_str(content)?;
        if config.gallery.capture_quality > 100 {
            return Err(AppError::Config(format!(
                "capture_quality must be between 0 and 100, got {}",
                config.gallery.capture_quality
            )));
        }
        if !(0.0..=1.0).contains(&config.gallery.flash_intensity) {
            return Err(AppError::Config(format!(
                "flash_intensity must be between 0.0 and 1.0, got {}",
                config.gallery.flash_intensity
            )));
        }
        Ok(config)
    }
}
