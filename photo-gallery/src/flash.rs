use crate::error::{PhotoGalleryError, Result};
use async_trait::async_trait;

/// Flashlight (torch) control
#[async_trait]
pub trait FlashControl: Send + Sync {
    async fn is_available(&self) -> Result<bool>;
    async fn is_switched_on(&self) -> Result<bool>;
    /// Switch on with an intensity between 0.0 and 1.0
    async fn switch_on(&self, intensity: f32) -> Result<()>;
    async fn switch_off(&self) -> Result<()>;
}

/// For devices without a flashlight
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableFlash;

#[async_trait]
impl FlashControl for UnavailableFlash {
    async fn is_available(&self) -> Result<bool> {
        Ok(false)
    }

    async fn is_switched_on(&self) -> Result<bool> {
        Ok(false)
    }

    async fn switch_on(&self, _intensity: f32) -> Result<()> {
        Err(PhotoGalleryError::Flash("No flashlight on this device".to_string()))
    }

    async fn switch_off(&self) -> Result<()> {
        Err(PhotoGalleryError::Flash("No flashlight on this device".to_string()))
    }
}
