use crate::error::Result;
use crate::models::{CameraResultType, CameraSource, CaptureOptions, CapturedPhoto};
use async_trait::async_trait;

/// Device camera
///
/// Implementations prompt the user and resolve once a picture was taken.
/// Permission denial or cancellation is reported as an error.
#[async_trait]
pub trait Camera: Send + Sync {
    async fn capture(&self, options: &CaptureOptions) -> Result<CapturedPhoto>;
}

impl CaptureOptions {
    /// Live camera, file reference result, given quality
    pub fn camera(quality: u8) -> Self {
        Self {
            quality: quality.min(100),
            source: CameraSource::Camera,
            result_type: CameraResultType::Uri,
        }
    }
}
