//! # Photo Gallery
//!
//! Take photos with the device camera, save them to app storage and keep a
//! gallery list that survives restarts.
//!
//! This crate provides:
//! - [`PhotoGalleryService`]: capture-and-save, reload of the saved list, flashlight toggle
//! - Capability traits for camera, file storage, key-value storage, flashlight and fetching
//! - Desktop implementations of those capabilities; the HTTP fetcher is behind
//!   the default `fetch` feature
//!
//! ## Platform Separation
//!
//! Hybrid (native shell) and web platforms store and display photos
//! differently. The service picks a [`PhotoStorageStrategy`] once, at
//! construction, from a [`PlatformInfo`] value.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use photo_gallery::{Capabilities, Platform, PhotoGalleryConfig, PhotoGalleryService};
//!
//! let mut service = PhotoGalleryService::new(
//!     PhotoGalleryConfig::default(),
//!     &Platform::Hybrid,
//!     capabilities,
//! );
//! service.load_saved().await?;
//! let photo = service.capture_and_save().await?;
//! ```

pub mod camera;
pub mod clock;
pub mod error;
pub mod fetch;
pub mod flash;
pub mod models;
pub mod platform;
pub mod preferences;
pub mod service;
pub mod storage;
pub mod strategy;

#[cfg(test)]
mod testing;

pub use camera::Camera;
pub use clock::{Clock, SystemClock};
pub use error::{PhotoGalleryError, Result};
pub use fetch::{blob_to_data_url, ResourceFetcher};
pub use flash::{FlashControl, UnavailableFlash};
pub use models::{
    Blob, CameraResultType, CameraSource, CaptureOptions, CapturedPhoto, Directory,
    FileReadResult, FileWriteResult, FlashState, Photo, PhotoGalleryConfig,
};
pub use platform::{convert_file_src, Platform, PlatformInfo};
pub use preferences::{JsonFilePreferences, KeyValueStore, MemoryPreferences};
pub use service::{Capabilities, PhotoGalleryService};
pub use storage::{FileStore, LocalFileStore};
pub use strategy::{HybridStrategy, PhotoStorageStrategy, WebStrategy};

#[cfg(feature = "fetch")]
pub use fetch::HttpFetcher;
