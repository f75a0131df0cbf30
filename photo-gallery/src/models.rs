use serde::{Deserialize, Serialize};

/// A saved photo as stored in the gallery list
///
/// `filepath` is what the file store needs to read the photo again.
/// `webview_path` is only valid for the current session and is rebuilt on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Photo {
    pub filepath: String,
    #[serde(
        rename = "webviewPath",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub webview_path: Option<String>,
}

impl Photo {
    pub fn new(filepath: impl Into<String>, webview_path: Option<String>) -> Self {
        Self {
            filepath: filepath.into(),
            webview_path,
        }
    }
}

/// Where the camera takes the picture from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraSource {
    /// Let the user choose between camera and photo library
    Prompt,
    /// Take a new picture with the camera
    Camera,
    /// Pick an existing picture
    Photos,
}

/// How the captured picture is handed back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraResultType {
    /// A file reference (path + web path), no image bytes in memory
    Uri,
    Base64,
    DataUrl,
}

/// Options passed to [`crate::Camera::capture`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOptions {
    /// JPEG quality, 0 to 100
    pub quality: u8,
    pub source: CameraSource,
    pub result_type: CameraResultType,
}

/// Raw result of a camera capture
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPhoto {
    /// Native file path, only set on hybrid platforms
    pub path: Option<String>,
    /// Transient path the web layer can render directly
    pub web_path: Option<String>,
    /// Image format reported by the camera, e.g. "jpeg"
    pub format: String,
}

/// Storage scope for file operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directory {
    /// Persistent per-app data
    Data,
    Cache,
    Documents,
}

impl Directory {
    /// Subdirectory name used by file-backed stores
    pub fn dir_name(&self) -> &'static str {
        match self {
            Directory::Data => "data",
            Directory::Cache => "cache",
            Directory::Documents => "documents",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWriteResult {
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReadResult {
    /// Base64 encoded file content
    pub data: String,
}

/// A fetched web resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Outcome of a flashlight toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashState {
    On,
    Off,
    Unavailable,
}

/// Configuration for photo gallery initialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoGalleryConfig {
    /// Key the photo list is stored under
    pub storage_key: String,
    /// JPEG quality requested from the camera (0 to 100)
    pub capture_quality: u8,
    /// Intensity used when switching the flashlight on
    pub flash_intensity: f32,
    /// Origin the hybrid web view serves local files from
    pub display_origin: String,
}

impl Default for PhotoGalleryConfig {
    fn default() -> Self {
        Self {
            storage_key: "photos".to_string(),
            capture_quality: 100,
            flash_intensity: 1.0,
            display_origin: "http://localhost".to_string(),
        }
    }
}
