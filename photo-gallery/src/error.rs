/// Error type for photo gallery operations
#[derive(Debug)]
pub enum PhotoGalleryError {
    /// Camera capture failed (permission denied, cancelled, ...)
    Camera(String),
    /// File store read/write failed
    Storage(String),
    /// Key-value store failed
    Preferences(String),
    /// Fetching a web resource failed
    Fetch(String),
    /// Flashlight control failed
    Flash(String),
    /// The stored photo list is not valid JSON
    Decode(serde_json::Error),
    Base64(base64::DecodeError),
    Io(std::io::Error),
    /// The captured photo lacks the path the platform needs
    MissingPhotoPath(&'static str),
    Other(String),
}

impl std::fmt::Display for PhotoGalleryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhotoGalleryError::Camera(msg) => write!(f, "Camera error: {}", msg),
            PhotoGalleryError::Storage(msg) => write!(f, "Storage error: {}", msg),
            PhotoGalleryError::Preferences(msg) => write!(f, "Preferences error: {}", msg),
            PhotoGalleryError::Fetch(msg) => write!(f, "Fetch error: {}", msg),
            PhotoGalleryError::Flash(msg) => write!(f, "Flashlight error: {}", msg),
            PhotoGalleryError::Decode(e) => write!(f, "Decode error: {}", e),
            PhotoGalleryError::Base64(e) => write!(f, "Base64 error: {}", e),
            PhotoGalleryError::Io(e) => write!(f, "IO error: {}", e),
            PhotoGalleryError::MissingPhotoPath(which) => {
                write!(f, "Captured photo has no {}", which)
            }
            PhotoGalleryError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PhotoGalleryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PhotoGalleryError::Decode(e) => Some(e),
            PhotoGalleryError::Base64(e) => Some(e),
            PhotoGalleryError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PhotoGalleryError {
    fn from(err: serde_json::Error) -> Self {
        PhotoGalleryError::Decode(err)
    }
}

impl From<base64::DecodeError> for PhotoGalleryError {
    fn from(err: base64::DecodeError) -> Self {
        PhotoGalleryError::Base64(err)
    }
}

impl From<std::io::Error> for PhotoGalleryError {
    fn from(err: std::io::Error) -> Self {
        PhotoGalleryError::Io(err)
    }
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for PhotoGalleryError {
    fn from(err: reqwest::Error) -> Self {
        PhotoGalleryError::Fetch(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PhotoGalleryError>;
