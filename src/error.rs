use std::fmt;

/// Central error types for the gallery app
#[derive(Debug)]
pub enum AppError {
    /// Error from the photo gallery (camera, storage, preferences, ...)
    Gallery(photo_gallery::PhotoGalleryError),
    /// Filesystem error
    Filesystem(std::io::Error),
    /// Invalid or unreadable configuration
    Config(String),
    /// General error
    #[allow(dead_code)]
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Gallery(e) => write!(f, "Gallery error: {}", e),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<photo_gallery::PhotoGalleryError> for AppError {
    fn from(e: photo_gallery::PhotoGalleryError) -> Self {
        AppError::Gallery(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

/// User-friendly error messages for the terminal
impl AppError {
    pub fn user_message(&self) -> String {
        use photo_gallery::PhotoGalleryError;

        match self {
            AppError::Gallery(PhotoGalleryError::Camera(msg)) => {
                format!("Could not take a photo: {}", msg)
            }
            AppError::Gallery(PhotoGalleryError::Decode(_)) => {
                "The saved photo list is damaged.".to_string()
            }
            AppError::Gallery(_) => "Error accessing photos. Please try again.".to_string(),
            AppError::Filesystem(_) => {
                "Error accessing files. Please check app permissions.".to_string()
            }
            AppError::Config(msg) => format!("Invalid configuration: {}", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }
}
