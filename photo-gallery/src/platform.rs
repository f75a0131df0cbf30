use serde::{Deserialize, Serialize};

/// Path prefix the hybrid web view serves local files under
pub const FILE_SERVER_PATH: &str = "/_capacitor_file_";

/// Runtime the gallery is running in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Web content inside a native shell with device APIs
    #[default]
    Hybrid,
    /// Plain browser
    Web,
}

/// Answers which kind of platform the app runs on
pub trait PlatformInfo {
    fn is_hybrid(&self) -> bool;

    fn platform(&self) -> Platform {
        if self.is_hybrid() {
            Platform::Hybrid
        } else {
            Platform::Web
        }
    }
}

impl PlatformInfo for Platform {
    fn is_hybrid(&self) -> bool {
        matches!(self, Platform::Hybrid)
    }
}

/// Rewrite a storage URI into one the hybrid web view can load
///
/// `file:///a/b.jpeg` becomes `<origin>/_capacitor_file_/a/b.jpeg`. Bare absolute
/// paths are handled the same way, everything else is returned unchanged.
pub fn convert_file_src(uri: &str, origin: &str) -> String {
    let path = if let Some(rest) = uri.strip_prefix("file://") {
        rest
    } else if uri.starts_with('/') {
        uri
    } else {
        return uri.to_string();
    };

    format!(
        "{}{}{}",
        origin.trim_end_matches('/'),
        FILE_SERVER_PATH,
        path
    )
}
