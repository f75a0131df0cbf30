use std::path::{Path, PathBuf};

/// Default app data directory on desktop
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Get the app data directory used when nothing is configured
pub fn get_app_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Default location of the configuration file
pub fn default_config_path() -> PathBuf {
    get_app_data_dir().join("gallery.toml")
}

/// Root of the photo file store
pub fn files_root(data_dir: &Path) -> PathBuf {
    data_dir.join("files")
}

/// Where imported camera captures are staged before being saved
pub fn capture_dir(data_dir: &Path) -> PathBuf {
    files_root(data_dir).join(photo_gallery::Directory::Cache.dir_name())
}

/// JSON file backing the key-value store
pub fn preferences_path(data_dir: &Path) -> PathBuf {
    data_dir.join("preferences.json")
}
