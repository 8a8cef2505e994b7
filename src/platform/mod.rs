// Travel wishlist platform abstraction
// Resolves where settings and the destination database live on each OS.
//
// `WISHLIST_CONFIG_DIR` and `WISHLIST_DATA_DIR` override the platform defaults.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as os;
#[cfg(target_os = "macos")]
use macos as os;
#[cfg(target_os = "windows")]
use windows as os;

/// File name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// File name of the SQLite database inside the data directory.
pub const DATABASE_FILE: &str = "wishlist.db";

/// Returns the configuration directory.
///
/// - **Linux**: `$XDG_CONFIG_HOME/travel-wishlist` or `~/.config/travel-wishlist`
/// - **macOS**: `~/Library/Application Support/TravelWishlist`
/// - **Windows**: `%APPDATA%/TravelWishlist`
pub fn get_config_dir() -> PathBuf {
    match env::var("WISHLIST_CONFIG_DIR") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => os::config_dir(),
    }
}

/// Returns the data directory holding the destination database.
///
/// - **Linux**: `$XDG_DATA_HOME/travel-wishlist` or `~/.local/share/travel-wishlist`
/// - **macOS**: `~/Library/Application Support/TravelWishlist`
/// - **Windows**: `%LOCALAPPDATA%/TravelWishlist`
pub fn get_data_dir() -> PathBuf {
    match env::var("WISHLIST_DATA_DIR") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => os::data_dir(),
    }
}

/// Default settings file path.
pub fn default_settings_path() -> PathBuf {
    get_config_dir().join(SETTINGS_FILE)
}

/// Default database file path.
pub fn default_database_path() -> PathBuf {
    get_data_dir().join(DATABASE_FILE)
}
