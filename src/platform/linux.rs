// Travel wishlist paths for Linux
// Config: ~/.config/travel-wishlist
// Data:   ~/.local/share/travel-wishlist

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "travel-wishlist";

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// `$XDG_CONFIG_HOME/travel-wishlist` if set, otherwise `~/.config/travel-wishlist`.
pub fn config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR),
        _ => home_dir().join(".config").join(APP_DIR),
    }
}

/// `$XDG_DATA_HOME/travel-wishlist` if set, otherwise `~/.local/share/travel-wishlist`.
pub fn data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR),
        _ => home_dir().join(".local").join("share").join(APP_DIR),
    }
}
