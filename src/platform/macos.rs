// Travel wishlist paths for macOS
// Config and data: ~/Library/Application Support/TravelWishlist

use std::env;
use std::path::PathBuf;

fn app_support_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
        .join("Library")
        .join("Application Support")
        .join("TravelWishlist")
}

pub fn config_dir() -> PathBuf {
    app_support_dir()
}

pub fn data_dir() -> PathBuf {
    app_support_dir()
}
