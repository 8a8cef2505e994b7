// Travel wishlist paths for Windows
// Config: %APPDATA%/TravelWishlist
// Data:   %LOCALAPPDATA%/TravelWishlist

use std::env;
use std::path::PathBuf;

pub fn config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("TravelWishlist")
}

pub fn data_dir() -> PathBuf {
    let local_appdata = env::var("LOCALAPPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local"));
    PathBuf::from(local_appdata).join("TravelWishlist")
}
