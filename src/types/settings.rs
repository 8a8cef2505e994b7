use serde::{Deserialize, Serialize};

/// Top-level wishlist settings container, persisted across sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WishlistSettings {
    #[serde(default)]
    pub appearance: AppearanceSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Appearance and visual settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppearanceSettings {
    pub theme: ThemeMode,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
        }
    }
}

/// Theme mode selection. `System` defers to the desktop preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
    System,
}

impl ThemeMode {
    /// Lowercase name, as shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
            ThemeMode::System => "system",
        }
    }

    /// Parses a case-insensitive theme name.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }
}

/// Where the destination database lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StorageSettings {
    /// Explicit database file path. `None` uses the platform data directory.
    pub database_path: Option<String>,
}

/// Log filter used when `RUST_LOG` is not set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
