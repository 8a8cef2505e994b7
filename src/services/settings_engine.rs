// Travel wishlist Settings Engine
// Loads, saves and updates the persistent preferences (theme, storage, logging).
// Settings are stored as a JSON file at the platform-specific config path.

use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::WishlistSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<WishlistSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &WishlistSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: WishlistSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// `path_override` replaces the default `<config dir>/settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            platform::default_settings_path()
                .to_string_lossy()
                .to_string()
        });

        Self {
            config_path,
            settings: WishlistSettings::default(),
        }
    }

    /// Replaces the in-memory settings and writes them to disk.
    pub fn replace(&mut self, settings: WishlistSettings) -> Result<(), SettingsError> {
        self.settings = settings;
        self.save()
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// A missing file yields the defaults; a malformed one is a serialization error.
    fn load(&mut self) -> Result<WishlistSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.settings = WishlistSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: WishlistSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

        tracing::debug!(path = %self.config_path, "loaded settings");
        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings, creating parent directories as needed.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    fn get_settings(&self) -> &WishlistSettings {
        &self.settings
    }

    /// Updates an individual setting by dot-notation key path and saves.
    ///
    /// # Examples
    /// - `"appearance.theme"` → updates `settings.appearance.theme`
    /// - `"storage.database_path"` → updates `settings.storage.database_path`
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let parts: Vec<&str> = key.split('.').collect();

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        {
            let (last, parents) = parts
                .split_last()
                .ok_or_else(|| SettingsError::InvalidKey("Key cannot be empty".to_string()))?;

            let mut current = &mut json_value;
            for part in parents {
                current = current.get_mut(*part).ok_or_else(|| {
                    SettingsError::InvalidKey(format!("Key '{}' not found in settings", key))
                })?;
            }

            match current {
                serde_json::Value::Object(map) if map.contains_key(*last) => {
                    map.insert(last.to_string(), value);
                }
                serde_json::Value::Object(_) => {
                    return Err(SettingsError::InvalidKey(format!(
                        "Key '{}' not found in settings",
                        key
                    )));
                }
                _ => {
                    return Err(SettingsError::InvalidKey(format!(
                        "Cannot navigate to key '{}': intermediate value is not an object",
                        key
                    )));
                }
            }
        }

        // Deserializing back validates the new value's type
        let new_settings: WishlistSettings = serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;

        self.settings = new_settings;
        self.save()?;
        tracing::debug!(key, "updated setting");

        Ok(())
    }

    /// Resets all settings to defaults and saves to disk.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = WishlistSettings::default();
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
