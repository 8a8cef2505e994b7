use thiserror::Error;

// === DestinationError ===

/// Errors raised by the destination store.
#[derive(Debug, Error)]
pub enum DestinationError {
    /// The underlying SQLite store could not be opened, read or written.
    #[error("Destination store unavailable: {0}")]
    StoreUnavailable(String),
    /// `update` was called with a record that has no id.
    #[error("Destination id is required")]
    MissingId,
    /// No destination exists with the given id.
    #[error("Destination not found: {0}")]
    NotFound(i64),
    /// The destination name is empty after trimming.
    #[error("Destination name cannot be empty")]
    EmptyName,
    /// A name lookup matched nothing.
    #[error("No destination named '{0}'")]
    NameNotFound(String),
    /// A name lookup matched more than one destination.
    #[error("'{0}' matches {1} destinations; use an id")]
    AmbiguousName(String, usize),
}

impl From<rusqlite::Error> for DestinationError {
    fn from(err: rusqlite::Error) -> Self {
        DestinationError::StoreUnavailable(err.to_string())
    }
}

impl DestinationError {
    /// Stable machine-readable code, used in RPC error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            DestinationError::StoreUnavailable(_) => "store_unavailable",
            DestinationError::MissingId => "missing_id",
            DestinationError::NotFound(_) => "not_found",
            DestinationError::EmptyName => "empty_name",
            DestinationError::NameNotFound(_) => "name_not_found",
            DestinationError::AmbiguousName(..) => "ambiguous_name",
        }
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

impl SettingsError {
    pub fn code(&self) -> &'static str {
        match self {
            SettingsError::IoError(_) => "settings_io",
            SettingsError::SerializationError(_) => "settings_serialization",
            SettingsError::InvalidKey(_) => "invalid_key",
            SettingsError::InvalidValue(_) => "invalid_value",
        }
    }
}

// === ViewError ===

/// Errors surfaced by the wishlist view and the application shell.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Destination(#[from] DestinationError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl ViewError {
    pub fn code(&self) -> &'static str {
        match self {
            ViewError::Destination(e) => e.code(),
            ViewError::Settings(e) => e.code(),
        }
    }
}
