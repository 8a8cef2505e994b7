//! App Core for the travel wishlist.
//!
//! Owns the database, the view state and the injected preference objects:
//! persistent settings (theme) and session-scoped flags (visited-only filter).

use std::path::{Path, PathBuf};

use crate::database::connection::Database;
use crate::managers::destination_manager::{DestinationManager, DestinationManagerTrait};
use crate::managers::wishlist_view::{SubmitOutcome, WishlistView};
use crate::platform;
use crate::services::session_flags::{SessionFlags, FILTER_VISITED_ONLY};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::types::destination::Destination;
use crate::types::errors::{DestinationError, ViewError};
use crate::types::settings::ThemeMode;

pub struct App {
    pub db: Database,
    pub settings_engine: SettingsEngine,
    pub theme_engine: ThemeEngine,
    pub session_flags: SessionFlags,
    pub view: WishlistView,
}

impl App {
    /// Opens the app with settings from `config_path` (or the platform default)
    /// and the database at `db_override`, the configured path, or the platform default.
    pub fn open(config_path: Option<String>, db_override: Option<PathBuf>) -> Result<Self, ViewError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        let settings = settings_engine.load()?;

        let db_path = db_override
            .or_else(|| settings.storage.database_path.map(PathBuf::from))
            .unwrap_or_else(platform::default_database_path);

        Self::with_database(open_database(&db_path)?, settings_engine)
    }

    /// Builds the app around an already-open database and loaded settings.
    pub fn with_database(db: Database, settings_engine: SettingsEngine) -> Result<Self, ViewError> {
        let theme_engine = ThemeEngine::new(settings_engine.get_settings().appearance.theme);
        let mut app = Self {
            db,
            settings_engine,
            theme_engine,
            session_flags: SessionFlags::new(),
            view: WishlistView::new(),
        };
        app.refresh()?;
        Ok(app)
    }

    pub fn refresh(&mut self) -> Result<(), ViewError> {
        self.view.refresh(self.db.connection())
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome, ViewError> {
        self.view.submit(self.db.connection())
    }

    pub fn delete(&mut self, id: i64) -> Result<(), ViewError> {
        self.view.delete(self.db.connection(), id)
    }

    pub fn toggle_visited(&mut self, id: i64, visited: bool) -> Result<(), ViewError> {
        self.view.toggle_visited(self.db.connection(), id, visited)
    }

    pub fn visited_only(&self) -> bool {
        self.session_flags.get(FILTER_VISITED_ONLY, false)
    }

    pub fn set_visited_only(&mut self, value: bool) {
        self.session_flags.set(FILTER_VISITED_ONLY, value);
    }

    /// Resolves a unique exact name, or failing that a numeric id, to an id.
    pub fn resolve_target(&self, target: &str) -> Result<i64, DestinationError> {
        let matches = DestinationManager::new(self.db.connection()).find_by_name(target)?;
        match matches.as_slice() {
            [only] => only.id.ok_or(DestinationError::MissingId),
            [] => target
                .trim()
                .parse::<i64>()
                .map_err(|_| DestinationError::NameNotFound(target.trim().to_string())),
            many => Err(DestinationError::AmbiguousName(target.trim().to_string(), many.len())),
        }
    }

    /// Items shown under the current visited-only filter.
    pub fn visible_items(&self) -> Vec<&Destination> {
        self.view.filtered(self.visited_only())
    }

    /// Applies and persists `mode`.
    pub fn set_theme(&mut self, mode: ThemeMode) -> Result<(), ViewError> {
        self.theme_engine.set_theme(mode);
        let mut settings = self.settings_engine.get_settings().clone();
        settings.appearance.theme = mode;
        self.settings_engine.replace(settings)?;
        tracing::info!(theme = mode.as_str(), "theme changed");
        Ok(())
    }

    /// Flips the effective theme, persists it and returns the new mode.
    pub fn toggle_theme(&mut self) -> Result<ThemeMode, ViewError> {
        let next = self.theme_engine.toggle();
        self.set_theme(next)?;
        Ok(next)
    }
}

/// Opens the database file, creating its directory first.
pub fn open_database(path: &Path) -> Result<Database, DestinationError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| DestinationError::StoreUnavailable(format!("{}: {}", parent.display(), e)))?;
    }
    Ok(Database::open(path)?)
}
