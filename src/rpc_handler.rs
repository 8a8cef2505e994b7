//! RPC method handler for the wishlist JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches a method call to the destination store and the
//! preference objects held by `App`. Every failure comes back as an
//! [`RpcError`] with a stable `code`.

use std::sync::Mutex;

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::app::App;
use crate::managers::destination_manager::{DestinationManager, DestinationManagerTrait};
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::theme_engine::ThemeEngineTrait;
use crate::types::destination::Destination;
use crate::types::errors::{DestinationError, SettingsError, ViewError};
use crate::types::settings::ThemeMode;

/// Error payload returned in place of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{code}: {message}")]
pub struct RpcError {
    pub code: String,
    pub message: String,
}

impl RpcError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new("invalid_params", message)
    }
}

impl From<DestinationError> for RpcError {
    fn from(err: DestinationError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

impl From<SettingsError> for RpcError {
    fn from(err: SettingsError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

impl From<ViewError> for RpcError {
    fn from(err: ViewError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

fn param_str<'a>(params: &'a Value, key: &str) -> Option<&'a str> {
    params.get(key).and_then(|v| v.as_str())
}

fn require_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, RpcError> {
    param_str(params, key).ok_or_else(|| RpcError::invalid_params(format!("missing {}", key)))
}

fn require_id(params: &Value) -> Result<i64, RpcError> {
    params
        .get("id")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| RpcError::invalid_params("missing id"))
}

fn require_bool(params: &Value, key: &str) -> Result<bool, RpcError> {
    params
        .get(key)
        .and_then(|v| v.as_bool())
        .ok_or_else(|| RpcError::invalid_params(format!("missing {}", key)))
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, RpcError> {
    serde_json::to_value(value).map_err(|e| RpcError::new("serialization", e.to_string()))
}

fn prefs_json(app: &App) -> Value {
    json!({
        "theme": app.theme_engine.get_theme().as_str(),
        "effective_theme": app.theme_engine.effective_theme().as_str(),
        "visited_only": app.visited_only(),
        "css_variables": app.theme_engine.get_css_variables(),
    })
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, RpcError> {
    let mut a = app
        .lock()
        .map_err(|e| RpcError::new("internal", e.to_string()))?;

    match method {
        // ─── Destinations ───
        "destination.add" => {
            let name = require_str(params, "name")?;
            let notes = param_str(params, "notes");
            let image_url = param_str(params, "imageUrl").or_else(|| param_str(params, "image_url"));
            let item = DestinationManager::new(a.db.connection()).add(name, notes, image_url)?;
            a.refresh()?;
            to_json(&item)
        }
        "destination.list" => {
            let visited_only = match params.get("visited_only").and_then(|v| v.as_bool()) {
                Some(v) => v,
                None => a.visited_only(),
            };
            let mgr = DestinationManager::new(a.db.connection());
            let items = if visited_only { mgr.list_visited(true)? } else { mgr.list()? };
            to_json(&items)
        }
        "destination.get" => {
            let id = require_id(params)?;
            let found = DestinationManager::new(a.db.connection()).get(id)?;
            to_json(&found)
        }
        "destination.find_by_name" => {
            let name = require_str(params, "name")?;
            let items = DestinationManager::new(a.db.connection()).find_by_name(name)?;
            to_json(&items)
        }
        "destination.update" => {
            let raw = params.get("destination").unwrap_or(params).clone();
            let record: Destination = serde_json::from_value(raw)
                .map_err(|e| RpcError::invalid_params(format!("invalid destination: {}", e)))?;
            let saved = DestinationManager::new(a.db.connection()).update(record)?;
            a.refresh()?;
            to_json(&saved)
        }
        "destination.delete" => {
            let id = require_id(params)?;
            a.delete(id)?;
            Ok(json!({"ok": true}))
        }
        "destination.set_visited" => {
            let id = require_id(params)?;
            let visited = require_bool(params, "visited")?;
            a.toggle_visited(id, visited)?;
            Ok(json!({"ok": true}))
        }

        // ─── Preferences ───
        "prefs.get" => Ok(prefs_json(&a)),
        "prefs.set_theme" => {
            let raw = require_str(params, "theme")?;
            let mode = ThemeMode::parse(raw)
                .ok_or_else(|| RpcError::invalid_params(format!("unknown theme: {}", raw)))?;
            a.set_theme(mode)?;
            Ok(prefs_json(&a))
        }
        "prefs.toggle_theme" => {
            a.toggle_theme()?;
            Ok(prefs_json(&a))
        }
        "prefs.set_visited_only" => {
            let value = require_bool(params, "value")?;
            a.set_visited_only(value);
            Ok(prefs_json(&a))
        }

        // ─── Settings ───
        "settings.get" => to_json(a.settings_engine.get_settings()),
        "settings.set" => {
            let key = require_str(params, "key")?;
            let value = params
                .get("value")
                .cloned()
                .ok_or_else(|| RpcError::invalid_params("missing value"))?;
            a.settings_engine.set_value(key, value)?;
            let theme = a.settings_engine.get_settings().appearance.theme;
            a.theme_engine.set_theme(theme);
            Ok(json!({"ok": true}))
        }

        "ping" => Ok(json!({"pong": true})),

        _ => Err(RpcError::new("unknown_method", format!("unknown method: {}", method))),
    }
}
