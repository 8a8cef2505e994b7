//! Unit tests for the RPC handler: every JSON-RPC method dispatched by `handle_method`.
//!
//! These tests go through the same code path as the `wishlist-rpc` binary,
//! with an in-memory database and a temporary settings file.

use std::sync::Mutex;

use serde_json::json;
use tempfile::TempDir;

use travel_wishlist::app::App;
use travel_wishlist::database::Database;
use travel_wishlist::rpc_handler::handle_method;
use travel_wishlist::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

fn setup() -> (Mutex<App>, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = tmp.path().join("settings.json").to_string_lossy().to_string();
    let mut settings = SettingsEngine::new(Some(path));
    settings.load().unwrap();
    let app = App::with_database(Database::open_in_memory().unwrap(), settings)
        .expect("Failed to init App");
    (Mutex::new(app), tmp)
}

#[test]
fn test_ping() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "ping", &json!({})).unwrap();
    assert_eq!(res, json!({"pong": true}));
}

#[test]
fn test_unknown_method_returns_error() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "nonexistent.method", &json!({})).unwrap_err();
    assert_eq!(err.code, "unknown_method");
}

// ─── Destinations ───

#[test]
fn test_destination_add_and_list() {
    let (app, _tmp) = setup();

    let res = handle_method(&app, "destination.add", &json!({
        "name": " Kyoto ",
        "notes": "",
        "imageUrl": "  "
    }))
    .unwrap();
    assert_eq!(res["id"], 1);
    assert_eq!(res["name"], "Kyoto");
    assert_eq!(res["visited"], false);
    assert!(res.get("notes").is_none());
    assert!(res.get("imageUrl").is_none());

    let list = handle_method(&app, "destination.list", &json!({})).unwrap();
    let arr = list.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0], res);
    assert_eq!(app.lock().unwrap().view.items().len(), 1);
}

#[test]
fn test_destination_add_missing_or_blank_name() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "destination.add", &json!({})).unwrap_err();
    assert_eq!(err.code, "invalid_params");
    let err = handle_method(&app, "destination.add", &json!({"name": "  "})).unwrap_err();
    assert_eq!(err.code, "empty_name");
}

#[test]
fn test_destination_update_requires_id() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "destination.update", &json!({
        "destination": {"name": "Oslo", "dateAdded": "2026-01-01T00:00:00.000Z", "visited": false}
    }))
    .unwrap_err();
    assert_eq!(err.code, "missing_id");
}

#[test]
fn test_destination_update_replaces_record() {
    let (app, _tmp) = setup();
    let added = handle_method(&app, "destination.add", &json!({"name": "Oslo"})).unwrap();

    let mut edited = added.clone();
    edited["name"] = json!("Oslo, Norway");
    edited["notes"] = json!("Fjords");
    let saved = handle_method(&app, "destination.update", &json!({"destination": edited})).unwrap();
    assert_eq!(saved, edited);

    let got = handle_method(&app, "destination.get", &json!({"id": 1})).unwrap();
    assert_eq!(got, edited);
}

#[test]
fn test_destination_update_malformed_record() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "destination.update", &json!({"destination": {"id": "x"}}))
        .unwrap_err();
    assert_eq!(err.code, "invalid_params");
}

#[test]
fn test_destination_set_visited_and_filtered_list() {
    let (app, _tmp) = setup();
    handle_method(&app, "destination.add", &json!({"name": "Lima"})).unwrap();
    handle_method(&app, "destination.add", &json!({"name": "Cusco"})).unwrap();

    handle_method(&app, "destination.set_visited", &json!({"id": 2, "visited": true})).unwrap();

    let visited = handle_method(&app, "destination.list", &json!({"visited_only": true})).unwrap();
    assert_eq!(visited.as_array().unwrap().len(), 1);
    assert_eq!(visited[0]["name"], "Cusco");

    // Without an explicit param the session flag decides.
    handle_method(&app, "prefs.set_visited_only", &json!({"value": true})).unwrap();
    let list = handle_method(&app, "destination.list", &json!({})).unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);

    let all = handle_method(&app, "destination.list", &json!({"visited_only": false})).unwrap();
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[test]
fn test_destination_set_visited_not_found() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "destination.set_visited", &json!({"id": 9, "visited": true}))
        .unwrap_err();
    assert_eq!(err.code, "not_found");
    assert!(err.message.contains('9'));
}

#[test]
fn test_destination_delete_is_idempotent() {
    let (app, _tmp) = setup();
    handle_method(&app, "destination.add", &json!({"name": "Bali"})).unwrap();
    assert_eq!(
        handle_method(&app, "destination.delete", &json!({"id": 1})).unwrap(),
        json!({"ok": true})
    );
    assert_eq!(
        handle_method(&app, "destination.delete", &json!({"id": 1})).unwrap(),
        json!({"ok": true})
    );
    let list = handle_method(&app, "destination.list", &json!({})).unwrap();
    assert!(list.as_array().unwrap().is_empty());
}

#[test]
fn test_destination_get_unknown_is_null() {
    let (app, _tmp) = setup();
    let got = handle_method(&app, "destination.get", &json!({"id": 3})).unwrap();
    assert!(got.is_null());
    assert!(handle_method(&app, "destination.get", &json!({})).is_err());
}

#[test]
fn test_destination_find_by_name() {
    let (app, _tmp) = setup();
    handle_method(&app, "destination.add", &json!({"name": "Petra"})).unwrap();
    let found = handle_method(&app, "destination.find_by_name", &json!({"name": "Petra"})).unwrap();
    assert_eq!(found.as_array().unwrap().len(), 1);
}

// ─── Preferences ───

#[test]
fn test_prefs_theme_set_and_toggle() {
    let (app, _tmp) = setup();
    let prefs = handle_method(&app, "prefs.set_theme", &json!({"theme": "light"})).unwrap();
    assert_eq!(prefs["theme"], "light");
    assert_eq!(prefs["effective_theme"], "light");
    assert_eq!(prefs["css_variables"]["color-scheme"], "light");

    let prefs = handle_method(&app, "prefs.toggle_theme", &json!({})).unwrap();
    assert_eq!(prefs["theme"], "dark");

    let settings = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(settings["appearance"]["theme"], "Dark");
}

#[test]
fn test_prefs_set_theme_rejects_unknown() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "prefs.set_theme", &json!({"theme": "sepia"})).unwrap_err();
    assert_eq!(err.code, "invalid_params");
}

#[test]
fn test_prefs_get_defaults() {
    let (app, _tmp) = setup();
    let prefs = handle_method(&app, "prefs.get", &json!({})).unwrap();
    assert_eq!(prefs["theme"], "system");
    assert_eq!(prefs["visited_only"], false);
}

// ─── Settings ───

#[test]
fn test_settings_set_syncs_theme_engine() {
    let (app, _tmp) = setup();
    handle_method(&app, "settings.set", &json!({"key": "appearance.theme", "value": "Dark"})).unwrap();
    let prefs = handle_method(&app, "prefs.get", &json!({})).unwrap();
    assert_eq!(prefs["theme"], "dark");
}

#[test]
fn test_settings_set_invalid_key() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "settings.set", &json!({"key": "nope", "value": 1})).unwrap_err();
    assert_eq!(err.code, "invalid_key");
    let err = handle_method(&app, "settings.set", &json!({"key": "appearance.theme"})).unwrap_err();
    assert_eq!(err.code, "invalid_params");
}
