//! Unit tests for the wishlist database layer (connection + migrations).

use travel_wishlist::database::migrations::{get_schema_version, CURRENT_SCHEMA_VERSION};
use travel_wishlist::database::Database;

fn object_exists(db: &Database, kind: &str, name: &str) -> bool {
    db.connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = ?1 AND name = ?2",
            [kind, name],
            |row| row.get(0),
        )
        .unwrap_or(false)
}

#[test]
fn test_open_in_memory_succeeds() {
    assert!(Database::open_in_memory().is_ok());
}

#[test]
fn test_migrations_create_destinations_table() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    assert!(object_exists(&db, "table", "destinations"));
    assert!(object_exists(&db, "table", "schema_version"));
}

#[test]
fn test_migrations_create_lookup_indexes() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    for index in [
        "idx_destinations_date_added",
        "idx_destinations_name",
        "idx_destinations_visited",
    ] {
        assert!(object_exists(&db, "index", index), "Index '{}' should exist", index);
    }
}

#[test]
fn test_migrations_are_idempotent() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let result = travel_wishlist::database::migrations::run_all(db.connection());
    assert!(result.is_ok(), "Running migrations twice should succeed");
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_file_database_persists_across_reopen() {
    use travel_wishlist::managers::destination_manager::{
        DestinationManager, DestinationManagerTrait,
    };

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wishlist.db");

    {
        let db = Database::open(&path).expect("open with file path should succeed");
        DestinationManager::new(db.connection())
            .add("Marrakesh", None, None)
            .unwrap();
    }
    assert!(path.exists());

    let db = Database::open(&path).unwrap();
    let items = DestinationManager::new(db.connection()).list().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Marrakesh");
}

#[test]
fn test_open_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir").join("w.db");
    assert!(Database::open(&path).is_err());
}
