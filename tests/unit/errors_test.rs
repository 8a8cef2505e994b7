use travel_wishlist::types::errors::*;

// === DestinationError Tests ===

#[test]
fn destination_error_display_variants() {
    assert_eq!(
        DestinationError::StoreUnavailable("disk I/O error".to_string()).to_string(),
        "Destination store unavailable: disk I/O error"
    );
    assert_eq!(DestinationError::MissingId.to_string(), "Destination id is required");
    assert_eq!(DestinationError::NotFound(7).to_string(), "Destination not found: 7");
    assert_eq!(DestinationError::EmptyName.to_string(), "Destination name cannot be empty");
}

#[test]
fn destination_error_codes() {
    assert_eq!(DestinationError::StoreUnavailable(String::new()).code(), "store_unavailable");
    assert_eq!(DestinationError::MissingId.code(), "missing_id");
    assert_eq!(DestinationError::NotFound(1).code(), "not_found");
    assert_eq!(DestinationError::EmptyName.code(), "empty_name");
    assert_eq!(DestinationError::NameNotFound("x".into()).code(), "name_not_found");
    assert_eq!(DestinationError::AmbiguousName("x".into(), 2).code(), "ambiguous_name");
}

#[test]
fn destination_error_from_rusqlite_is_store_unavailable() {
    let err: DestinationError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, DestinationError::StoreUnavailable(_)));
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("permission denied".to_string()).to_string(),
        "Settings I/O error: permission denied"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("x.y".to_string()).to_string(),
        "Invalid settings key: x.y"
    );
    assert_eq!(
        SettingsError::InvalidValue("nope".to_string()).to_string(),
        "Invalid settings value: nope"
    );
}

// === ViewError Tests ===

#[test]
fn view_error_is_transparent() {
    let err: ViewError = DestinationError::NotFound(3).into();
    assert_eq!(err.to_string(), "Destination not found: 3");
    assert_eq!(err.code(), "not_found");

    let err: ViewError = SettingsError::InvalidKey("k".to_string()).into();
    assert_eq!(err.to_string(), "Invalid settings key: k");
    assert_eq!(err.code(), "invalid_key");
}

#[test]
fn errors_implement_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(DestinationError::MissingId);
    assert!(err.source().is_none());
}
