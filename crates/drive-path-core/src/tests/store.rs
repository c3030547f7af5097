use crate::{
    JsonFileStore, MarkerStyle, PathStore, PersistentStore, Pin, TrackError,
    tests::{coords, loc},
};

use tempfile::TempDir;

/// WHAT: A missing store file opens as an empty store
/// WHY: First launch has no data yet
#[test]
fn given_missing_file_when_opening_then_empty_store() {
    // Given: A directory without a store file
    let temp = TempDir::new().unwrap();

    // When: Opening
    let store = JsonFileStore::open(temp.path().join("paths.json")).unwrap();

    // Then: Empty
    assert!(store.fetch_pins().unwrap().is_empty());
    assert!(store.fetch_paths().unwrap().is_empty());
}

/// WHAT: Recordings survive closing and reopening the store
/// WHY: The JSON store is the durable copy of pins and paths
#[test]
fn given_saved_recording_when_reopening_then_contents_restored() {
    // Given: A recording written through a path store
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("nested").join("paths.json");
    {
        let mut store = PathStore::new(JsonFileStore::open(&file).unwrap(), MarkerStyle::Tag);
        store.on_recording_start(loc(37.0, 127.0)).unwrap();
        store
            .on_recording_stop(&[loc(37.0, 127.0), loc(37.05, 127.05), loc(37.1, 127.1)])
            .unwrap();
    }

    // When: Reopening and loading
    let mut store = PathStore::new(JsonFileStore::open(&file).unwrap(), MarkerStyle::Tag);
    store.load_all().unwrap();

    // Then: Everything is back
    assert_eq!(store.pins().len(), 2);
    assert_eq!(store.paths().len(), 1);
    assert_eq!(
        coords(store.paths()[0].coordinates()),
        vec![(37.0, 127.0), (37.05, 127.05), (37.1, 127.1)]
    );
    assert_eq!(store.next_pin_id(), 3);
    assert!(!temp.path().join("nested").join("paths.json.tmp").exists());
}

/// WHAT: Staged changes are invisible until saved and dropped by discard
/// WHY: Mutations commit as a unit
#[test]
fn given_staged_insert_when_discarding_then_nothing_committed() {
    // Given: A store with a staged pin
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("paths.json");
    let mut store = JsonFileStore::open(&file).unwrap();
    let pin = Pin::new(1, "Home", loc(37.0, 127.0), MarkerStyle::Tag.start_marker());
    store.insert_pin(&pin).unwrap();

    // When: Discarding before saving
    assert!(store.fetch_pins().unwrap().is_empty());
    store.discard();
    store.save().unwrap();

    // Then: Nothing was written
    let reopened = JsonFileStore::open(&file).unwrap();
    assert!(reopened.fetch_pins().unwrap().is_empty());
}

/// WHAT: Inserting a duplicate id fails
/// WHY: Ids are unique per collection
#[test]
fn given_existing_pin_when_inserting_same_id_then_persistence_failure() {
    // Given: A store with pin 1 committed
    let temp = TempDir::new().unwrap();
    let mut store = JsonFileStore::open(temp.path().join("paths.json")).unwrap();
    let pin = Pin::new(1, "Home", loc(37.0, 127.0), MarkerStyle::Tag.start_marker());
    store.insert_pin(&pin).unwrap();
    store.save().unwrap();

    // When: Inserting id 1 again
    let result = store.insert_pin(&pin);

    // Then: Rejected
    assert!(matches!(result, Err(TrackError::PersistenceFailure { .. })));
}

/// WHAT: Deleting an unknown id fails
/// WHY: A delete of something absent means memory and store diverged
#[test]
fn given_empty_store_when_deleting_then_persistence_failure() {
    // Given: An empty store
    let temp = TempDir::new().unwrap();
    let mut store = JsonFileStore::open(temp.path().join("paths.json")).unwrap();

    // When: Deleting
    let result = store.delete_path(7);

    // Then: Rejected
    assert!(matches!(result, Err(TrackError::PersistenceFailure { .. })));
}

/// WHAT: A corrupt file is reported as a persistence failure
/// WHY: Unreadable stores must not be silently replaced
#[test]
fn given_corrupt_file_when_opening_then_persistence_failure() {
    // Given: A store file with garbage
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("paths.json");
    std::fs::write(&file, "{ not json").unwrap();

    // When: Opening
    let result = JsonFileStore::open(&file);

    // Then: PersistenceFailure
    assert!(matches!(result, Err(TrackError::PersistenceFailure { .. })));
}

/// WHAT: A store from a newer schema version is refused
/// WHY: Rewriting it would drop fields this version does not know
#[test]
fn given_newer_version_when_opening_then_persistence_failure() {
    // Given: A document with a future version
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("paths.json");
    std::fs::write(&file, r#"{ "version": 99, "pins": [], "paths": [] }"#).unwrap();

    // When: Opening
    let result = JsonFileStore::open(&file);

    // Then: PersistenceFailure
    assert!(matches!(result, Err(TrackError::PersistenceFailure { .. })));
}

/// WHAT: Paths come back ordered by creation time
/// WHY: Reload order must be stable regardless of insertion order
#[test]
fn given_paths_inserted_out_of_order_when_fetching_then_sorted_by_creation() {
    // Given: A document listing the newer path first
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("paths.json");
    std::fs::write(
        &file,
        r#"{
            "version": 1,
            "pins": [],
            "paths": [
                {
                    "id": 2, "name": "Later",
                    "start": { "latitude": 1.0, "longitude": 1.0 },
                    "end": { "latitude": 2.0, "longitude": 2.0 },
                    "waypoints": [
                        { "latitude": 1.0, "longitude": 1.0 },
                        { "latitude": 2.0, "longitude": 2.0 }
                    ],
                    "coordinates": [],
                    "created_at": "2025-03-05T10:00:00Z",
                    "origin": "planned"
                },
                {
                    "id": 1, "name": "Earlier",
                    "start": { "latitude": 1.0, "longitude": 1.0 },
                    "end": { "latitude": 2.0, "longitude": 2.0 },
                    "waypoints": [
                        { "latitude": 1.0, "longitude": 1.0 },
                        { "latitude": 2.0, "longitude": 2.0 }
                    ],
                    "coordinates": [],
                    "created_at": "2025-03-04T10:00:00Z",
                    "origin": "planned"
                }
            ]
        }"#,
    )
    .unwrap();

    // When: Fetching
    let paths = JsonFileStore::open(&file).unwrap().fetch_paths().unwrap();

    // Then: Oldest first
    let names: Vec<_> = paths.iter().map(|p| p.name().to_string()).collect();
    assert_eq!(names, vec!["Earlier", "Later"]);
}

const VALID_PIN: &str = r##"{ "id": 1, "name": "Cafe",
    "location": { "latitude": 37.0, "longitude": 127.0 },
    "marker": { "color": "#A2845E" } }"##;

/// Store file holding `pins` and `paths` as raw JSON arrays.
fn write_document(temp: &TempDir, pins: &str, paths: &str) -> std::path::PathBuf {
    let file = temp.path().join("paths.json");
    std::fs::write(
        &file,
        format!(r#"{{ "version": 1, "pins": [{pins}], "paths": [{paths}] }}"#),
    )
    .unwrap();
    file
}

/// WHAT: A stored coordinate outside the valid ranges is refused
/// WHY: Loaded locations must satisfy the same checks as new ones
#[test]
fn given_out_of_range_coordinate_when_opening_then_persistence_failure() {
    // Given: A pin at latitude 999
    let temp = TempDir::new().unwrap();
    let file = write_document(
        &temp,
        r##"{ "id": 1, "name": "Nowhere",
            "location": { "latitude": 999.0, "longitude": -500.0 },
            "marker": { "color": "#FFFFFF" } }"##,
        "",
    );

    // When: Opening
    let result = JsonFileStore::open(&file);

    // Then: PersistenceFailure
    assert!(matches!(result, Err(TrackError::PersistenceFailure { .. })));
}

/// WHAT: A stored path with fewer than two waypoints is refused
/// WHY: Every path has a distinct start and end waypoint
#[test]
fn given_path_without_waypoints_when_opening_then_persistence_failure() {
    // Given: A path whose waypoint list is empty
    let temp = TempDir::new().unwrap();
    let file = write_document(
        &temp,
        VALID_PIN,
        r#"{ "id": 1, "name": "Path 1",
            "start": { "latitude": 37.0, "longitude": 127.0 },
            "end": { "latitude": 37.1, "longitude": 127.1 },
            "waypoints": [], "coordinates": [] }"#,
    );

    // When: Opening
    let result = JsonFileStore::open(&file);

    // Then: PersistenceFailure
    assert!(matches!(result, Err(TrackError::PersistenceFailure { .. })));
}

/// WHAT: Two stored pins sharing an id are refused
/// WHY: Ids must be unique for undo and counters to stay correct
#[test]
fn given_duplicate_pin_id_when_opening_then_persistence_failure() {
    // Given: The same pin stored twice
    let temp = TempDir::new().unwrap();
    let file = write_document(&temp, &format!("{VALID_PIN}, {VALID_PIN}"), "");

    // When: Opening
    let result = JsonFileStore::open(&file);

    // Then: PersistenceFailure
    assert!(matches!(result, Err(TrackError::PersistenceFailure { .. })));
}

/// WHAT: A hand-written valid document loads with defaults filled in
/// WHY: Validation must not reject well-formed stores
#[test]
fn given_valid_minimal_document_when_loading_then_contents_available() {
    // Given: One pin and one legacy path without timestamps or origin
    let temp = TempDir::new().unwrap();
    let file = write_document(
        &temp,
        VALID_PIN,
        r#"{ "id": 1, "name": "Path 1",
            "start": { "latitude": 37.0, "longitude": 127.0 },
            "end": { "latitude": 37.1, "longitude": 127.1 },
            "waypoints": [
                { "latitude": 37.0, "longitude": 127.0 },
                { "latitude": 37.1, "longitude": 127.1 }
            ],
            "coordinates": [] }"#,
    );

    // When: Opening and loading
    let mut store = PathStore::new(JsonFileStore::open(&file).unwrap(), MarkerStyle::Tag);
    store.load_all().unwrap();

    // Then: Both records are present
    assert_eq!(store.pins().len(), 1);
    assert_eq!(store.paths().len(), 1);
    assert!(store.paths()[0].pins().is_none());
    assert_eq!(store.next_pin_id(), 2);
}
