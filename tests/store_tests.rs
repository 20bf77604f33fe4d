//! Tests for CatalogStore
//!
//! These tests verify:
//! - Schema creation and idempotence
//! - Insert then list, across store handles
//! - Id assignment
//! - Tolerance of empty, null and malformed tag blobs
//! - Storage failures surface as errors

use std::fs;

use parcel_catalog::dataset::{Dataset, Tags};
use parcel_catalog::store::CatalogStore;
use rusqlite::{params, Connection};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, CatalogStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = CatalogStore::new(temp_dir.path().join("parcel.db"));
    store.ensure_schema().unwrap();
    (temp_dir, store)
}

fn sample_dataset(name: &str) -> Dataset {
    let mut tags = Tags::new();
    tags.insert("doi".to_string(), "10.1/x".to_string());

    Dataset {
        id: 0,
        name: name.to_string(),
        creator: "Lab X".to_string(),
        description: "A description".to_string(),
        url: "irods://example/data".to_string(),
        host: "CyVerse".to_string(),
        rights: "CC-BY".to_string(),
        tags,
    }
}

fn insert_raw_tags(store: &CatalogStore, name: &str, tags: Option<&str>) {
    let conn = Connection::open(store.path()).unwrap();
    conn.execute(
        "INSERT INTO dataset (name, creator, description, url, host, rights, tags) VALUES (?1, '', '', '', '', '', ?2)",
        params![name, tags],
    )
    .unwrap();
}

// =============================================================================
// Schema Tests
// =============================================================================

#[test]
fn test_ensure_schema_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("parcel.db");
    let store = CatalogStore::new(&path);

    assert!(!path.exists());
    assert!(store.ensure_schema().unwrap());
    assert!(path.exists());
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_ensure_schema_is_idempotent() {
    let (_temp, store) = setup_temp_store();

    let mut ds = sample_dataset("kept");
    store.insert(&mut ds).unwrap();

    assert!(!store.ensure_schema().unwrap());
    assert!(!store.ensure_schema().unwrap());

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "kept");
}

#[test]
fn test_ensure_schema_fails_when_directory_missing() {
    let temp_dir = TempDir::new().unwrap();
    let store = CatalogStore::new(temp_dir.path().join("missing").join("parcel.db"));

    let err = store.ensure_schema().unwrap_err();
    assert!(err.is_storage());
    assert!(!store.path().exists());
}

// =============================================================================
// Insert / List Tests
// =============================================================================

#[test]
fn test_insert_assigns_id_and_updates_dataset() {
    let (_temp, store) = setup_temp_store();

    let mut ds = sample_dataset("Soil Moisture");
    let id = store.insert(&mut ds).unwrap();

    assert_eq!(id, 1);
    assert_eq!(ds.id, 1);
}

#[test]
fn test_insert_then_list_returns_same_fields() {
    let (_temp, store) = setup_temp_store();

    let mut ds = sample_dataset("Soil Moisture");
    let id = store.insert(&mut ds).unwrap();

    let all = store.list_all().unwrap();
    let matching: Vec<_> = all.iter().filter(|d| d.id == id).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(*matching[0], ds);
}

#[test]
fn test_insert_visible_to_another_handle() {
    let (temp, store) = setup_temp_store();

    let mut ds = sample_dataset("shared");
    store.insert(&mut ds).unwrap();

    let other = CatalogStore::new(temp.path().join("parcel.db"));
    let all = other.list_all().unwrap();
    assert_eq!(all, vec![ds]);
}

#[test]
fn test_ids_strictly_increase() {
    let (_temp, store) = setup_temp_store();

    let mut first = sample_dataset("first");
    let mut second = sample_dataset("second");
    let a = store.insert(&mut first).unwrap();
    let b = store.insert(&mut second).unwrap();

    assert!(b > a);

    let ids: Vec<i64> = store.list_all().unwrap().iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![a, b]);
}

#[test]
fn test_caller_supplied_id_is_ignored() {
    let (_temp, store) = setup_temp_store();

    let mut ds = sample_dataset("preset");
    ds.id = 500;
    let id = store.insert(&mut ds).unwrap();

    assert_eq!(id, 1);
    assert_eq!(store.list_all().unwrap()[0].id, 1);
}

#[test]
fn test_empty_tags_round_trip() {
    let (_temp, store) = setup_temp_store();

    let mut ds = Dataset {
        name: "bare".to_string(),
        ..Dataset::default()
    };
    store.insert(&mut ds).unwrap();

    let all = store.list_all().unwrap();
    assert!(all[0].tags.is_empty());
    assert_eq!(all[0], ds);
}

#[test]
fn test_name_with_whitespace_and_quotes() {
    let (_temp, store) = setup_temp_store();

    let mut ds = sample_dataset("  It's a \"quoted\" name  ");
    store.insert(&mut ds).unwrap();

    assert_eq!(store.list_all().unwrap()[0].name, "  It's a \"quoted\" name  ");
}

// =============================================================================
// Tag Blob Tolerance Tests
// =============================================================================

#[test]
fn test_empty_tag_blob_decodes_to_empty_map() {
    let (_temp, store) = setup_temp_store();
    insert_raw_tags(&store, "empty", Some(""));

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0].tags.is_empty());
}

#[test]
fn test_null_tag_column_decodes_to_empty_map() {
    let (_temp, store) = setup_temp_store();
    insert_raw_tags(&store, "null column", None);
    insert_raw_tags(&store, "null document", Some("null"));

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|d| d.tags.is_empty()));
}

#[test]
fn test_malformed_tag_blob_only_affects_its_row() {
    let (_temp, store) = setup_temp_store();

    let mut good = sample_dataset("good");
    store.insert(&mut good).unwrap();
    insert_raw_tags(&store, "bad", Some("{not json"));

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], good);
    assert_eq!(all[1].name, "bad");
    assert!(all[1].tags.is_empty());
}

#[test]
fn test_blob_typed_tags_are_read() {
    let (_temp, store) = setup_temp_store();

    let conn = Connection::open(store.path()).unwrap();
    conn.execute(
        "INSERT INTO dataset (name, tags) VALUES ('blob', ?1)",
        params![br#"{"year":"2020"}"#.to_vec()],
    )
    .unwrap();

    let all = store.list_all().unwrap();
    assert_eq!(all[0].tags.get("year").map(String::as_str), Some("2020"));
    assert_eq!(all[0].creator, "");
}

// =============================================================================
// Failure Tests
// =============================================================================

#[test]
fn test_insert_fails_without_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("parcel.db");
    fs::write(&path, b"").unwrap();

    let store = CatalogStore::new(&path);
    // The file exists, so the table is not created
    assert!(!store.ensure_schema().unwrap());

    let err = store.insert(&mut sample_dataset("nowhere")).unwrap_err();
    assert!(err.is_storage());
}

#[test]
fn test_list_fails_on_non_text_scalar() {
    let (_temp, store) = setup_temp_store();

    let conn = Connection::open(store.path()).unwrap();
    conn.execute(
        "INSERT INTO dataset (name, creator, tags) VALUES ('typed', X'00FF', '{}')",
        [],
    )
    .unwrap();

    let err = store.list_all().unwrap_err();
    assert!(err.is_storage());
}

#[test]
fn test_list_fails_when_path_is_directory() {
    let temp_dir = TempDir::new().unwrap();
    let store = CatalogStore::new(temp_dir.path());

    assert!(store.list_all().is_err());
}
