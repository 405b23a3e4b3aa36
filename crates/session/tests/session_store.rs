//! Integration tests for the SessionStore:
//! - Default arrangement when no document exists
//! - Save / load round-trips through the JSON document
//! - Fallback to the default arrangement on corrupt documents
//!
//! NOTE: These tests avoid adding extra dev-dependencies by using std only.

use std::fs;
use std::path::PathBuf;

use composer::{CharactersField, DigitsField, Field, FieldKind, WordField};
use session::{default_arrangement, SessionStore};

fn unique_temp_path(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    p.push(format!("session_store_test_{name}_{nanos}.json"));
    p
}

#[test]
fn missing_document_loads_default_arrangement() {
    let path = unique_temp_path("missing");
    let _ = fs::remove_file(&path);

    let store = SessionStore::new(path.clone());
    let list = store.load();

    assert_eq!(list, default_arrangement());
    let kinds: Vec<_> = list.iter().map(Field::kind).collect();
    assert_eq!(
        kinds,
        vec![FieldKind::Words, FieldKind::Words, FieldKind::Digits]
    );
    // Loading must not create the file.
    assert!(!path.exists());
}

#[test]
fn save_then_load_round_trips_the_arrangement() {
    let path = unique_temp_path("round_trip");
    let _ = fs::remove_file(&path);

    let saved: composer::CompositionList = [
        Field::Words(WordField::new("correct\nhorse\nbattery")),
        Field::Digits(DigitsField::new(4)),
        Field::Characters(CharactersField::new(2)),
    ]
    .into_iter()
    .collect();

    let store = SessionStore::new(path.clone());
    store.save(&saved).expect("save arrangement");
    assert!(path.exists(), "save must create the document");

    let restored = store.load();
    assert_eq!(restored, saved);

    let _ = fs::remove_file(&path);
}

#[test]
fn save_overwrites_an_existing_document() {
    let path = unique_temp_path("overwrite");
    let _ = fs::remove_file(&path);

    let store = SessionStore::new(path.clone());
    store.save(&default_arrangement()).expect("first save");

    let replacement: composer::CompositionList = [Field::Digits(DigitsField::new(9))]
        .into_iter()
        .collect();
    store.save(&replacement).expect("second save");

    let restored = store.load();
    assert_eq!(restored, replacement);

    let _ = fs::remove_file(&path);
}

#[test]
fn corrupt_json_falls_back_to_default_arrangement() {
    let path = unique_temp_path("corrupt");
    fs::write(&path, "{ not json").expect("write corrupt document");

    let store = SessionStore::new(path.clone());
    assert_eq!(store.load(), default_arrangement());

    let _ = fs::remove_file(&path);
}

#[test]
fn unknown_field_type_falls_back_to_default_arrangement() {
    let path = unique_temp_path("unknown_type");
    fs::write(
        &path,
        r#"{ "inputs": [ { "type": "emoji", "input": 3 } ] }"#,
    )
    .expect("write document");

    let store = SessionStore::new(path.clone());
    assert_eq!(store.load(), default_arrangement());

    let _ = fs::remove_file(&path);
}

#[test]
fn malformed_count_payload_falls_back_to_default_arrangement() {
    let path = unique_temp_path("malformed_count");
    fs::write(
        &path,
        r#"{ "inputs": [ { "type": "digits", "input": "five" } ] }"#,
    )
    .expect("write document");

    let store = SessionStore::new(path.clone());
    assert_eq!(store.load(), default_arrangement());

    let _ = fs::remove_file(&path);
}

#[test]
fn out_of_range_count_loads_clamped_without_fallback() {
    let path = unique_temp_path("clamped_count");
    fs::write(
        &path,
        r#"{ "inputs": [ { "type": "digits", "input": 500 } ] }"#,
    )
    .expect("write document");

    let store = SessionStore::new(path.clone());
    let list = store.load();

    assert_eq!(list.len(), 1);
    match list.get(0).expect("one field") {
        Field::Digits(f) => assert_eq!(f.count(), 100),
        other => panic!("expected digits field, got {other:?}"),
    }

    let _ = fs::remove_file(&path);
}

#[test]
fn pretty_printed_documents_are_accepted() {
    let path = unique_temp_path("layout");
    fs::write(
        &path,
        r#"{
    "inputs": [
        {
            "type": "words",
            "input": "summer\nwinter\n"
        },
        {
            "type": "words",
            "input": ""
        },
        {
            "type": "digits",
            "input": 2
        }
    ]
}"#,
    )
    .expect("write document");

    let store = SessionStore::new(path.clone());
    let list = store.load();

    let kinds: Vec<_> = list.iter().map(Field::kind).collect();
    assert_eq!(
        kinds,
        vec![FieldKind::Words, FieldKind::Words, FieldKind::Digits]
    );
    match list.get(0).expect("first field") {
        Field::Words(f) => assert_eq!(f.text(), "summer\nwinter\n"),
        other => panic!("expected words field, got {other:?}"),
    }

    let _ = fs::remove_file(&path);
}
