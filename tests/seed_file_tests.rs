//! Seed file loading: a JSON file can replace the built-in example catalog.

use std::io::Write;
use tempfile::NamedTempFile;
use workshop_console::{initial_workshops, seed, WorkshopCatalog};

#[test]
fn test_custom_seed_file_replaces_builtin_catalog() {
    let mut file = NamedTempFile::new().unwrap();
    let custom = vec![initial_workshops().remove(2)];
    write!(file, "{}", serde_json::to_string(&custom).unwrap()).unwrap();

    let loaded = seed::load_from_file(file.path()).unwrap();
    assert_eq!(loaded, custom);

    let catalog = WorkshopCatalog::with_seed(loaded);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("ws-3").unwrap().title, "Digital Entrepreneurship");
    assert_eq!(catalog.stats().available_seats, 12);
}

#[test]
fn test_malformed_seed_file_is_reported() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json ]").unwrap();

    let err = seed::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("failed to parse seed file"));
}

#[test]
fn test_seed_file_accepts_handwritten_records() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{
            "id": "ws-custom",
            "title": "Pottery Wheel Basics",
            "description": "",
            "location": "Studio 1",
            "category": "Creativity",
            "date": "2025-07-01",
            "time": "15:30:00",
            "capacity": 8,
            "enrolled": 2,
            "status": "active"
        }}]"#
    )
    .unwrap();

    let loaded = seed::load_from_file(file.path()).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "ws-custom");
    assert_eq!(loaded[0].capacity, 8);
    assert!(loaded[0].status.is_active());
}
