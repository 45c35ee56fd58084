// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use std::collections::HashMap;
use std::io::Write;

const DOCUMENT: &str = r#"
{
    "app": {
        "name": "jute-demo",
        "debug": true,
        "workers": 4,
        "threshold": 0.75,
        "server": {
            "host": "localhost",
            "port": 8080
        },
        "features": ["auth", "logging"],
        "fallback": null
    }
}
"#;

#[test]
fn test_document_typed_access() {
    let doc = JuteDocument::from_str(DOCUMENT).expect("Failed to decode document");

    let name: String = doc.get("app.name").expect("Failed to get app.name");
    assert_eq!(name, "jute-demo");

    let debug: bool = doc.get("app.debug").expect("Failed to get app.debug");
    assert!(debug);

    let workers: usize = doc.get("app.workers").expect("Failed to get app.workers");
    assert_eq!(workers, 4);

    let threshold: f64 = doc.get("app.threshold").expect("Failed to get threshold");
    assert!((threshold - 0.75).abs() < 1e-9);

    let port: u16 = doc.get("app.server.port").expect("Failed to get port");
    assert_eq!(port, 8080);

    let features: Vec<String> = doc.get("app.features").expect("Failed to get features");
    assert_eq!(features, vec!["auth", "logging"]);
}

#[test]
fn test_document_array_index_access() {
    let doc = JuteDocument::from_str(DOCUMENT).unwrap();

    let first: String = doc.get("app.features.0").unwrap();
    assert_eq!(first, "auth");

    let out_of_range = doc.get_value("app.features.9");
    assert!(matches!(out_of_range, Err(JuteError::KeyNotFound { .. })));
}

#[test]
fn test_document_optional_and_default() {
    let doc = JuteDocument::from_str(DOCUMENT).unwrap();

    let missing: Option<String> = doc.get_optional("app.missing").unwrap();
    assert_eq!(missing, None);

    let present: Option<String> = doc.get_optional("app.name").unwrap();
    assert_eq!(present, Some("jute-demo".to_string()));

    let timeout = doc.get_or("app.timeout", 30u64);
    assert_eq!(timeout, 30);

    let workers = doc.get_or("app.workers", 1u64);
    assert_eq!(workers, 4);
}

#[test]
fn test_document_null_maps_to_none() {
    let doc = JuteDocument::from_str(DOCUMENT).unwrap();

    let fallback: Option<String> = doc.get("app.fallback").unwrap();
    assert_eq!(fallback, None);
}

#[test]
fn test_document_has_and_keys() {
    let doc = JuteDocument::from_str(DOCUMENT).unwrap();

    assert!(doc.has("app.server.host"));
    assert!(!doc.has("app.server.nonexistent"));

    let keys = doc.get_keys("app.server").expect("Failed to get server keys");
    assert_eq!(keys, vec!["host", "port"]);

    let not_an_object = doc.get_keys("app.name");
    assert!(matches!(not_an_object, Err(JuteError::TypeError { .. })));
}

#[test]
fn test_document_root_and_empty_path() {
    let doc = JuteDocument::from_str(DOCUMENT).unwrap();

    assert!(doc.root().as_object().is_some());
    assert_eq!(doc.get_value("").unwrap(), *doc.root());
}

#[test]
fn test_document_descend_into_scalar() {
    let doc = JuteDocument::from_str(DOCUMENT).unwrap();

    let result = doc.get_value("app.name.inner");
    assert!(matches!(result, Err(JuteError::TypeError { .. })));
}

#[test]
fn test_document_type_mismatch() {
    let doc = JuteDocument::from_str(DOCUMENT).unwrap();

    let result: Result<i32, JuteError> = doc.get("app.name");
    assert!(matches!(result, Err(JuteError::TypeError { .. })));

    let result: Result<u8, JuteError> = doc.get("app.server.port");
    assert!(matches!(result, Err(JuteError::TypeError { .. })));
}

#[test]
fn test_document_hashmap_conversion() {
    let doc = JuteDocument::from_str(DOCUMENT).unwrap();

    let server: HashMap<String, Value> = doc.get("app.server").unwrap();
    assert_eq!(server.len(), 2);
    assert!(server.contains_key("host"));

    let result: Result<HashMap<String, String>, JuteError> = doc.get("app.server");
    assert!(result.is_err()); // port is a number
}

#[test]
fn test_document_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, r#"{{"greeting": "hello"}}"#).expect("Failed to write temp file");

    let doc = JuteDocument::from_file(file.path()).expect("Failed to load document");
    let greeting: String = doc.get("greeting").unwrap();
    assert_eq!(greeting, "hello");
}

#[test]
fn test_document_from_missing_file() {
    let result = JuteDocument::from_file("definitely/not/here.json");
    assert!(matches!(result, Err(JuteError::FileError { .. })));
}

#[test]
fn test_document_decode_error_propagates() {
    let result = JuteDocument::from_str("{\"a\": }");
    assert!(matches!(result, Err(JuteError::EmptyInput { .. })));
}
