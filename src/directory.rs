//! Building directory construction.
//!
//! Turns the raw feed payload (a JSON array of loosely-typed building
//! objects) into a validated, immutable [`Directory`], or fails with a
//! [`LoadError`] naming exactly what went wrong. A single bad record fails
//! the whole load; no partial directory is ever published.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::models::Building;
use crate::source::Source;

/// Why a directory load failed.
///
/// Every variant renders a distinct message suitable for showing the user
/// once at startup. None of them are retried internally.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The source could not be reached or did not return a payload.
    Fetch(String),
    /// The payload is not a JSON array of building objects.
    MalformedPayload(String),
    /// A record is missing a required field, or carries it with the wrong
    /// type or an empty value.
    MissingField(&'static str),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Fetch(e) => write!(
                f,
                "unable to get building data from the source: {}. Possible causes: no network connection, service unavailable, or server down",
                e
            ),
            LoadError::MalformedPayload(e) => {
                write!(f, "building feed is not an array of records: {}", e)
            }
            LoadError::MissingField(field) => {
                write!(f, "a building record has no usable '{}' value", field)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// The complete, validated mapping from building name to its record.
///
/// Built once by a successful load and read-only afterwards; both fields are
/// private so no caller can mutate it.
#[derive(Debug, Clone)]
pub struct Directory {
    by_name: HashMap<String, Building>,
    sorted_names: Vec<String>,
}

impl Directory {
    /// Exact-match lookup by building name.
    pub fn get(&self, name: &str) -> Option<&Building> {
        self.by_name.get(name)
    }

    /// All building names, lexicographically ascending by code point.
    pub fn names(&self) -> &[String] {
        &self.sorted_names
    }

    /// Buildings in name order.
    pub fn buildings(&self) -> impl Iterator<Item = &Building> {
        self.sorted_names.iter().filter_map(|name| self.by_name.get(name))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Fetch the raw payload from `source` and build the directory.
///
/// One-shot: the caller awaits completion (success or failure) before any
/// reader touches the result. Not cancelable once started.
pub async fn load_directory(source: &dyn Source) -> Result<Directory, LoadError> {
    let raw = source.fetch_raw().await?;
    let payload: Value =
        serde_json::from_str(&raw).map_err(|e| LoadError::MalformedPayload(e.to_string()))?;
    parse_directory(&payload)
}

/// Validate and index a parsed feed payload.
///
/// Records are processed in payload order. A duplicate name silently
/// overwrites the earlier record (last-write-wins, matching the upstream
/// feed's contract that names are unique).
pub fn parse_directory(payload: &Value) -> Result<Directory, LoadError> {
    let records = payload.as_array().ok_or_else(|| {
        LoadError::MalformedPayload("expected a top-level JSON array".to_string())
    })?;

    let mut by_name: HashMap<String, Building> = HashMap::new();

    for record in records {
        let record = record.as_object().ok_or_else(|| {
            LoadError::MalformedPayload("expected every array element to be an object".to_string())
        })?;

        let name = required_string(record, "name")?;
        let abbreviation = required_string(record, "abbreviation")?;
        let category = required_string(record, "category")?;
        let description_url = required_string(record, "descriptionUrl")?;
        // Some buildings have no photo; absence is not an error.
        let image_url = optional_string(record, "imageUrl");
        let latitude = required_number(record, "latitude")?;
        let longitude = required_number(record, "longitude")?;
        // The feed's `id` field is not retained.

        by_name.insert(
            name.clone(),
            Building {
                name,
                abbreviation,
                category,
                description_url,
                image_url,
                latitude,
                longitude,
            },
        );
    }

    let mut sorted_names: Vec<String> = by_name.keys().cloned().collect();
    sorted_names.sort();

    Ok(Directory {
        by_name,
        sorted_names,
    })
}

fn required_string(record: &Map<String, Value>, field: &'static str) -> Result<String, LoadError> {
    match record.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(LoadError::MissingField(field)),
    }
}

fn optional_string(record: &Map<String, Value>, field: &str) -> String {
    record
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn required_number(record: &Map<String, Value>, field: &'static str) -> Result<f64, LoadError> {
    record
        .get(field)
        .and_then(Value::as_f64)
        .ok_or(LoadError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn agnew() -> Value {
        json!({
            "abbreviation": "AGNEW",
            "category": "Academic",
            "descriptionUrl": "http://example.edu/buildings/agnew/agnew.txt",
            "id": 1,
            "imageUrl": "http://example.edu/buildings/agnew/agnew.jpg",
            "latitude": 37.2247741885,
            "longitude": -80.4241237773,
            "name": "Agnew Hall"
        })
    }

    fn wright() -> Value {
        json!({
            "abbreviation": "WRGHT",
            "category": "Academic",
            "descriptionUrl": "http://example.edu/buildings/wrght/wrght.txt",
            "id": 115,
            "imageUrl": "http://example.edu/buildings/wrght/wrght.jpg",
            "latitude": 37.2268104329,
            "longitude": -80.4261888832,
            "name": "Wright House"
        })
    }

    #[test]
    fn test_valid_payload_builds_directory() {
        let directory = parse_directory(&json!([wright(), agnew()])).unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.names(), ["Agnew Hall", "Wright House"]);

        let building = directory.get("Agnew Hall").unwrap();
        assert_eq!(building.abbreviation, "AGNEW");
        assert_eq!(building.category, "Academic");
        assert!((building.latitude - 37.2247741885).abs() < 1e-9);
        assert!(building.has_image());
    }

    #[test]
    fn test_names_match_lookup_keys() {
        let directory = parse_directory(&json!([agnew(), wright()])).unwrap();
        assert_eq!(directory.names().len(), directory.len());
        for name in directory.names() {
            assert!(directory.get(name).is_some());
        }
    }

    #[test]
    fn test_id_is_not_retained_but_harmless() {
        let mut record = agnew();
        record.as_object_mut().unwrap().remove("id");
        assert!(parse_directory(&json!([record])).is_ok());
    }

    #[test]
    fn test_missing_name_fails_load() {
        let mut record = agnew();
        record.as_object_mut().unwrap().remove("name");
        let err = parse_directory(&json!([record])).unwrap_err();
        assert_eq!(err, LoadError::MissingField("name"));
    }

    #[test]
    fn test_missing_latitude_fails_whole_batch() {
        let mut bad = wright();
        bad.as_object_mut().unwrap().remove("latitude");
        // One bad record among valid ones still aborts everything.
        let err = parse_directory(&json!([agnew(), bad])).unwrap_err();
        assert_eq!(err, LoadError::MissingField("latitude"));
    }

    #[test]
    fn test_wrong_typed_longitude_counts_as_missing() {
        let mut record = agnew();
        record.as_object_mut().unwrap()["longitude"] = json!("-80.42");
        let err = parse_directory(&json!([record])).unwrap_err();
        assert_eq!(err, LoadError::MissingField("longitude"));
    }

    #[test]
    fn test_empty_required_string_counts_as_missing() {
        let mut record = agnew();
        record.as_object_mut().unwrap()["category"] = json!("");
        let err = parse_directory(&json!([record])).unwrap_err();
        assert_eq!(err, LoadError::MissingField("category"));
    }

    #[test]
    fn test_absent_image_url_defaults_to_empty() {
        let mut record = agnew();
        record.as_object_mut().unwrap().remove("imageUrl");
        let directory = parse_directory(&json!([record])).unwrap();
        let building = directory.get("Agnew Hall").unwrap();
        assert_eq!(building.image_url, "");
        assert!(!building.has_image());
    }

    #[test]
    fn test_wrong_typed_image_url_defaults_to_empty() {
        let mut record = agnew();
        record.as_object_mut().unwrap()["imageUrl"] = json!(42);
        let directory = parse_directory(&json!([record])).unwrap();
        assert_eq!(directory.get("Agnew Hall").unwrap().image_url, "");
    }

    #[test]
    fn test_duplicate_name_last_write_wins() {
        let mut second = agnew();
        second.as_object_mut().unwrap()["abbreviation"] = json!("AGNW2");
        second.as_object_mut().unwrap()["category"] = json!("Support");
        let directory = parse_directory(&json!([agnew(), second])).unwrap();
        assert_eq!(directory.len(), 1);
        let building = directory.get("Agnew Hall").unwrap();
        assert_eq!(building.abbreviation, "AGNW2");
        assert_eq!(building.category, "Support");
    }

    #[test]
    fn test_non_array_payload_is_malformed() {
        let err = parse_directory(&json!({"name": "Agnew Hall"})).unwrap_err();
        assert!(matches!(err, LoadError::MalformedPayload(_)));
    }

    #[test]
    fn test_non_object_element_is_malformed() {
        let err = parse_directory(&json!([agnew(), "Wright House"])).unwrap_err();
        assert!(matches!(err, LoadError::MalformedPayload(_)));
    }

    #[test]
    fn test_empty_array_yields_empty_directory() {
        let directory = parse_directory(&json!([])).unwrap();
        assert!(directory.is_empty());
        assert!(directory.names().is_empty());
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let message = LoadError::MissingField("latitude").to_string();
        assert!(message.contains("latitude"));
        let message = LoadError::Fetch("connection refused".to_string()).to_string();
        assert!(message.contains("connection refused"));
    }
}
