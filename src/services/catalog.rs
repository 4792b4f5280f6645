use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::data::sample_events;
use crate::models::Event;

/// Errors that can occur while loading an event catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

/// TOML catalogs keep their events under an `[[events]]` array
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    events: Vec<Event>,
}

/// Parse a JSON catalog (a bare array of events)
pub fn parse_json(input: &str) -> Result<Vec<Event>, CatalogError> {
    Ok(serde_json::from_str(input)?)
}

/// Parse a TOML catalog
pub fn parse_toml(input: &str) -> Result<Vec<Event>, CatalogError> {
    let catalog: TomlCatalog = toml::from_str(input)?;
    Ok(catalog.events)
}

/// Load events from `path`, choosing the parser by file extension
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Event>, CatalogError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let contents = std::fs::read_to_string(path)?;
    let events = match extension.as_str() {
        "json" => parse_json(&contents)?,
        "toml" => parse_toml(&contents)?,
        other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
    };

    tracing::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Load the configured catalog, or the built-in sample catalog when none is set
pub fn load_or_sample(path: Option<&Path>) -> Result<Vec<Event>, CatalogError> {
    match path {
        Some(path) => load_catalog(path),
        None => {
            tracing::debug!("No catalog configured, using sample events");
            Ok(sample_events())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const JSON: &str = r#"[
        {
            "id": "a",
            "name": "Night Market",
            "description": "Street food",
            "venue": "Pier 5",
            "date": "2024-09-01",
            "time": "8:00 PM",
            "category": "Food",
            "city": "Boston",
            "latitude": 42.3601,
            "longitude": -71.0589,
            "imageUrl": "https://example.com/a.jpg"
        }
    ]"#;

    const TOML: &str = r#"
[[events]]
id = "b"
name = "Harbor Run"
venue = "Seaport"
date = "2024-09-02"
category = "Sports"
city = "Boston"
latitude = 42.35
longitude = -71.04
"#;

    #[test]
    fn test_parse_json_catalog() {
        let events = parse_json(JSON).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].image_url.as_deref(), Some("https://example.com/a.jpg"));
    }

    #[test]
    fn test_parse_toml_catalog_with_defaults() {
        let events = parse_toml(TOML).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "b");
        assert!(events[0].description.is_empty());
        assert!(events[0].image_url.is_none());
    }

    #[test]
    fn test_missing_field_rejected() {
        let err = parse_json(r#"[{"id": "x"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_load_catalog_by_extension() {
        let dir = std::env::temp_dir().join(format!("event-spot-catalog-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let json_path = dir.join("events.json");
        std::fs::File::create(&json_path).unwrap().write_all(JSON.as_bytes()).unwrap();
        assert_eq!(load_catalog(&json_path).unwrap()[0].id, "a");

        let toml_path = dir.join("events.TOML");
        std::fs::File::create(&toml_path).unwrap().write_all(TOML.as_bytes()).unwrap();
        assert_eq!(load_catalog(&toml_path).unwrap()[0].id, "b");

        let csv_path = dir.join("events.csv");
        std::fs::File::create(&csv_path).unwrap().write_all(b"id\n").unwrap();
        assert!(matches!(load_catalog(&csv_path), Err(CatalogError::UnsupportedFormat(ext)) if ext == "csv"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_catalog("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_fallback_to_sample() {
        assert_eq!(load_or_sample(None).unwrap().len(), 8);
    }
}
