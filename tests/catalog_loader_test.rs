// ABOUTME: Integration tests for reading catalog files from disk
// ABOUTME: Covers JSON and YAML documents, wrapped and bare arrays, and load-time rejections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;

use explore907::catalog::Catalog;
use explore907::errors::ErrorCode;
use explore907::models::{ActivityType, Area, Rating, TimeRequired};
use tempfile::TempDir;

const JSON_CATALOG: &str = r#"{
  "activities": [
    {
      "id": "exit-glacier",
      "title": "Exit Glacier",
      "description": "Short walk to the toe of a glacier",
      "location": "Seward",
      "area": "Kenai",
      "activities": ["Hike"],
      "difficulty": "Easy",
      "rating": "2: Main Event",
      "season": ["Summer"],
      "timeRequired": "Few Hours",
      "distance": "2 miles"
    }
  ]
}"#;

const YAML_CATALOG: &str = r"
- id: hatcher-ski
  title: Hatcher Pass Touring
  description: Backcountry laps above the mine
  location: Hatcher Pass
  area: Mat-Su
  activities: [Ski, Tour]
  difficulty: Tough
  rating: '5: Locals Only'
  season: [Winter]
  timeRequired: Full Day
";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_wrapped_json_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "catalog.json", JSON_CATALOG);

    let catalog = Catalog::from_path(&path).unwrap();
    let record = catalog.get("exit-glacier").unwrap();
    assert_eq!(record.area, Area::Kenai);
    assert_eq!(record.rating, Rating::MainEvent);
    assert_eq!(record.time_required, TimeRequired::FewHours);
    assert_eq!(record.distance.as_deref(), Some("2 miles"));
    assert!(record.image_url.is_none());
}

#[test]
fn test_load_bare_yaml_array_with_unknown_rating() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "catalog.YML", YAML_CATALOG);

    let catalog = Catalog::from_path(&path).unwrap();
    let record = catalog.get("hatcher-ski").unwrap();
    assert_eq!(record.area, Area::MatSu);
    assert_eq!(
        record.activity_types,
        vec![ActivityType::Ski, ActivityType::Tour]
    );
    assert!(!record.rating.is_known());
    assert_eq!(record.rating.sort_rank(), 4);
}

#[test]
fn test_unsupported_extension_is_invalid_format() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "catalog.csv", "id,title");

    let err = Catalog::from_path(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert!(err.context.resource_id.unwrap().ends_with("catalog.csv"));
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::from_path(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[test]
fn test_unknown_area_is_serialization_error() {
    let content = JSON_CATALOG.replace("\"Kenai\"", "\"Nome\"");
    let err = Catalog::from_json_str(&content).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_record_without_seasons_is_rejected() {
    let content = JSON_CATALOG.replace("[\"Summer\"]", "[]");
    let err = Catalog::from_json_str(&content).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(err.context.resource_id.as_deref(), Some("exit-glacier"));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let mut document: serde_json::Value = serde_json::from_str(JSON_CATALOG).unwrap();
    let record = document["activities"][0].take();
    let doubled = serde_json::json!([record.clone(), record]).to_string();

    let err = Catalog::from_json_str(&doubled).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}
