// SPDX-License-Identifier: MPL-2.0
//! External catalog files and the config entry pointing at them.

use eyeson::config::{self, Config};
use eyeson::content::{Catalog, ItemId};
use eyeson::error::{CatalogError, Error};
use std::fs;
use tempfile::tempdir;

const SMALL_CATALOG: &str = r#"{
  "featured": ["clip-2"],
  "categories": [
    {
      "name": "Shorts",
      "items": [
        {
          "id": "clip-1",
          "name": "First Clip",
          "thumbnailUrl": "https://img.example.com/1.jpg",
          "videoUrl": "https://www.youtube.com/shorts/abc123",
          "releaseDate": "2024-03-01",
          "duration": "0:21"
        },
        {
          "id": "clip-2",
          "name": "Second Clip",
          "description": "Watch link",
          "thumbnail_url": "https://img.example.com/2.jpg",
          "video_url": "https://www.youtube.com/watch?v=def456",
          "release_date": "2024-03-02",
          "duration": "0:48"
        }
      ]
    }
  ]
}"#;

#[tokio::test]
async fn loads_catalog_from_disk() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("catalog.json");
    fs::write(&path, SMALL_CATALOG).expect("write catalog");

    let catalog = Catalog::load(&path).await.expect("valid catalog");

    assert_eq!(catalog.item_count(), 2);
    assert_eq!(catalog.categories()[0].name, "Shorts");
    let featured = catalog.featured();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].id, ItemId::new("clip-2"));
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("temp dir");

    let err = Catalog::load(dir.path().join("absent.json"))
        .await
        .expect_err("no file");

    assert!(matches!(err, Error::Io(_)));
}

#[tokio::test]
async fn truncated_file_is_malformed() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("catalog.json");
    fs::write(&path, &SMALL_CATALOG[..120]).expect("write catalog");

    let err = Catalog::load(&path).await.expect_err("truncated");

    assert!(matches!(err, Error::Catalog(CatalogError::Malformed(_))));
}

#[test]
fn duplicate_ids_across_categories_are_rejected() {
    let json = r#"{
      "categories": [
        { "name": "A", "items": [
          { "id": "x", "name": "X", "thumbnail_url": "t", "video_url": "v",
            "release_date": "2024-01-01", "duration": "0:10" } ] },
        { "name": "B", "items": [
          { "id": "x", "name": "X again", "thumbnail_url": "t", "video_url": "v",
            "release_date": "2024-01-02", "duration": "0:12" } ] }
      ]
    }"#;

    let err = Catalog::from_json(json).expect_err("duplicate");

    assert!(matches!(
        err,
        Error::Catalog(CatalogError::DuplicateId(ref id)) if id == "x"
    ));
}

#[tokio::test]
async fn configured_catalog_path_survives_round_trip() {
    let dir = tempdir().expect("temp dir");
    let catalog_path = dir.path().join("catalog.json");
    fs::write(&catalog_path, SMALL_CATALOG).expect("write catalog");

    let mut config = Config::default();
    config.content.catalog_path = Some(catalog_path.clone());
    config::save_with_override(&config, Some(dir.path().to_path_buf())).expect("save");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.content.catalog_path.as_deref(), Some(catalog_path.as_path()));

    let path = loaded.content.catalog_path.expect("path");
    let catalog = Catalog::load(path).await.expect("valid catalog");
    assert_eq!(catalog.item_count(), 2);
}
