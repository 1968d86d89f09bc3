use assert_fs::prelude::*;

use travelZoom::app::{Dataset, DatasetError, StaticDataset};

#[test]
fn toml_file_loads_in_order() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child("asia.toml");
    file.write_str(
        r#"
region = "East Asia"

[[countries]]
id = 1
name = "Japan"
image = "icons/japan.png"

[[countries.places]]
id = 101
name = "Kyoto"
description = "Temples"
rating = 4.8
tags = ["temples"]

[[countries]]
id = 2
name = "Taiwan"

[[countries.places]]
id = 201
name = "Taipei"
"#,
    )
    .unwrap();

    let ds = StaticDataset::from_path(file.path()).unwrap();
    assert_eq!(ds.region(), "East Asia");
    let names: Vec<_> = ds.groups().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Japan", "Taiwan"]);
    assert_eq!(ds.groups()[0].items[0].rating, Some(4.8));
    assert_eq!(ds.groups()[1].items[0].description, "");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = assert_fs::TempDir::new().unwrap();
    let err = StaticDataset::from_path(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, DatasetError::Io(_)));
}

#[test]
fn malformed_json_is_reported() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child("broken.json");
    file.write_str("{\"groups\": [").unwrap();
    assert!(matches!(StaticDataset::from_path(file.path()), Err(DatasetError::Json(_))));
}
