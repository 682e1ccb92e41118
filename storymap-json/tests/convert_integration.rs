//! Tests d'intégration de la conversion CSV → JSON

use std::path::{Path, PathBuf};

use storymap_json::{cmd_convert, ConversionStatus, ConvertArgs};

const HEADER: &str = "Project Name,Project Leads / Contributors,Year / Grant Cycle,Project Category/Type,Product,Latitude,Longitude";

fn write_csv(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("StoryMapData - Sheet1.csv");
    let mut content = format!("{}\n", HEADER);
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(&path, content).unwrap();
    path
}

fn args(source: PathBuf, output: PathBuf) -> ConvertArgs {
    ConvertArgs {
        source: Some(source),
        output: Some(output),
        ..ConvertArgs::default()
    }
}

#[test]
fn test_convert_three_rows() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_csv(
        dir.path(),
        &[
            "Desert Songs,\"Ana Ruiz, Ben Cole\",2023-2024 Cycle,Visual Art,,,",
            ",Nobody,2022,Research,,,",
            "Río Abierto,,1999-2000,Community Outreach Program,Original Music Composition,31.3404,-110.9343",
        ],
    );
    let output = dir.path().join("storymapdata_v3.json");

    let report = cmd_convert(&args(source, output.clone())).unwrap();

    assert_eq!(report.projects, 2);
    assert_eq!(report.projects_written, 2);
    assert_eq!(report.error_count(), 0);
    assert_eq!(report.skipped_rows, vec![3]);
    assert_eq!(report.status, ConversionStatus::Success);
    let checksum = report.source_checksum.as_deref().unwrap();
    assert_eq!(checksum.len(), 64);

    let content = std::fs::read_to_string(&output).unwrap();
    // Non-ASCII écrit tel quel, indentation de 2 espaces
    assert!(content.contains("\"ProjectName\": \"Río Abierto\""));
    assert!(content.contains("\n  {\n    \"id\": \"project-0-desert-songs\""));

    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    let projects = json.as_array().unwrap();
    assert_eq!(projects.len(), 2);

    let songs = &projects[0];
    assert_eq!(songs["Year"], 2023);
    assert_eq!(songs["Tags"], serde_json::json!(["art"]));
    assert_eq!(songs["HasArtwork"], true);
    assert!(songs.get("Latitude").is_none() && songs.get("Longitude").is_none());

    let rio = &projects[1];
    assert_eq!(rio["id"], "project-2-río-abierto");
    assert!(rio["Year"].is_null());
    assert_eq!(rio["Tags"], serde_json::json!(["music", "community"]));
    assert_eq!(rio["HasMusic"], true);
    assert_eq!(rio["Latitude"], 31.3404);
    assert_eq!(rio["Longitude"], -110.9343);
}

#[test]
fn test_convert_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");

    let err = cmd_convert(&args(dir.path().join("absent.csv"), output.clone())).unwrap_err();

    assert!(err.to_string().contains("not found"));
    assert!(!output.exists());
}

#[test]
fn test_convert_mixed_encoding_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("StoryMapData - Sheet1.csv");
    let mut content = format!("{}\nRío Abierto,,,,,,\n", HEADER).into_bytes();
    content.extend_from_slice(b"caf\xE9,,,,,,\n");
    std::fs::write(&source, content).unwrap();
    let output = dir.path().join("out.json");

    let err = cmd_convert(&args(source, output.clone())).unwrap_err();

    assert!(err.to_string().contains("not valid UTF-8"));
    assert!(!output.exists());
}

#[test]
fn test_convert_no_valid_projects() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_csv(dir.path(), &[",Nobody,2022,,,,", ",,,,,,"]);
    let output = dir.path().join("out.json");
    let report_path = dir.path().join("report.json");

    let mut convert = args(source, output.clone());
    convert.report = Some(report_path.clone());
    let err = cmd_convert(&convert).unwrap_err();

    assert!(err.to_string().contains("No valid projects"));
    assert!(!output.exists());

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["status"], "Failed");
}

#[test]
fn test_convert_overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_csv(dir.path(), &["Harbor,,,,,,"]);
    let output = dir.path().join("out.json");
    std::fs::write(&output, "[]").unwrap();

    cmd_convert(&args(source, output.clone())).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json[0]["id"], "project-0-harbor");
}

#[test]
fn test_convert_dry_run() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_csv(dir.path(), &["Harbor,,,,,,"]);
    let output = dir.path().join("out.json");

    let mut convert = args(source, output.clone());
    convert.dry_run = true;
    let report = cmd_convert(&convert).unwrap();

    assert_eq!(report.projects, 1);
    assert_eq!(report.projects_written, 0);
    assert!(!output.exists());
}

#[test]
fn test_convert_strict_counts_row_errors() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_csv(dir.path(), &["Harbor,,,,,,", "Broken,row"]);
    let output = dir.path().join("out.json");

    let mut convert = args(source, output.clone());
    convert.strict = true;
    let report = cmd_convert(&convert).unwrap();

    assert_eq!(report.projects, 1);
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.errors[0].row, Some(3));
    assert_eq!(report.status, ConversionStatus::PartialSuccess);
    assert!(output.exists());
}

#[test]
fn test_convert_custom_columns_and_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("projects.tsv");
    std::fs::write(&source, "Title\tLat\tLongitude\nHarbor\t40.7\t-74.0\n").unwrap();
    let columns = dir.path().join("columns.json");
    std::fs::write(&columns, r#"{"name": "Title", "latitude": "Lat"}"#).unwrap();
    let output = dir.path().join("out.json");

    let mut convert = args(source, output.clone());
    convert.columns = Some(columns.to_string_lossy().into_owned());
    convert.delimiter = Some("tab".to_string());
    cmd_convert(&convert).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json[0]["ProjectName"], "Harbor");
    assert_eq!(json[0]["Latitude"], 40.7);
    assert_eq!(json[0]["Longitude"], -74.0);
}
