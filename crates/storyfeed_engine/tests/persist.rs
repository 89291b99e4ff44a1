use std::fs;

use storyfeed_engine::{ensure_config_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_config_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("prefs");
    assert!(!new_dir.exists());
    ensure_config_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_content() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("prefs.ron", "hello").unwrap();
    assert_eq!(first.file_name().unwrap(), "prefs.ron");
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = writer.write("prefs.ron", "world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("prefs.ron", "data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("prefs.ron").exists());
}
