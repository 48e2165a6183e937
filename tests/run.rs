use std::fs;

use netflix_intel::{run, ProjectPaths};
use tempfile::TempDir;

#[test]
fn run_creates_output_directories() {
    let tmp = TempDir::new().unwrap();
    let paths = ProjectPaths::new(tmp.path());

    run(&paths).unwrap();

    assert!(paths.processed_data_dir().is_dir());
    assert!(paths.figures_dir().is_dir());
    assert!(!paths.raw_data_dir().exists());
}

#[test]
fn run_fails_when_data_is_a_file() {
    let tmp = TempDir::new().unwrap();
    let paths = ProjectPaths::new(tmp.path());
    fs::write(paths.data_dir(), b"").unwrap();

    let err = run(&paths).unwrap_err();

    assert_eq!(err.path, paths.processed_data_dir());
    let expected = format!("failed to create directory {}", paths.processed_data_dir().display());
    assert!(err.to_string().starts_with(&expected));
    assert!(!paths.figures_dir().exists());
}
