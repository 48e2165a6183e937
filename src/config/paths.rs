use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

const DATA_DIR: &str = "data";
const RAW_DATA_DIR: &str = "raw";
const RAW_NETFLIX_FILE: &str = "netflix1.csv";
const PROCESSED_DATA_DIR: &str = "processed";
const NETFLIX_CLEANED_FILE: &str = "netflix_cleaned.parquet";
const FIGURES_DIR: &str = "01_Data_Intelligence/reports/figures";

/// Process-wide registry anchored at the crate's own directory.
pub static PROJECT_PATHS: Lazy<ProjectPaths> = Lazy::new(ProjectPaths::from_manifest_dir);

/// Fixed project layout derived from a single base directory.
///
/// Every field is a pure function of `base_dir`. Nothing is read from or
/// written to disk while building one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    base_dir: PathBuf,
    data_dir: PathBuf,
    raw_data_dir: PathBuf,
    raw_netflix_file: PathBuf,
    processed_data_dir: PathBuf,
    netflix_cleaned_file: PathBuf,
    figures_dir: PathBuf,
}

impl ProjectPaths {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let data_dir = base_dir.join(DATA_DIR);
        let raw_data_dir = data_dir.join(RAW_DATA_DIR);
        let processed_data_dir = data_dir.join(PROCESSED_DATA_DIR);

        Self {
            raw_netflix_file: raw_data_dir.join(RAW_NETFLIX_FILE),
            netflix_cleaned_file: processed_data_dir.join(NETFLIX_CLEANED_FILE),
            figures_dir: base_dir.join(FIGURES_DIR),
            base_dir,
            data_dir,
            raw_data_dir,
            processed_data_dir,
        }
    }

    /// Anchors the layout at the directory holding this crate's sources,
    /// resolved at compile time.
    pub fn from_manifest_dir() -> Self {
        Self::new(env!("CARGO_MANIFEST_DIR"))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn raw_data_dir(&self) -> &Path {
        &self.raw_data_dir
    }

    /// Input CSV consumed by the cleaning step.
    pub fn raw_netflix_file(&self) -> &Path {
        &self.raw_netflix_file
    }

    pub fn processed_data_dir(&self) -> &Path {
        &self.processed_data_dir
    }

    /// Parquet output written by the cleaning step.
    pub fn netflix_cleaned_file(&self) -> &Path {
        &self.netflix_cleaned_file
    }

    pub fn figures_dir(&self) -> &Path {
        &self.figures_dir
    }

    /// Directories that must exist before collaborators write output.
    pub fn required_directories(&self) -> [&Path; 2] {
        [&self.processed_data_dir, &self.figures_dir]
    }

    /// Labelled view of every path, base directory and raw file first.
    pub fn entries(&self) -> [(&'static str, &Path); 7] {
        [
            ("Base Directory", &self.base_dir),
            ("Raw Data File", &self.raw_netflix_file),
            ("Data Directory", &self.data_dir),
            ("Raw Data Directory", &self.raw_data_dir),
            ("Processed Data Directory", &self.processed_data_dir),
            ("Cleaned Data File", &self.netflix_cleaned_file),
            ("Figures Directory", &self.figures_dir),
        ]
    }
}
