use std::io;
use std::path::Path;

use log::{debug, info};

use crate::config::ProjectPaths;
use crate::error::FilesystemError;

/// Walks `dir` from the root down and fails on the first segment that exists
/// but is not a directory.
fn ensure_creatable(dir: &Path) -> Result<(), FilesystemError> {
    let mut segments: Vec<&Path> = dir
        .ancestors()
        .filter(|a| !a.as_os_str().is_empty())
        .collect();
    segments.reverse();

    for segment in segments {
        match std::fs::metadata(segment) {
            Ok(meta) if meta.is_dir() => continue,
            Ok(_) => {
                let source = io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} exists and is not a directory", segment.display()),
                );
                return Err(FilesystemError::new(dir, source));
            }
            // everything below a missing segment is missing too
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(FilesystemError::new(dir, e)),
        }
    }

    Ok(())
}

/// Ensures the processed data and figures directories exist.
///
/// Both targets are checked before anything is created, so a path collision
/// on either one leaves the filesystem untouched. Directories that already
/// exist are left as they are.
pub fn setup_directories(paths: &ProjectPaths) -> Result<(), FilesystemError> {
    let dirs = paths.required_directories();

    for dir in dirs {
        debug!("Checking {}", dir.display());
        ensure_creatable(dir)?;
    }

    for dir in dirs {
        debug!("Creating {}", dir.display());
        std::fs::create_dir_all(dir).map_err(|e| FilesystemError::new(dir, e))?;
    }

    info!("Project directories ready under {}", paths.base_dir().display());
    Ok(())
}
