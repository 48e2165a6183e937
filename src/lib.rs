//! Filesystem layout for the Netflix data-intelligence project.

pub mod config;
pub mod error;
pub mod install;
pub mod interface;

pub use config::*;
pub use error::*;
pub use install::*;
pub use interface::*;

/// Bootstrap the project directories under `paths` and print the layout.
pub fn run(paths: &ProjectPaths) -> Result<(), FilesystemError> {
    install::setup_directories(paths)?;

    println!("Project Configuration Loaded.");
    println!("{}", interface::render_paths(paths));
    Ok(())
}
