use tabled::{Table, Tabled};

use crate::config::ProjectPaths;

#[derive(Tabled)]
pub struct PathRow {
    #[tabled(rename = "Location")]
    pub label: &'static str,
    #[tabled(rename = "Path")]
    pub path: String,
}

pub fn path_rows(paths: &ProjectPaths) -> Vec<PathRow> {
    paths
        .entries()
        .into_iter()
        .map(|(label, path)| PathRow {
            label,
            path: path.display().to_string(),
        })
        .collect()
}

pub fn render_paths(paths: &ProjectPaths) -> String {
    Table::new(path_rows(paths)).to_string()
}
