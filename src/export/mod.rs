mod fs_utils;
mod json_csv;
mod model;

pub use model::EntryExport;

use crate::errors::AppResult;
use crate::models::Entry;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write `entries` (already newest first) to `path`.
    pub fn export_entries(
        entries: &[Entry],
        path: &Path,
        format: ExportFormat,
        force: bool,
    ) -> AppResult<()> {
        fs_utils::ensure_writable(path, force)?;

        let rows: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();
        match format {
            ExportFormat::Csv => json_csv::export_csv(&rows, path),
            ExportFormat::Json => json_csv::export_json(&rows, path),
        }
    }
}
