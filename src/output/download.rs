use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::debug;

use super::render::{render_json, render_table};
use crate::error::AnalyzeError;
use crate::github::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DownloadFormat {
    Json,
    Txt,
}

impl DownloadFormat {
    pub fn extension(self) -> &'static str {
        match self {
            DownloadFormat::Json => "json",
            DownloadFormat::Txt => "txt",
        }
    }
}

/// File name a report is saved under, e.g. `golang_go_analysis.json`.
pub fn report_file_name(report: &Report, format: DownloadFormat) -> String {
    let stem = report.repository.full_name.replace(['/', '\\'], "_");
    let stem = if stem.is_empty() { "repository" } else { stem.as_str() };
    format!("{stem}_analysis.{}", format.extension())
}

/// Save `report` into `dir`, creating the directory if needed.
pub fn save_report(
    report: &Report,
    format: DownloadFormat,
    dir: &Path,
) -> Result<PathBuf, AnalyzeError> {
    std::fs::create_dir_all(dir).map_err(|e| {
        AnalyzeError::display(format!("failed to create directory {}: {e}", dir.display()))
    })?;

    let content = match format {
        DownloadFormat::Json => render_json(report)?,
        DownloadFormat::Txt => render_table(report),
    };

    let path = dir.join(report_file_name(report, format));
    std::fs::write(&path, content + "\n")
        .map_err(|e| AnalyzeError::display(format!("failed to write {}: {e}", path.display())))?;

    debug!(path = %path.display(), "Report saved");
    Ok(path)
}
