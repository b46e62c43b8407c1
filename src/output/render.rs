use std::fmt::Write as _;
use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AnalyzeError;
use crate::github::{PullRequestInfo, Report, RepositoryInfo};

const TITLE_WIDTH: usize = 60;
const LABEL_WIDTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Write `report` to `out` in the requested format.
pub fn display<W: Write>(
    report: &Report,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AnalyzeError> {
    let rendered = match format {
        OutputFormat::Table => render_table(report),
        OutputFormat::Json => render_json(report)?,
    };
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.write_all(b"\n"))
        .map_err(|e| AnalyzeError::display(e.to_string()))
}

pub fn render_json(report: &Report) -> Result<String, AnalyzeError> {
    serde_json::to_string_pretty(report).map_err(|e| AnalyzeError::display(e.to_string()))
}

pub fn render_table(report: &Report) -> String {
    let mut out = String::new();
    push_repository(&mut out, &report.repository);

    if let Some(prs) = &report.pull_requests {
        out.push('\n');
        push_pull_requests(&mut out, prs);
    }

    out.trim_end().to_string()
}

fn push_repository(out: &mut String, repo: &RepositoryInfo) {
    let _ = writeln!(out, "📦 {}", repo.full_name);
    let _ = writeln!(out, "{}", "=".repeat(60));

    let rows: [(&str, String); 7] = [
        ("Description", or_dash(&repo.description)),
        ("Language", or_dash(&repo.language)),
        ("Stars", repo.stars.to_string()),
        ("Forks", repo.forks.to_string()),
        ("Open issues", repo.open_issues.to_string()),
        ("Created", or_dash(&repo.created_at)),
        ("Updated", or_dash(&repo.updated_at)),
    ];
    // Labels stay plain ASCII so the padding lines up in every terminal.
    for (label, value) in rows {
        let _ = writeln!(out, "{:<LABEL_WIDTH$} {}", label, value);
    }
}

fn push_pull_requests(out: &mut String, prs: &[PullRequestInfo]) {
    let _ = writeln!(out, "🔀 Recent pull requests ({})", prs.len());

    if prs.is_empty() {
        let _ = writeln!(out, "No pull requests found.");
        return;
    }

    let _ = writeln!(out, "{:<8} {:<8} {:<20} TITLE", "#", "STATE", "AUTHOR");
    let _ = writeln!(out, "{}", "-".repeat(38 + TITLE_WIDTH));
    for pr in prs {
        let _ = writeln!(
            out,
            "{:<8} {:<8} {:<20} {}",
            pr.number,
            pr.state,
            or_dash(&pr.author),
            truncate(&pr.title, TITLE_WIDTH)
        );
    }
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Shorten `s` to at most `max` characters, ending in `...` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
