use tempfile::TempDir;

use ghrepo::github::{PullRequestInfo, Report, RepositoryInfo};
use ghrepo::output::download::report_file_name;
use ghrepo::output::render::truncate;
use ghrepo::output::{DownloadFormat, OutputFormat, display, render_json, render_table, save_report};

fn make_repo() -> RepositoryInfo {
    RepositoryInfo {
        name: "go".into(),
        full_name: "golang/go".into(),
        description: "The Go programming language".into(),
        stars: 120000,
        forks: 17500,
        open_issues: 9000,
        language: "Go".into(),
        created_at: "2014-08-19".into(),
        updated_at: "2024-05-01".into(),
    }
}

fn make_pr(number: u64, title: &str, author: &str) -> PullRequestInfo {
    PullRequestInfo {
        number,
        title: title.into(),
        state: "open".into(),
        author: author.into(),
    }
}

fn report_with(prs: Option<Vec<PullRequestInfo>>) -> Report {
    Report {
        repository: make_repo(),
        pull_requests: prs,
    }
}

#[test]
fn test_table_contains_repository_fields() {
    let table = render_table(&report_with(None));
    assert!(table.contains("golang/go"));
    assert!(table.contains("120000"));
    assert!(table.contains("17500"));
    assert!(table.contains("The Go programming language"));
    assert!(table.contains("2014-08-19"));
    assert!(!table.contains("pull requests"));
}

#[test]
fn test_table_shows_dash_for_empty_fields() {
    let mut report = report_with(None);
    report.repository.description.clear();
    report.repository.language.clear();
    let table = render_table(&report);
    assert!(table.lines().any(|l| l.starts_with("Description") && l.trim_end().ends_with('-')));
    assert!(table.lines().any(|l| l.starts_with("Language") && l.trim_end().ends_with('-')));
}

#[test]
fn test_table_values_share_one_column() {
    let table = render_table(&report_with(None));
    let value_at = |label: &str| -> String {
        let line = table
            .lines()
            .find(|l| l.starts_with(label))
            .unwrap_or_else(|| panic!("missing {label} row"));
        line.chars().skip(17).collect()
    };
    assert_eq!(value_at("Description"), "The Go programming language");
    assert_eq!(value_at("Language"), "Go");
    assert_eq!(value_at("Stars"), "120000");
    assert_eq!(value_at("Forks"), "17500");
    assert_eq!(value_at("Open issues"), "9000");
    assert_eq!(value_at("Created"), "2014-08-19");
    assert_eq!(value_at("Updated"), "2024-05-01");
}

#[test]
fn test_table_lists_pull_requests_in_order() {
    let table = render_table(&report_with(Some(vec![
        make_pr(42, "Fix the thing", "alice"),
        make_pr(41, "Add the thing", ""),
    ])));
    assert!(table.contains("Recent pull requests (2)"));
    let first = table.find("Fix the thing").unwrap();
    let second = table.find("Add the thing").unwrap();
    assert!(first < second);
    assert!(table.contains("alice"));
}

#[test]
fn test_table_with_no_pull_requests_found() {
    let table = render_table(&report_with(Some(vec![])));
    assert!(table.contains("No pull requests found."));
}

#[test]
fn test_long_titles_are_truncated() {
    let title = "x".repeat(80);
    let table = render_table(&report_with(Some(vec![make_pr(1, &title, "bob")])));
    assert!(!table.contains(&title));
    assert!(table.contains(&format!("{}...", "x".repeat(57))));
}

#[test]
fn test_truncate_respects_char_boundaries() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("ééééééééééé", 5), "éé...");
}

#[test]
fn test_json_omits_disabled_pull_requests() {
    let json = render_json(&report_with(None)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["repository"]["full_name"], "golang/go");
    assert_eq!(value["repository"]["stars"], 120000);
    assert!(value.get("pull_requests").is_none());
}

#[test]
fn test_json_includes_pull_requests() {
    let json = render_json(&report_with(Some(vec![make_pr(7, "Title", "carol")]))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["pull_requests"][0]["number"], 7);
    assert_eq!(value["pull_requests"][0]["author"], "carol");
}

#[test]
fn test_display_writes_selected_format() {
    let report = report_with(None);

    let mut out = Vec::new();
    display(&report, OutputFormat::Json, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.trim_start().starts_with('{'));

    let mut out = Vec::new();
    display(&report, OutputFormat::Table, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("golang/go"));
    assert!(!text.trim_start().starts_with('{'));
}

#[test]
fn test_report_file_name() {
    let report = report_with(None);
    assert_eq!(report_file_name(&report, DownloadFormat::Json), "golang_go_analysis.json");
    assert_eq!(report_file_name(&report, DownloadFormat::Txt), "golang_go_analysis.txt");
}

#[test]
fn test_save_json_report() {
    let dir = TempDir::new().unwrap();
    let report = report_with(Some(vec![make_pr(3, "Title", "dave")]));

    let path = save_report(&report, DownloadFormat::Json, dir.path()).unwrap();
    assert_eq!(path, dir.path().join("golang_go_analysis.json"));

    let saved: Report = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved, report);
}

#[test]
fn test_save_txt_report_creates_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("reports").join("today");

    let path = save_report(&report_with(None), DownloadFormat::Txt, &nested).unwrap();
    assert!(nested.exists());
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains("golang/go"));
}

#[test]
fn test_save_into_file_path_fails() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "x").unwrap();

    let err = save_report(&report_with(None), DownloadFormat::Json, &blocker).unwrap_err();
    assert!(matches!(err, ghrepo::AnalyzeError::DisplayFailed { .. }));
}
