use serde::{Deserialize, Serialize};

/// Snapshot of one repository as reported by GitHub at fetch time.
///
/// Fields GitHub leaves out or sends as `null` are already collapsed to
/// `""` or `0` here, so callers never branch on missing values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub language: String,
    /// `YYYY-MM-DD`, or empty when GitHub omitted the timestamp.
    pub created_at: String,
    /// `YYYY-MM-DD`, or empty when GitHub omitted the timestamp.
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestInfo {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub author: String,
}

/// Everything one `analyze` run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub repository: RepositoryInfo,
    /// `None` when pull requests were not requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_requests: Option<Vec<PullRequestInfo>>,
}
