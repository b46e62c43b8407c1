use tracing::{debug, info};

use crate::error::AnalyzeError;
use crate::github::{GithubClient, RepoRef, Report, parse_repo_ref};

/// Upper bound on `--prs`, matching GitHub's maximum page size.
pub const MAX_PR_LIMIT: u32 = 100;

/// Inputs for a single `analyze` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub repository: String,
    /// `None` when `--prs` was not passed at all.
    pub prs: Option<u32>,
}

/// Number of pull requests to fetch for the given `--prs` value.
///
/// `None` disables the feature (0). Anything above [`MAX_PR_LIMIT`] is
/// rejected rather than clamped.
pub fn resolve_pr_limit(prs: Option<u32>) -> Result<u32, AnalyzeError> {
    let limit = prs.unwrap_or(0);
    if limit > MAX_PR_LIMIT {
        return Err(AnalyzeError::ValidationFailed { limit });
    }
    Ok(limit)
}

/// A validated request: everything that can be rejected without touching
/// the network has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzePlan {
    pub repo: RepoRef,
    pub pr_limit: u32,
}

impl AnalyzePlan {
    pub fn from_request(request: &AnalyzeRequest) -> Result<Self, AnalyzeError> {
        let repo = parse_repo_ref(&request.repository)?;
        let pr_limit = resolve_pr_limit(request.prs)?;
        Ok(Self { repo, pr_limit })
    }
}

/// Plan and execute in one step.
pub async fn run(client: &GithubClient, request: &AnalyzeRequest) -> Result<Report, AnalyzeError> {
    let plan = AnalyzePlan::from_request(request)?;
    execute(client, &plan).await
}

/// Fetch the repository and, if requested, its pull requests. The first
/// error aborts the run.
pub async fn execute(client: &GithubClient, plan: &AnalyzePlan) -> Result<Report, AnalyzeError> {
    let repo = &plan.repo;
    debug!(repo = %repo, pr_limit = plan.pr_limit, "Starting analysis");

    let repository = client.fetch_repo_info(repo).await?;

    let pull_requests = if plan.pr_limit > 0 {
        Some(client.fetch_pull_requests(repo, plan.pr_limit).await?)
    } else {
        None
    };

    info!(
        repo = %repo,
        prs = pull_requests.as_ref().map_or(0, Vec::len),
        "Analysis complete"
    );

    Ok(Report {
        repository,
        pull_requests,
    })
}
