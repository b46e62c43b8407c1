use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, Url, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::locator::RepoRef;
use super::models::*;
use crate::error::AnalyzeError;
use crate::util::time::format_date;

const API_VERSION: &str = "2022-11-28";

/// Thin client over the two GitHub REST endpoints this tool reads.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_url: Url,
    token: Option<String>,
}

impl GithubClient {
    /// Build a client for `api_url`. An empty token is treated as no token.
    ///
    /// Plain `http` is only accepted for loopback hosts.
    pub fn new(
        token: Option<&str>,
        api_url: &str,
        timeout: Duration,
    ) -> Result<Self, AnalyzeError> {
        let base = Url::parse(api_url).map_err(|e| AnalyzeError::InvalidConfig {
            message: format!("invalid GitHub API URL {api_url}: {e}"),
        })?;

        let loopback = matches!(base.host_str(), Some("localhost" | "127.0.0.1" | "[::1]"));
        let secure = base.scheme() == "https" || (base.scheme() == "http" && loopback);
        if !secure {
            return Err(AnalyzeError::InvalidConfig {
                message: format!("GitHub API URL must use HTTPS: {api_url}"),
            });
        }

        let client = Client::builder()
            .user_agent("ghrepo")
            .timeout(timeout)
            .build()
            .map_err(|e| AnalyzeError::InvalidConfig {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_url: base,
            token: token.filter(|t| !t.is_empty()).map(str::to_string),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `{api_url}/repos/{owner}/{name}[/{extra}]`, each segment percent-encoded
    /// so owner and name can never reach another endpoint or the query string.
    fn repo_endpoint(&self, repo: &RepoRef, extra: &[&str]) -> Result<Url, AnalyzeError> {
        if [&repo.owner, &repo.name]
            .iter()
            .any(|s| matches!(s.as_str(), "" | "." | ".."))
        {
            return Err(AnalyzeError::InvalidFormat {
                input: repo.to_string(),
            });
        }

        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| AnalyzeError::InvalidConfig {
                message: format!("GitHub API URL cannot be a base: {}", self.api_url),
            })?
            .pop_if_empty()
            .extend(["repos", repo.owner.as_str(), repo.name.as_str()])
            .extend(extra);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, AnalyzeError> {
        let mut request = self
            .client
            .get(url.clone())
            .header(header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .query(query);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        debug!(url = %url.as_str(), authenticated = self.token.is_some(), "GitHub REST request");

        let resp = request
            .send()
            .await
            .map_err(|e| AnalyzeError::fetch(format!("request to {url} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AnalyzeError::fetch(format!(
                "GitHub API returned {}: {}",
                status,
                error_message(&text)
            )));
        }

        resp.json()
            .await
            .map_err(|e| AnalyzeError::fetch(format!("failed to parse GitHub response: {e}")))
    }

    pub async fn fetch_repo_info(&self, repo: &RepoRef) -> Result<RepositoryInfo, AnalyzeError> {
        let url = self.repo_endpoint(repo, &[])?;
        let raw: ApiRepository = self.get(url, &[]).await?;
        let info = raw.into_info();
        debug!(repo = %repo, stars = info.stars, "Fetched repository");
        Ok(info)
    }

    /// List up to `limit` pull requests in every state, first page only.
    ///
    /// The caller is responsible for keeping `limit` within GitHub's page
    /// size of 100.
    pub async fn fetch_pull_requests(
        &self,
        repo: &RepoRef,
        limit: u32,
    ) -> Result<Vec<PullRequestInfo>, AnalyzeError> {
        let url = self.repo_endpoint(repo, &["pulls"])?;
        let per_page = limit.to_string();
        let raw: Vec<ApiPullRequest> = self
            .get(url, &[("state", "all"), ("per_page", per_page.as_str())])
            .await?;

        let prs: Vec<PullRequestInfo> = raw.into_iter().map(ApiPullRequest::into_info).collect();
        debug!(repo = %repo, limit = limit, count = prs.len(), "Fetched pull requests");
        Ok(prs)
    }
}

/// Pull GitHub's `message` out of an error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiRepository {
    name: Option<String>,
    full_name: Option<String>,
    description: Option<String>,
    stargazers_count: Option<u64>,
    forks_count: Option<u64>,
    open_issues_count: Option<u64>,
    language: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl ApiRepository {
    fn into_info(self) -> RepositoryInfo {
        RepositoryInfo {
            name: self.name.unwrap_or_default(),
            full_name: self.full_name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            stars: self.stargazers_count.unwrap_or(0),
            forks: self.forks_count.unwrap_or(0),
            open_issues: self.open_issues_count.unwrap_or(0),
            language: self.language.unwrap_or_default(),
            created_at: format_date(self.created_at.as_ref()),
            updated_at: format_date(self.updated_at.as_ref()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiPullRequest {
    number: Option<u64>,
    title: Option<String>,
    state: Option<String>,
    user: Option<ApiUser>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiUser {
    login: Option<String>,
}

impl ApiPullRequest {
    fn into_info(self) -> PullRequestInfo {
        PullRequestInfo {
            number: self.number.unwrap_or(0),
            title: self.title.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            author: self.user.and_then(|u| u.login).unwrap_or_default(),
        }
    }
}
