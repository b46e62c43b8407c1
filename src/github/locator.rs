use std::fmt;
use std::str::FromStr;

use crate::error::AnalyzeError;

/// An `owner/name` pair addressing a single GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = AnalyzeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_repo_ref(s)
    }
}

/// Empty, `.` and `..` segments can never name an owner or a repository.
fn is_segment(s: &str) -> bool {
    !s.is_empty() && s != "." && s != ".."
}

/// Parse a repository reference given either as `owner/name` or as a URL.
///
/// Accepted forms:
///   - `owner/name`
///   - `github.com/owner/name[/...]`
///   - `https://github.com/owner/name[/...]` (or `http://`, optionally `www.`)
///
/// Anything past the second path segment is ignored, so `owner/name/extra`
/// is accepted as `owner/name` as well.
pub fn parse_repo_ref(input: &str) -> Result<RepoRef, AnalyzeError> {
    let input = input.trim();

    if !input.contains("github.com") && input.contains('/') {
        let parts: Vec<&str> = input.split('/').collect();
        if let [owner, name] = parts.as_slice()
            && is_segment(owner)
            && is_segment(name)
        {
            return Ok(RepoRef::new(*owner, *name));
        }
    }

    let path = input.strip_prefix("https://").unwrap_or(input);
    let path = path.strip_prefix("http://").unwrap_or(path);
    let path = path.strip_prefix("www.").unwrap_or(path);
    let path = path.strip_prefix("github.com/").unwrap_or(path);

    let mut segments = path.split('/');
    match (segments.next(), segments.next()) {
        (Some(owner), Some(name)) if is_segment(owner) && is_segment(name) => {
            Ok(RepoRef::new(owner, name))
        }
        _ => Err(AnalyzeError::InvalidFormat {
            input: input.to_string(),
        }),
    }
}
