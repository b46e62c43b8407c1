use tracing::debug;

/// Environment variables consulted, in order, when no `--token` is given.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Resolve the GitHub token using:
/// 1. the `--token` flag, if non-empty
/// 2. `GITHUB_TOKEN` environment variable
/// 3. `GH_TOKEN` environment variable
///
/// Returns `None` when nothing is set; the caller then runs unauthenticated.
pub fn resolve_token(flag: Option<&str>) -> Option<String> {
    resolve_token_with(flag, |key| std::env::var(key).ok())
}

/// Same as [`resolve_token`] with an explicit environment lookup.
pub fn resolve_token_with<F>(flag: Option<&str>, env: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = flag.map(str::trim)
        && !token.is_empty()
    {
        debug!("Token resolved via --token flag");
        return Some(token.to_string());
    }

    for key in TOKEN_ENV_VARS {
        if let Some(token) = env(key)
            && !token.trim().is_empty()
        {
            debug!(var = key, "Token resolved via environment");
            return Some(token.trim().to_string());
        }
    }

    None
}
