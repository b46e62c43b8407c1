pub mod auth;
pub mod locator;
pub mod models;
pub mod rest;

pub use locator::{RepoRef, parse_repo_ref};
pub use models::*;
pub use rest::GithubClient;
