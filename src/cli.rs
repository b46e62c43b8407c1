use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::analyze::AnalyzeRequest;
use crate::output::{DownloadFormat, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "ghrepo",
    version,
    about = "Fetch and display GitHub repository information"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging to file
    #[arg(long, global = true)]
    pub debug: bool,

    /// GitHub personal access token (falls back to GITHUB_TOKEN, then GH_TOKEN)
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a GitHub repository
    ///
    /// The repository can be given as `owner/repo` or as a full URL such as
    /// https://github.com/owner/repo.
    Analyze(AnalyzeArgs),
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Repository as owner/repo or a GitHub URL
    pub repository: String,

    /// Output format (defaults to the config file, then table)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show recent pull requests: 5 when given without a number, at most 100
    #[arg(
        short,
        long,
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "5"
    )]
    pub prs: Option<u32>,

    /// Also save the report to a file in this format
    #[arg(short, long, value_enum)]
    pub download: Option<DownloadFormat>,
}

impl AnalyzeArgs {
    pub fn request(&self) -> AnalyzeRequest {
        AnalyzeRequest {
            repository: self.repository.clone(),
            prs: self.prs,
        }
    }
}
