use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use ghrepo::analyze::{self, AnalyzePlan};
use ghrepo::cli::{AnalyzeArgs, Cli, Commands};
use ghrepo::github::{self, GithubClient};
use ghrepo::output;
use ghrepo::util::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    // Setup logging
    let _guard = setup_logging(&config, cli.debug)?;

    info!("ghrepo starting");

    match cli.command {
        Commands::Analyze(args) => run_analyze(&config, cli.token.as_deref(), &args).await,
    }
}

async fn run_analyze(config: &AppConfig, token: Option<&str>, args: &AnalyzeArgs) -> Result<()> {
    let plan = AnalyzePlan::from_request(&args.request()).context("Invalid analyze arguments")?;

    let token = github::auth::resolve_token(token);
    let client = GithubClient::new(token.as_deref(), &config.github.api_url, config.timeout())
        .context("Error creating GitHub client")?;
    if !client.is_authenticated() {
        warn!("No GitHub token resolved, using unauthenticated client");
        println!("Warning: No GitHub token provided. Using unauthenticated client (rate limited)");
        println!("Set GITHUB_TOKEN environment variable or use --token flag");
    }

    let report = analyze::execute(&client, &plan)
        .await
        .with_context(|| format!("Error analyzing repository {}", plan.repo))?;

    let format = args.format.unwrap_or(config.output.format);
    output::display(&report, format, &mut std::io::stdout().lock())
        .context("Error displaying output")?;

    if let Some(download) = args.download {
        let path = output::save_report(&report, download, &config.download_dir())
            .context("Error saving report")?;
        println!("💾 Report saved to {}", path.display());
    }

    Ok(())
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "ghrepo.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("ghrepo=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
