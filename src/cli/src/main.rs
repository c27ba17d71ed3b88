//! CLI for the GitHub Profile Scanner.
//!
//! Audits the public, non-fork repositories of an account against repository
//! hygiene rules and prints a scorecard per repository plus a summary.

use clap::Parser;
use github_profile_scanner::{
    AccountTally, OutputFormat, Overrides, ScanError, Scanner, ScannerConfig, Settings,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// GitHub Profile Scanner - Check the public repositories of an account for missing descriptions, READMEs and images.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub account to scan.
    account: String,

    /// GitHub Personal Access Token. Scans anonymously when absent.
    #[arg(long, env = "GITHUB_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Path to a TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the GitHub API (e.g. for GitHub Enterprise).
    #[arg(long)]
    api_url: Option<String>,

    /// Output format: text or json.
    #[arg(long)]
    format: Option<OutputFormat>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    match run(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Scan failed");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so that stdout only carries the report:
/// - Compact log formatting without module target paths
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Resolves settings from the optional file and command line flags.
fn resolve_settings(args: &Args) -> Result<Settings, ScanError> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    Ok(settings.merge(Overrides {
        api_url: args.api_url.clone(),
        format: args.format,
    })?)
}

/// Main execution logic.
async fn run(args: Args) -> Result<AccountTally, ScanError> {
    let settings = resolve_settings(&args)?;
    let mut sink = settings
        .format
        .sink(std::io::stdout(), &settings.rules.readme_path)?;

    let config = ScannerConfig::new(args.account, args.token).with_settings(settings);
    let scanner = Scanner::new(config)?;
    scanner.run(&mut sink).await
}
