//! Orchestrates a scan of one account.

mod config;
mod error;

pub use config::ScannerConfig;
pub use error::ScanError;

use crate::evaluation::{evaluate_repository, RuleSet};
use crate::provider::{GitHubProvider, RepositoryProvider};
use crate::render::ReportSink;
use crate::selection::select_repositories;
use crate::summary::AccountTally;
use tracing::{info, info_span, Instrument};

/// Scans the repositories of `account` and streams the results to `sink`.
///
/// Repositories are evaluated one at a time, oldest-updated first. Each
/// report is handed to the sink as soon as it is computed; the tally follows
/// after the last repository.
///
/// # Errors
///
/// Returns [`ScanError::List`] if the repository list cannot be fetched, in
/// which case the sink receives nothing. README lookup failures never abort
/// the scan. Sink errors are propagated as [`ScanError::Render`].
pub async fn scan<P, S>(
    provider: &P,
    account: &str,
    rules: &RuleSet,
    sink: &mut S,
) -> Result<AccountTally, ScanError>
where
    P: RepositoryProvider + ?Sized,
    S: ReportSink + ?Sized,
{
    let span = info_span!("scan", account = %account);

    async {
        info!("Scanning GitHub profile of {account}...");

        let repositories = provider
            .list_repositories(account)
            .await
            .map_err(ScanError::List)?;
        let listed = repositories.len();
        let selected = select_repositories(repositories);
        info!(listed, selected = selected.len(), "Selected repositories");

        let mut tally = AccountTally::new();
        for repository in &selected {
            let readme = provider
                .get_file_content(account, &repository.name, &rules.readme_path)
                .await;
            let evaluation = evaluate_repository(repository, readme, rules);
            tally.record(&evaluation.failures);
            sink.repository(&evaluation.report)?;
        }

        sink.finish(&tally)?;
        info!(
            repositories = tally.total_repositories_seen,
            "Scan complete"
        );
        Ok(tally)
    }
    .instrument(span)
    .await
}

/// Runs scans for a configured account.
pub struct Scanner<P = GitHubProvider> {
    config: ScannerConfig,
    provider: P,
}

impl Scanner<GitHubProvider> {
    /// Builds a scanner backed by the GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Provider`] if the client cannot be built.
    pub fn new(config: ScannerConfig) -> Result<Self, ScanError> {
        let provider = GitHubProvider::new(config.token(), config.settings().api_url.as_ref())
            .map_err(ScanError::Provider)?;
        Ok(Self { config, provider })
    }
}

impl<P: RepositoryProvider> Scanner<P> {
    /// Builds a scanner using `provider`.
    pub fn with_provider(config: ScannerConfig, provider: P) -> Self {
        Self { config, provider }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Executes one scan.
    ///
    /// # Errors
    ///
    /// See [`scan`].
    pub async fn run<S: ReportSink + ?Sized>(&self, sink: &mut S) -> Result<AccountTally, ScanError> {
        scan(
            &self.provider,
            self.config.account(),
            &self.config.settings().rules,
            sink,
        )
        .await
    }
}
