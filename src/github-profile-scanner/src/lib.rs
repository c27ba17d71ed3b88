#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod evaluation;
pub mod provider;
pub mod render;
pub mod scanner;
pub mod selection;
pub mod summary;

pub use config::{ConfigError, Overrides, Settings};
pub use evaluation::{
    decode_content, evaluate_repository, CheckOutcome, ContentDecodeError, Evaluation,
    FailureSet, RepositoryReport, Rule, RuleSet, Verdict,
};
pub use provider::{
    ContentEncoding, FileContent, FileLookup, GitHubProvider, ProviderError, Repository,
    RepositoryProvider,
};
pub use render::{JsonRenderer, OutputFormat, RenderError, ReportSink, TextRenderer};
pub use scanner::{scan, ScanError, Scanner, ScannerConfig};
pub use selection::select_repositories;
pub use summary::{AccountTally, SummaryLine};
