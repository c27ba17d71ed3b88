//! Scan error types.

use crate::config::ConfigError;
use crate::provider::ProviderError;
use crate::render::RenderError;

/// Errors that abort a scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The repository list could not be fetched; nothing was reported.
    #[error("Failed to list repositories: {0}")]
    List(#[source] ProviderError),

    /// The provider could not be set up.
    #[error("Failed to create repository provider: {0}")]
    Provider(#[source] ProviderError),

    /// Report output failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Settings loading errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
