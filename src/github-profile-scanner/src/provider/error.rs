//! Provider error types.

use thiserror::Error;

/// Errors that can occur while talking to the repository provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),

    /// The API returned a repository without a field the scanner requires.
    #[error("Repository '{repository}' is missing required field '{field}'")]
    MissingField {
        repository: String,
        field: &'static str,
    },

    /// The configured API base URL could not be used.
    #[error("Invalid API URL '{url}': {message}")]
    InvalidApiUrl { url: String, message: String },
}
