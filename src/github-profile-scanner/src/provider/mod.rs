//! Access to the repositories of an account.
//!
//! The evaluator only ever talks to a [`RepositoryProvider`]; the GitHub
//! implementation lives in [`GitHubProvider`] and tests substitute an
//! in-memory one.

mod error;
mod github;
mod repository;

pub use error::ProviderError;
pub use github::GitHubProvider;
pub use repository::Repository;

use async_trait::async_trait;

/// Transfer encoding of a file payload as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEncoding {
    /// Base64 encoded, possibly wrapped across lines.
    Base64,
    /// No encoding; the payload is the file text.
    Plain,
    /// Any other encoding the scanner does not understand.
    Other(String),
}

impl ContentEncoding {
    /// Maps the API's `encoding` field onto a [`ContentEncoding`].
    #[must_use]
    pub fn from_api(encoding: Option<&str>) -> Self {
        match encoding {
            Some("base64") => Self::Base64,
            None | Some("") => Self::Plain,
            Some(other) => Self::Other(other.to_string()),
        }
    }
}

/// Raw, not yet decoded content of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    /// Encoding of `payload`.
    pub encoding: ContentEncoding,

    /// Payload exactly as returned by the API.
    pub payload: String,
}

impl FileContent {
    /// Creates content that is already plain text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            encoding: ContentEncoding::Plain,
            payload: text.into(),
        }
    }

    /// Creates base64 encoded content.
    pub fn base64(payload: impl Into<String>) -> Self {
        Self {
            encoding: ContentEncoding::Base64,
            payload: payload.into(),
        }
    }
}

/// Result of looking up a single file in a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileLookup {
    /// The file exists.
    Found(FileContent),

    /// The file does not exist.
    NotFound,
}

/// Source of repositories and file contents for an account.
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    /// Lists every repository owned by `account`, forks included.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the list cannot be fetched or a
    /// repository fails validation. Callers treat this as fatal.
    async fn list_repositories(&self, account: &str) -> Result<Vec<Repository>, ProviderError>;

    /// Fetches the content of `path` in `account/repository`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport or API failures other than
    /// the file being absent.
    async fn get_file_content(
        &self,
        account: &str,
        repository: &str,
        path: &str,
    ) -> Result<FileLookup, ProviderError>;
}
