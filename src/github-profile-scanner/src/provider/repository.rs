//! Repository snapshot as seen by the evaluator.

use serde::Serialize;
use time::OffsetDateTime;

/// A repository belonging to the scanned account.
///
/// Every field has already been validated by the provider, so the evaluator
/// never has to deal with absent values except for `language`, which GitHub
/// legitimately leaves unset for empty repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    /// Repository name, unique within the account.
    pub name: String,

    /// Whether the repository is a fork of another repository.
    pub is_fork: bool,

    /// Repository description; empty when none is set.
    pub description: String,

    /// Default branch name (e.g., "main").
    pub default_branch: String,

    /// Time of the last update to the repository.
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,

    /// Primary language, if GitHub detected one.
    pub language: Option<String>,
}
