//! Repository selection and ordering.

use crate::provider::Repository;

/// Drops forks and orders the rest oldest-updated first.
///
/// The sort is stable, so repositories sharing a timestamp keep the order
/// the provider returned them in.
#[must_use]
pub fn select_repositories(repositories: Vec<Repository>) -> Vec<Repository> {
    let mut selected: Vec<Repository> = repositories.into_iter().filter(|r| !r.is_fork).collect();
    selected.sort_by_key(|r| r.last_updated);
    selected
}
