//! Account-wide failure counters.

use super::SummaryLine;
use crate::evaluation::{FailureSet, Rule};
use serde::Serialize;

/// Failure counters accumulated over one scan.
///
/// Every counter is bounded by `total_repositories_seen`, since each
/// repository is recorded exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AccountTally {
    /// Repositories with an empty description.
    pub missing_description: usize,

    /// Repositories without a README.
    pub missing_readme: usize,

    /// Repositories whose README is shorter than the minimum.
    pub short_readme: usize,

    /// Repositories without an image in their README.
    pub missing_image: usize,

    /// Repositories whose default branch is `master`.
    pub default_branch_is_master: usize,

    /// Non-fork repositories evaluated.
    pub total_repositories_seen: usize,
}

impl AccountTally {
    /// Creates an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the failures of one evaluated repository.
    pub fn record(&mut self, failures: &FailureSet) {
        self.total_repositories_seen += 1;
        self.missing_description += usize::from(failures.missing_description);
        self.missing_readme += usize::from(failures.missing_readme);
        self.short_readme += usize::from(failures.short_readme);
        self.missing_image += usize::from(failures.missing_image);
        self.default_branch_is_master += usize::from(failures.default_branch_is_master);
    }

    /// Returns one summary line per rule.
    ///
    /// Order: description, README presence, README image, README length,
    /// default branch.
    #[must_use]
    pub fn summary_lines(&self) -> [SummaryLine; 5] {
        [
            SummaryLine::new(Rule::Description, self.missing_description),
            SummaryLine::new(Rule::ReadmePresence, self.missing_readme),
            SummaryLine::new(Rule::ReadmeImage, self.missing_image),
            SummaryLine::new(Rule::ReadmeLength, self.short_readme),
            SummaryLine::new(Rule::DefaultBranch, self.default_branch_is_master),
        ]
    }
}
