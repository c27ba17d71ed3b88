//! Per-repository results.

use super::{CheckOutcome, Rule};
use serde::Serialize;
use time::OffsetDateTime;

/// Scorecard of a single repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryReport {
    /// Repository name.
    pub name: String,

    /// Primary language, if known.
    pub language: Option<String>,

    /// Time of the last update.
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,

    /// Outcomes of the rules that were evaluated, in evaluation order.
    pub outcomes: Vec<CheckOutcome>,
}

impl RepositoryReport {
    /// Returns the outcome recorded for `rule`, if it was evaluated.
    #[must_use]
    pub fn outcome(&self, rule: Rule) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.rule == rule)
    }
}

/// Tally counters a single repository contributes to.
///
/// This is not derivable from the outcomes alone: a missing README also
/// counts as a missing image without an image outcome being recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailureSet {
    pub missing_description: bool,
    pub missing_readme: bool,
    pub short_readme: bool,
    pub missing_image: bool,
    pub default_branch_is_master: bool,
}

/// Everything the evaluator produces for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Report handed to the renderer.
    pub report: RepositoryReport,

    /// Counters to record in the account tally.
    pub failures: FailureSet,
}
