//! Summary line types.

use crate::evaluation::Rule;
use serde::Serialize;

/// Account-level verdict for one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    /// The rule summarized.
    pub rule: Rule,

    /// Number of repositories failing it.
    pub failing: usize,
}

impl SummaryLine {
    pub fn new(rule: Rule, failing: usize) -> Self {
        Self { rule, failing }
    }

    /// Returns true if every repository passes the rule.
    #[must_use]
    pub fn passes_all(&self) -> bool {
        self.failing == 0
    }
}
