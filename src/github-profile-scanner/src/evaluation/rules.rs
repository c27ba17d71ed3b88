//! Hygiene rules and their outcomes.

use serde::{Deserialize, Serialize};

/// Substring that marks an image (or image link) in markdown.
pub const IMAGE_MARKER: &str = "![";

/// Default branch name that gets flagged.
pub const FLAGGED_BRANCH: &str = "master";

/// File looked up when no other path is configured.
pub const DEFAULT_README_PATH: &str = "README.md";

/// Minimum README length, in characters, when none is configured.
pub const DEFAULT_MIN_README_LENGTH: usize = 100;

/// A single hygiene check applied to every repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Repository has a description.
    Description,
    /// Default branch is not `master`.
    DefaultBranch,
    /// README exists.
    ReadmePresence,
    /// README contains an image.
    ReadmeImage,
    /// README is long enough.
    ReadmeLength,
}

impl Rule {
    /// Returns the rule name as used in machine readable output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::DefaultBranch => "default-branch",
            Self::ReadmePresence => "readme-presence",
            Self::ReadmeImage => "readme-image",
            Self::ReadmeLength => "readme-length",
        }
    }
}

/// Pass or fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Returns [`Verdict::Pass`] if `condition` holds.
    #[must_use]
    pub fn from_pass(condition: bool) -> Self {
        if condition {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Outcome of applying one [`Rule`] to one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// The rule that was applied.
    pub rule: Rule,

    /// Whether it passed.
    pub verdict: Verdict,

    /// Human readable detail, e.g. the description text or a character count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckOutcome {
    pub fn new(rule: Rule, verdict: Verdict, detail: Option<String>) -> Self {
        Self {
            rule,
            verdict,
            detail,
        }
    }
}

/// Tunable parts of the rule set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct RuleSet {
    /// Path of the README file inside each repository.
    pub readme_path: String,

    /// Minimum README length in characters.
    pub min_readme_length: usize,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            readme_path: DEFAULT_README_PATH.to_string(),
            min_readme_length: DEFAULT_MIN_README_LENGTH,
        }
    }
}
