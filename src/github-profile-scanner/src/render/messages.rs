//! Wording of per-rule and summary lines.

use crate::evaluation::{CheckOutcome, Rule, Verdict};
use crate::summary::SummaryLine;

const PASS_MARK: &str = "✓";
const FAIL_MARK: &str = "✕";

/// Formats a single outcome as a marked line, e.g. `✓ Default branch is main`.
#[must_use]
pub fn outcome_message(outcome: &CheckOutcome, readme_path: &str) -> String {
    let detail = outcome.detail.as_deref().unwrap_or_default();
    let text = match (outcome.rule, outcome.verdict) {
        (Rule::Description, Verdict::Pass) => format!("Description: {detail}"),
        (Rule::Description, Verdict::Fail) => "No description".to_string(),
        (Rule::DefaultBranch, _) => format!("Default branch is {detail}"),
        (Rule::ReadmePresence, Verdict::Pass) => readme_path.to_string(),
        (Rule::ReadmePresence, Verdict::Fail) => format!("No {readme_path}"),
        (Rule::ReadmeImage, Verdict::Pass) => format!("Image in {readme_path}"),
        (Rule::ReadmeImage, Verdict::Fail) => match &outcome.detail {
            Some(error) => format!("Error getting {readme_path} content: {error}"),
            None => format!("No image in {readme_path}"),
        },
        (Rule::ReadmeLength, Verdict::Pass) => {
            format!("{readme_path} is long enough ({detail} characters)")
        }
        (Rule::ReadmeLength, Verdict::Fail) => {
            format!("{readme_path} is too short ({detail} characters)")
        }
    };

    let mark = if outcome.verdict.is_pass() {
        PASS_MARK
    } else {
        FAIL_MARK
    };
    format!("{mark} {text}")
}

/// Formats an account-level summary line.
#[must_use]
pub fn summary_message(line: &SummaryLine, readme_path: &str) -> String {
    let n = line.failing;
    match (line.rule, line.passes_all()) {
        (Rule::Description, true) => "All repositories have descriptions".to_string(),
        (Rule::Description, false) => format!("{n} repositories missing description"),
        (Rule::ReadmePresence, true) => format!("All repositories have {readme_path}"),
        (Rule::ReadmePresence, false) => format!("{n} repositories missing {readme_path}"),
        (Rule::ReadmeImage, true) => "All repositories have images".to_string(),
        (Rule::ReadmeImage, false) => format!("{n} repositories missing images"),
        (Rule::ReadmeLength, true) => {
            format!("All repositories have a long-enough {readme_path}")
        }
        (Rule::ReadmeLength, false) => format!("{n} repositories have a short {readme_path}"),
        (Rule::DefaultBranch, true) => {
            "All repositories have non-master default branch".to_string()
        }
        (Rule::DefaultBranch, false) => {
            format!("{n} repositories have master as default branch")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_outcomes() {
        let cases = [
            (Rule::Description, Verdict::Pass, Some("A tool"), "✓ Description: A tool"),
            (Rule::Description, Verdict::Fail, None, "✕ No description"),
            (Rule::DefaultBranch, Verdict::Fail, Some("master"), "✕ Default branch is master"),
            (Rule::ReadmePresence, Verdict::Fail, None, "✕ No README.md"),
            (Rule::ReadmeImage, Verdict::Fail, None, "✕ No image in README.md"),
            (
                Rule::ReadmeLength,
                Verdict::Pass,
                Some("120"),
                "✓ README.md is long enough (120 characters)",
            ),
        ];

        for (rule, verdict, detail, expected) in cases {
            let outcome = CheckOutcome::new(rule, verdict, detail.map(str::to_owned));
            assert_eq!(outcome_message(&outcome, "README.md"), expected);
        }
    }

    #[test]
    fn image_failure_with_detail_reports_decode_error() {
        let outcome = CheckOutcome::new(
            Rule::ReadmeImage,
            Verdict::Fail,
            Some("unsupported content encoding 'none'".to_string()),
        );

        assert_eq!(
            outcome_message(&outcome, "README.md"),
            "✕ Error getting README.md content: unsupported content encoding 'none'"
        );
    }

    #[test]
    fn formats_summary_lines() {
        assert_eq!(
            summary_message(&SummaryLine::new(Rule::ReadmeLength, 0), "README.md"),
            "All repositories have a long-enough README.md"
        );
        assert_eq!(
            summary_message(&SummaryLine::new(Rule::DefaultBranch, 3), "README.md"),
            "3 repositories have master as default branch"
        );
    }
}
