//! Hygiene rule evaluation.
//!
//! Rules are applied to one repository at a time, in a fixed order:
//! description, default branch, README presence, README image and README
//! length. The README rules depend on a single content lookup whose failure
//! modes are folded as follows:
//!
//! | lookup                 | presence | image          | length    |
//! |------------------------|----------|----------------|-----------|
//! | not found / error      | fail     | counted, no outcome | skipped |
//! | found, undecodable     | pass     | fail           | skipped   |
//! | found, decoded         | pass     | evaluated      | evaluated |

mod decode;
mod error;
mod report;
mod rules;

pub use decode::decode_content;
pub use error::ContentDecodeError;
pub use report::{Evaluation, FailureSet, RepositoryReport};
pub use rules::{
    CheckOutcome, Rule, RuleSet, Verdict, DEFAULT_MIN_README_LENGTH, DEFAULT_README_PATH,
    FLAGGED_BRANCH, IMAGE_MARKER,
};

use crate::provider::{FileLookup, ProviderError, Repository};
use tracing::{debug, warn};

/// Applies every rule to `repository`.
///
/// `readme` is the result of looking up the configured README path; any
/// error is treated exactly like the file being absent.
#[must_use]
pub fn evaluate_repository(
    repository: &Repository,
    readme: Result<FileLookup, ProviderError>,
    rules: &RuleSet,
) -> Evaluation {
    let mut outcomes = Vec::with_capacity(5);
    let mut failures = FailureSet::default();

    // Description
    if repository.description.is_empty() {
        failures.missing_description = true;
        outcomes.push(CheckOutcome::new(Rule::Description, Verdict::Fail, None));
    } else {
        outcomes.push(CheckOutcome::new(
            Rule::Description,
            Verdict::Pass,
            Some(repository.description.clone()),
        ));
    }

    // Default branch
    let is_master = repository.default_branch == FLAGGED_BRANCH;
    failures.default_branch_is_master = is_master;
    outcomes.push(CheckOutcome::new(
        Rule::DefaultBranch,
        Verdict::from_pass(!is_master),
        Some(repository.default_branch.clone()),
    ));

    // README
    let content = match readme {
        Ok(FileLookup::Found(content)) => content,
        Ok(FileLookup::NotFound) => {
            debug!(repo = %repository.name, path = %rules.readme_path, "README not found");
            record_missing_readme(&mut outcomes, &mut failures);
            return finish(repository, outcomes, failures);
        }
        Err(e) => {
            warn!(
                repo = %repository.name,
                path = %rules.readme_path,
                error = %e,
                "README lookup failed, treating as missing"
            );
            record_missing_readme(&mut outcomes, &mut failures);
            return finish(repository, outcomes, failures);
        }
    };

    outcomes.push(CheckOutcome::new(Rule::ReadmePresence, Verdict::Pass, None));

    let text = match decode_content(&content) {
        Ok(text) => text,
        Err(e) => {
            debug!(repo = %repository.name, error = %e, "README content could not be decoded");
            failures.missing_image = true;
            outcomes.push(CheckOutcome::new(
                Rule::ReadmeImage,
                Verdict::Fail,
                Some(e.to_string()),
            ));
            return finish(repository, outcomes, failures);
        }
    };

    let has_image = text.contains(IMAGE_MARKER);
    failures.missing_image = !has_image;
    outcomes.push(CheckOutcome::new(
        Rule::ReadmeImage,
        Verdict::from_pass(has_image),
        None,
    ));

    let length = text.chars().count();
    let long_enough = length >= rules.min_readme_length;
    failures.short_readme = !long_enough;
    outcomes.push(CheckOutcome::new(
        Rule::ReadmeLength,
        Verdict::from_pass(long_enough),
        Some(length.to_string()),
    ));

    finish(repository, outcomes, failures)
}

/// Records a missing README; the image rule cannot pass without content.
fn record_missing_readme(outcomes: &mut Vec<CheckOutcome>, failures: &mut FailureSet) {
    failures.missing_readme = true;
    failures.missing_image = true;
    outcomes.push(CheckOutcome::new(Rule::ReadmePresence, Verdict::Fail, None));
}

fn finish(
    repository: &Repository,
    outcomes: Vec<CheckOutcome>,
    failures: FailureSet,
) -> Evaluation {
    debug!(
        repo = %repository.name,
        outcomes = outcomes.len(),
        "Evaluated repository"
    );
    Evaluation {
        report: RepositoryReport {
            name: repository.name.clone(),
            language: repository.language.clone(),
            last_updated: repository.last_updated,
            outcomes,
        },
        failures,
    }
}
